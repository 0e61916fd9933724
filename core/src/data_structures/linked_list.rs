//! Singly linked list with instrumented linear search
//!
//! Nodes are stored in list order and linked by id through `next`; the last
//! node has no successor. Every mutation keeps the `next` chain consistent
//! with the storage order, so walking from the head and iterating the
//! snapshot always agree. Id lookups go through a position index rebuilt
//! from the first changed slot on every mutation.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::NodeId;
use crate::data_structures::ids::IdAllocator;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("List has no node with id {0}")]
    NodeNotFound(NodeId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub id: NodeId,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    nodes: Vec<ListNode>,
    /// Id to storage position
    index: HashMap<NodeId, usize>,
    ids: IdAllocator,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Self {
        let mut list = Self::new();
        for &value in values {
            list.append(value);
        }
        list
    }

    /// Adds `value` at the tail
    pub fn append(&mut self, value: f64) -> NodeId {
        let id = self.ids.allocate();
        if let Some(tail) = self.nodes.last_mut() {
            tail.next = Some(id.clone());
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(ListNode {
            id: id.clone(),
            value,
            next: None,
        });
        debug!("Appended {} ({})", id, value);
        id
    }

    /// Adds `value` at the head
    pub fn prepend(&mut self, value: f64) -> NodeId {
        let id = self.ids.allocate();
        let next = self.nodes.first().map(|head| head.id.clone());
        self.nodes.insert(
            0,
            ListNode {
                id: id.clone(),
                value,
                next,
            },
        );
        self.reindex_from(0);
        debug!("Prepended {} ({})", id, value);
        id
    }

    /// Unlinks the node with `id`, pointing its predecessor at its successor
    pub fn remove(&mut self, id: &NodeId) -> Result<ListNode, ListError> {
        let position = self
            .index
            .remove(id)
            .ok_or_else(|| ListError::NodeNotFound(id.clone()))?;

        let removed = self.nodes.remove(position);
        if position > 0 {
            self.nodes[position - 1].next = removed.next.clone();
        }
        self.reindex_from(position);
        debug!("Removed {} ({})", removed.id, removed.value);
        Ok(removed)
    }

    /// Walks from the head until `value` is found.
    ///
    /// Every node walked gets a `highlight` step; the match additionally gets
    /// a `visit`. A miss highlights the whole list and nothing else.
    pub fn search(&self, value: f64) -> Vec<Step> {
        let mut tracer = StepTracer::with_capacity("linked list search", self.nodes.len() + 1);
        for (position, node) in self.nodes.iter().enumerate() {
            tracer.node(
                StepKind::Highlight,
                &node.id,
                format!("Checking node {} with value {}", position, node.value),
            );
            if node.value == value {
                tracer.node(
                    StepKind::Visit,
                    &node.id,
                    format!("Found value {} at position {}", value, position),
                );
                break;
            }
        }
        tracer.finish()
    }

    /// Ids in link order, starting at the head
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut current = self.nodes.first();
        while let Some(node) = current {
            order.push(node.id.clone());
            current = node
                .next
                .as_ref()
                .and_then(|next| self.get(next));
            if order.len() > self.nodes.len() {
                break;
            }
        }
        order
    }

    pub fn get(&self, id: &NodeId) -> Option<&ListNode> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// Read-only snapshot in list order
    pub fn nodes(&self) -> &[ListNode] {
        &self.nodes
    }

    pub fn values(&self) -> Vec<f64> {
        self.nodes.iter().map(|node| node.value).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, node) in self.nodes.iter().enumerate().skip(start) {
            self.index.insert(node.id.clone(), position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::replay::visit_order;

    fn chain_is_consistent(list: &LinkedList) -> bool {
        let stored: Vec<NodeId> = list.nodes().iter().map(|n| n.id.clone()).collect();
        list.traverse() == stored && list.nodes().last().map_or(true, |tail| tail.next.is_none())
    }

    #[test]
    fn test_append_and_prepend() {
        let mut list = LinkedList::from_values(&[2.0, 3.0]);
        list.prepend(1.0);
        list.append(4.0);

        assert_eq!(list.values(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(chain_is_consistent(&list));
    }

    #[test]
    fn test_remove_relinks_predecessor() {
        let mut list = LinkedList::from_values(&[1.0, 2.0, 3.0]);
        let middle = list.nodes()[1].id.clone();
        let removed = list.remove(&middle).unwrap();

        assert_eq!(removed.value, 2.0);
        assert_eq!(list.nodes()[0].next.as_ref(), Some(&list.nodes()[1].id));
        assert!(chain_is_consistent(&list));
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list = LinkedList::from_values(&[1.0, 2.0, 3.0]);
        let head = list.nodes()[0].id.clone();
        let middle = list.nodes()[1].id.clone();
        let tail = list.nodes()[2].id.clone();

        list.remove(&tail).unwrap();
        list.remove(&head).unwrap();

        assert_eq!(list.values(), vec![2.0]);
        assert!(chain_is_consistent(&list));
        assert_eq!(list.get(&middle).map(|node| node.value), Some(2.0));
        assert!(list.get(&head).is_none());
        assert!(list.get(&tail).is_none());
    }

    #[test]
    fn test_get_after_prepend_and_clear() {
        let mut list = LinkedList::from_values(&[2.0, 3.0]);
        let second = list.nodes()[1].id.clone();
        let head = list.prepend(1.0);

        assert_eq!(list.get(&head).map(|node| node.value), Some(1.0));
        assert_eq!(list.get(&second).map(|node| node.value), Some(3.0));

        list.clear();
        assert!(list.get(&head).is_none());
        assert!(list.traverse().is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = LinkedList::from_values(&[1.0]);
        let missing = NodeId::from("node-42");
        assert_eq!(list.remove(&missing), Err(ListError::NodeNotFound(missing)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_search_walks_until_match() {
        let list = LinkedList::from_values(&[7.0, 3.0, 9.0, 3.0]);
        let steps = list.search(3.0);

        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Highlight, StepKind::Highlight, StepKind::Visit]
        );
        assert_eq!(visit_order(&steps), vec![list.nodes()[1].id.clone()]);
        assert_eq!(steps[2].description(), "Found value 3 at position 1");
    }

    #[test]
    fn test_search_miss_highlights_everything() {
        let list = LinkedList::from_values(&[1.0, 2.0]);
        let steps = list.search(5.0);

        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|s| s.kind() == StepKind::Highlight));
        assert!(LinkedList::new().search(1.0).is_empty());
    }

    #[test]
    fn test_ids_never_reused() {
        let mut list = LinkedList::new();
        let first = list.append(1.0);
        list.remove(&first).unwrap();
        let second = list.append(1.0);
        assert_ne!(first, second);
    }
}
