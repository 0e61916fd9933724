//! Binary search tree over a flat, id-indexed node collection
//!
//! Children are referenced by id rather than owned, so the tree is a flat
//! list of [`TreeNode`]s plus an id index. The first inserted node is the
//! permanent root; the tree only grows by insertion and is never rebalanced,
//! so its shape depends entirely on insertion order.
//!
//! # Ordering Invariant
//! For every node, values reachable through `left` are strictly smaller and
//! values reachable through `right` are greater or equal. Duplicates always
//! route right.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::traits::NodeId;
use crate::data_structures::ids::IdAllocator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Tree already contains a node with id {0}")]
    DuplicateId(NodeId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<NodeId>,
}

impl TreeNode {
    pub fn leaf(id: impl Into<NodeId>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    nodes: Vec<TreeNode>,
    index: HashMap<NodeId, usize>,
    ids: IdAllocator,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `values` in order
    pub fn from_values(values: &[f64]) -> Self {
        let mut tree = Self::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// Inserts `value` under a freshly allocated id and returns that id
    pub fn insert(&mut self, value: f64) -> NodeId {
        let mut id = self.ids.allocate();
        // Caller-supplied ids may already occupy the allocator's namespace.
        while self.index.contains_key(&id) {
            id = self.ids.allocate();
        }
        self.attach(TreeNode::leaf(id.clone(), value));
        id
    }

    /// Inserts `value` under a caller-supplied id
    pub fn insert_with_id(&mut self, id: impl Into<NodeId>, value: f64) -> Result<NodeId, TreeError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(TreeError::DuplicateId(id));
        }
        self.attach(TreeNode::leaf(id.clone(), value));
        Ok(id)
    }

    fn attach(&mut self, node: TreeNode) {
        let position = self.nodes.len();
        let id = node.id.clone();
        let value = node.value;

        if position > 0 {
            let parent = self.descend(value);
            let parent = &mut self.nodes[parent];
            if value < parent.value {
                parent.left = Some(id.clone());
            } else {
                parent.right = Some(id.clone());
            }
            debug!("Inserted {} ({}) under {}", id, value, parent.id);
        } else {
            debug!("Inserted {} ({}) as root", id, value);
        }

        self.index.insert(id, position);
        self.nodes.push(node);
    }

    /// Position of the node that will become `value`'s parent
    fn descend(&self, value: f64) -> usize {
        let mut current = 0;
        loop {
            let node = &self.nodes[current];
            let child = if value < node.value { &node.left } else { &node.right };
            match child.as_ref().and_then(|id| self.index.get(id)) {
                Some(&next) => current = next,
                None => return current,
            }
        }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.nodes.first()
    }

    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Read-only snapshot in insertion order; the root comes first
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels; an empty tree has height 0
    pub fn height(&self) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [&node.left, &node.right].into_iter().flatten() {
                if let Some(child) = self.get(child) {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    /// Removes every node; ids keep counting up
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
