//! Node view for graph and linked-list playback
//!
//! `visit` marks a node visited and `highlight` marks it active; both flags
//! only last until the next step. Distances recorded by `distance` steps
//! persist so the current shortest-path estimates stay on screen.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use log::trace;
use serde::{Deserialize, Serialize};

use stepwise_core::algorithm::step::{Step, StepKind};
use stepwise_core::algorithm::traits::NodeId;
use stepwise_core::data_structures::graph::GraphNode;
use stepwise_core::data_structures::linked_list::ListNode;
use stepwise_core::execution::replay::ReplayError;

use crate::config::ViewFamily;
use crate::view::StepView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    pub id: NodeId,
    pub label: String,
    pub is_active: bool,
    pub is_visited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl DisplayNode {
    fn new(id: NodeId, label: String) -> Self {
        Self {
            id,
            label,
            is_active: false,
            is_visited: false,
            distance: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    family: ViewFamily,
    nodes: Vec<DisplayNode>,
    index: HashMap<NodeId, usize>,
}

impl NodeView {
    pub fn for_graph(nodes: &[GraphNode]) -> Self {
        Self::build(
            ViewFamily::Graph,
            nodes.iter().map(|node| DisplayNode::new(node.id.clone(), node.label.clone())),
        )
    }

    pub fn for_list(nodes: &[ListNode]) -> Self {
        Self::build(
            ViewFamily::List,
            nodes.iter().map(|node| DisplayNode::new(node.id.clone(), node.value.to_string())),
        )
    }

    fn build(family: ViewFamily, nodes: impl Iterator<Item = DisplayNode>) -> Self {
        let nodes: Vec<DisplayNode> = nodes.collect();
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            index.entry(node.id.clone()).or_insert(position);
        }
        Self { family, nodes, index }
    }

    pub fn nodes(&self) -> &[DisplayNode] {
        &self.nodes
    }

    pub fn get(&self, id: &NodeId) -> Option<&DisplayNode> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn active(&self) -> Vec<&NodeId> {
        self.nodes.iter().filter(|n| n.is_active).map(|n| &n.id).collect()
    }

    pub fn visited(&self) -> Vec<&NodeId> {
        self.nodes.iter().filter(|n| n.is_visited).map(|n| &n.id).collect()
    }

    fn clear_transient(&mut self) {
        for node in &mut self.nodes {
            node.is_active = false;
            node.is_visited = false;
        }
    }
}

impl StepView for NodeView {
    fn family(&self) -> ViewFamily {
        self.family
    }

    fn apply(&mut self, step: &Step, position: usize) -> Result<(), ReplayError> {
        let ids = step
            .node_ids()
            .ok_or(ReplayError::TargetMismatch { step: position })?;

        self.clear_transient();
        for id in ids {
            // Steps naming nodes that are not displayed have nothing to flag.
            let Some(&slot) = self.index.get(id) else {
                trace!("Step {} names undisplayed node {}", position, id);
                continue;
            };
            let node = &mut self.nodes[slot];
            match step.kind() {
                StepKind::Visit => node.is_visited = true,
                StepKind::Highlight => node.is_active = true,
                StepKind::Distance => node.distance = step.distance(),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.clear_transient();
    }
}
