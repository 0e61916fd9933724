//! Tree traversal animation
//!
//! Tree traversals return a plain id sequence; [`traversal_steps`] turns it
//! into `visit` steps so it can be played back like any other log. Only the
//! node being visited is lit, and the last one is cleared on completion.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stepwise_core::algorithm::step::{Step, StepKind};
use stepwise_core::algorithm::traits::NodeId;
use stepwise_core::data_structures::tree::TreeNode;
use stepwise_core::execution::replay::ReplayError;

use crate::config::ViewFamily;
use crate::view::StepView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDisplayNode {
    pub id: NodeId,
    pub value: f64,
    pub is_active: bool,
    pub is_visited: bool,
}

/// One `visit` step per id, described by the node's value
pub fn traversal_steps(nodes: &[TreeNode], order: &[NodeId]) -> Vec<Step> {
    let values: HashMap<&NodeId, f64> = nodes.iter().map(|node| (&node.id, node.value)).collect();
    order
        .iter()
        .map(|id| {
            let description = match values.get(id) {
                Some(value) => format!("Visiting node {}", value),
                None => format!("Visiting node {}", id),
            };
            Step::at_nodes(StepKind::Visit, vec![id.clone()], description)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraversalView {
    nodes: Vec<TreeDisplayNode>,
    /// Ids already visited, in order
    trail: Vec<NodeId>,
}

impl TraversalView {
    pub fn new(nodes: &[TreeNode]) -> Self {
        Self {
            nodes: nodes
                .iter()
                .map(|node| TreeDisplayNode {
                    id: node.id.clone(),
                    value: node.value,
                    is_active: false,
                    is_visited: false,
                })
                .collect(),
            trail: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[TreeDisplayNode] {
        &self.nodes
    }

    pub fn current(&self) -> Option<&TreeDisplayNode> {
        self.nodes.iter().find(|node| node.is_active)
    }

    /// Visited ids so far, the "traversal order" readout
    pub fn trail(&self) -> &[NodeId] {
        &self.trail
    }
}

impl StepView for TraversalView {
    fn family(&self) -> ViewFamily {
        ViewFamily::Tree
    }

    fn apply(&mut self, step: &Step, position: usize) -> Result<(), ReplayError> {
        let ids = step
            .node_ids()
            .ok_or(ReplayError::TargetMismatch { step: position })?;

        for node in &mut self.nodes {
            let lit = ids.contains(&node.id);
            node.is_active = lit;
            node.is_visited = lit;
        }
        if step.kind() == StepKind::Visit {
            self.trail.extend(ids.iter().cloned());
        }
        Ok(())
    }

    fn finish(&mut self) {
        for node in &mut self.nodes {
            node.is_active = false;
            node.is_visited = false;
        }
    }
}
