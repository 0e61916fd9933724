//! Depth-first BST traversals
//!
//! Traversals work on a read-only `&[TreeNode]` snapshot whose first element
//! is the root, and return the visit order as plain node ids rather than
//! steps. Child ids that do not resolve to a node in the snapshot are
//! skipped. A cyclic snapshot stops after as many visits as there are
//! nodes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::tree::TreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    #[default]
    InOrder,
    PreOrder,
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
    ];

    pub fn traverse(self, nodes: &[TreeNode]) -> Vec<NodeId> {
        let order = match self {
            Self::InOrder => in_order(nodes),
            Self::PreOrder => pre_order(nodes),
            Self::PostOrder => post_order(nodes),
        };
        debug!("{} traversal visited {} of {} nodes", self, order.len(), nodes.len());
        order
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InOrder => "inorder",
            Self::PreOrder => "preorder",
            Self::PostOrder => "postorder",
        }
    }
}

impl Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InOrder => "In-order",
            Self::PreOrder => "Pre-order",
            Self::PostOrder => "Post-order",
        })
    }
}

impl FromStr for TraversalOrder {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '-' && *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Id lookup over a snapshot; the first node with a given id wins
struct Lookup<'a> {
    by_id: HashMap<&'a NodeId, &'a TreeNode>,
}

impl<'a> Lookup<'a> {
    fn new(nodes: &'a [TreeNode]) -> Self {
        let mut by_id = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.entry(&node.id).or_insert(node);
        }
        Self { by_id }
    }

    fn child(&self, id: &Option<NodeId>) -> Option<&'a TreeNode> {
        id.as_ref().and_then(|id| self.by_id.get(id).copied())
    }
}

/// Left subtree, node, right subtree. Yields ascending values for a valid BST.
pub fn in_order(nodes: &[TreeNode]) -> Vec<NodeId> {
    let lookup = Lookup::new(nodes);
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = nodes.first();

    loop {
        while let Some(node) = current {
            // A left spine deeper than the snapshot is a cycle.
            if stack.len() == nodes.len() {
                break;
            }
            stack.push(node);
            current = lookup.child(&node.left);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        if order.len() == nodes.len() {
            break;
        }
        order.push(node.id.clone());
        current = lookup.child(&node.right);
    }
    order
}

/// Node, left subtree, right subtree
pub fn pre_order(nodes: &[TreeNode]) -> Vec<NodeId> {
    let lookup = Lookup::new(nodes);
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack: Vec<&TreeNode> = nodes.first().into_iter().collect();

    while let Some(node) = stack.pop() {
        if order.len() == nodes.len() {
            break;
        }
        order.push(node.id.clone());
        stack.extend(lookup.child(&node.right));
        stack.extend(lookup.child(&node.left));
    }
    order
}

/// Left subtree, right subtree, node
pub fn post_order(nodes: &[TreeNode]) -> Vec<NodeId> {
    let lookup = Lookup::new(nodes);
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack: Vec<&TreeNode> = nodes.first().into_iter().collect();

    // Node, right, left, reversed.
    while let Some(node) = stack.pop() {
        if order.len() == nodes.len() {
            break;
        }
        order.push(node.id.clone());
        stack.extend(lookup.child(&node.left));
        stack.extend(lookup.child(&node.right));
    }
    order.reverse();
    order
}

/// Maps a visit order back to node values, skipping unknown ids
pub fn values_of(nodes: &[TreeNode], order: &[NodeId]) -> Vec<f64> {
    let lookup = Lookup::new(nodes);
    order
        .iter()
        .filter_map(|id| lookup.by_id.get(id).map(|node| node.value))
        .collect()
}
