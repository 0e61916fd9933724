//! Graph snapshot types and the resolved adjacency index
//!
//! Callers describe a graph as a flat list of nodes plus a flat list of
//! directed, weighted edges. Before a traversal runs, the snapshot is
//! resolved once into an index-based adjacency structure so that every
//! neighbor lookup is O(1) instead of a scan over the edge list.
//!
//! # Edge Semantics
//! Edges are directed for traversal purposes even when a renderer draws them
//! undirected. Parallel edges are kept and independently valid. Self-loops
//! are kept; the traversals' visited checks make them harmless. An edge that
//! names a node absent from the snapshot is skipped during resolution.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};

/// Layout coordinates owned by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    #[serde(flatten)]
    pub position: Position,
}

impl GraphNode {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Position::default(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }
}

/// A directed, weighted edge as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

impl GraphEdge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        debug_assert!(!weight.is_nan(), "Edge weight cannot be NaN");
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Edge with the unit weight used by the unweighted traversals
    pub fn unweighted(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self::new(from, to, 1.0)
    }
}

/// Resolved outgoing edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjacent {
    pub target: usize,
    pub weight: f64,
}

/// Index-based view of a graph snapshot.
///
/// Node positions in the index follow the caller's node order; outgoing
/// edges of each node follow the caller's edge order.
#[derive(Debug)]
pub struct Graph<'a> {
    nodes: &'a [GraphNode],
    lookup: HashMap<&'a str, usize>,
    adjacency: Vec<Vec<Adjacent>>,
    skipped_edges: usize,
}

impl<'a> Graph<'a> {
    /// Resolves a snapshot into an adjacency index.
    ///
    /// Fails with [`AlgorithmError::DuplicateNode`] if two nodes share an id.
    pub fn build(nodes: &'a [GraphNode], edges: &[GraphEdge]) -> Result<Self, AlgorithmError> {
        let mut lookup = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if lookup.insert(node.id.as_str(), index).is_some() {
                return Err(AlgorithmError::DuplicateNode(node.id.clone()));
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut skipped_edges = 0;
        for edge in edges {
            match (lookup.get(edge.from.as_str()), lookup.get(edge.to.as_str())) {
                (Some(&from), Some(&to)) => adjacency[from].push(Adjacent {
                    target: to,
                    weight: edge.weight,
                }),
                _ => {
                    warn!("Skipping edge {} -> {}: unknown endpoint", edge.from, edge.to);
                    skipped_edges += 1;
                }
            }
        }

        Ok(Self {
            nodes,
            lookup,
            adjacency,
            skipped_edges,
        })
    }

    #[inline]
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.lookup.get(id.as_str()).copied()
    }

    /// Resolves the traversal start, failing fast on an unknown id
    pub fn start_index(&self, id: &NodeId) -> Result<usize, AlgorithmError> {
        self.index_of(id)
            .ok_or_else(|| AlgorithmError::InvalidStart(id.clone()))
    }

    #[inline]
    pub fn node_id(&self, index: usize) -> &'a NodeId {
        &self.nodes[index].id
    }

    #[inline]
    pub fn neighbors(&self, index: usize) -> &[Adjacent] {
        &self.adjacency[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges dropped because an endpoint was unknown
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<GraphNode> {
        ids.iter().map(|id| GraphNode::new(*id, *id)).collect()
    }

    #[test]
    fn test_adjacency_follows_edge_order() {
        let nodes = nodes(&["A", "B", "C"]);
        let edges = vec![
            GraphEdge::new("A", "C", 2.0),
            GraphEdge::new("A", "B", 1.0),
            GraphEdge::new("B", "C", 4.0),
        ];
        let graph = Graph::build(&nodes, &edges).unwrap();

        let a = graph.index_of(&NodeId::from("A")).unwrap();
        let targets: Vec<&str> = graph
            .neighbors(a)
            .iter()
            .map(|adj| graph.node_id(adj.target).as_str())
            .collect();
        assert_eq!(targets, vec!["C", "B"]);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_malformed_edges_are_skipped() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![
            GraphEdge::unweighted("A", "B"),
            GraphEdge::unweighted("A", "ghost"),
            GraphEdge::unweighted("ghost", "B"),
        ];
        let graph = Graph::build(&nodes, &edges).unwrap();

        assert_eq!(graph.skipped_edges(), 2);
        assert_eq!(graph.neighbors(0).len(), 1);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let nodes = nodes(&["A", "B"]);
        let edges = vec![
            GraphEdge::new("A", "B", 1.0),
            GraphEdge::new("A", "B", 3.0),
            GraphEdge::new("A", "A", 1.0),
        ];
        let graph = Graph::build(&nodes, &edges).unwrap();
        assert_eq!(graph.neighbors(0).len(), 3);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let nodes = nodes(&["A", "A"]);
        let err = Graph::build(&nodes, &[]).unwrap_err();
        assert!(matches!(err, AlgorithmError::DuplicateNode(id) if id.as_str() == "A"));
    }

    #[test]
    fn test_unknown_start_is_invalid() {
        let nodes = nodes(&["A"]);
        let graph = Graph::build(&nodes, &[]).unwrap();
        assert!(matches!(
            graph.start_index(&NodeId::from("Q")),
            Err(AlgorithmError::InvalidStart(_))
        ));
    }

    #[test]
    fn test_node_json_flattens_position() {
        let node = GraphNode::new("n1", "A").at(10.0, 20.0);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["x"], 10.0);
        assert_eq!(json["y"], 20.0);
        assert_eq!(json["label"], "A");
    }
}
