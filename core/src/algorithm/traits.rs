//! Core algorithm trait definitions for the Stepwise step-generation engine
//!
//! This module establishes the trait system shared by every instrumented
//! algorithm. An algorithm never animates anything itself: it runs to
//! completion over a private working copy of its input and returns the full,
//! ordered log of steps it performed.
//!
//! # Key Design Principles
//! - Inputs are borrowed read-only snapshots; callers never observe mutation
//! - Output is a finite, deterministic step sequence
//! - Selection happens through plain enums parseable from their UI names
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::borrow::Borrow;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::algorithm::step::Step;
use crate::data_structures::array::ArrayElement;
use crate::data_structures::graph::{GraphEdge, GraphNode};

/// Universal algorithm identifier for type-safe dispatch
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque node identifier shared by graph, tree and list structures.
///
/// Identifiers are caller-assigned (or produced by an
/// [`IdAllocator`](crate::data_structures::ids::IdAllocator)) and never
/// change after the node is created.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Error types for step generation
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid start node: {0} is not part of the graph")]
    InvalidStart(NodeId),

    #[error("Duplicate node identifier: {0}")]
    DuplicateNode(NodeId),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Step log serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmComplexity {
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub space: &'static str,
}

/// Comparison sort instrumented to emit visualization steps.
///
/// # Invariants
/// - `generate_steps` never mutates its input
/// - replaying the returned steps onto a copy of the input yields the
///   ascending-by-value permutation
/// - when `is_stable` is true, equal values keep their input order
pub trait SortingAlgorithm: Debug + Send + Sync {
    /// Returns the algorithm's unique identifier
    fn id(&self) -> AlgorithmId;

    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Whether the replayed result preserves the relative order of equal values
    fn is_stable(&self) -> bool;

    /// Returns the algorithm's asymptotic complexity in Big-O notation
    fn complexity(&self) -> AlgorithmComplexity;

    /// Runs the sort to completion and returns every step it performed
    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step>;
}

/// Graph traversal instrumented to emit visualization steps.
pub trait TraversalAlgorithm: Debug + Send + Sync {
    fn id(&self) -> AlgorithmId;

    fn name(&self) -> &'static str;

    fn complexity(&self) -> AlgorithmComplexity;

    /// Runs the traversal from `start` over directed `edges`.
    ///
    /// Fails with [`AlgorithmError::InvalidStart`] when `start` does not name
    /// one of `nodes`.
    fn traverse(
        &self,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
        start: &NodeId,
    ) -> Result<Vec<Step>, AlgorithmError>;
}
