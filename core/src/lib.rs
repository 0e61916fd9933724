//! Stepwise core: step-generation engine for algorithm visualization
//!
//! Every algorithm in this crate takes a read-only snapshot of caller data,
//! works on a private clone, and returns an ordered log of [`Step`]s that a
//! front end can replay one at a time. Step logs are plain values: they can
//! be serialized, replayed deterministically (see [`execution::replay`]) and
//! checked against the reference oracles in [`validation::correctness`].
//!
//! The crate is organised as follows:
//! - [`algorithm`]: the step model, sorting and graph algorithms, BST traversals
//! - [`data_structures`]: array elements, graphs, binary search trees, linked lists
//! - [`execution`]: the step tracer and the replay engine
//! - [`validation`]: independent oracles used to verify step logs
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod execution;
pub mod validation;

pub use crate::algorithm::graph::{DijkstraOutcome, GraphAlgorithm};
pub use crate::algorithm::sorting::SortAlgorithm;
pub use crate::algorithm::step::{Step, StepDetail, StepKind, StepTarget};
pub use crate::algorithm::traits::{
    AlgorithmComplexity, AlgorithmError, AlgorithmId, NodeId, SortingAlgorithm, TraversalAlgorithm,
};
pub use crate::algorithm::tree::TraversalOrder;
pub use crate::data_structures::{
    ArrayElement, BinarySearchTree, ElementId, GraphEdge, GraphNode, LinkedList, ListNode, TreeNode,
};
pub use crate::execution::replay::ReplayError;
