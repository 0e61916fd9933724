//! Snapshot data structures consumed by the step-generation engine
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod array;
pub mod graph;
pub mod ids;
pub mod linked_list;
pub mod tree;

pub use self::array::{ArrayElement, ElementId};
pub use self::graph::{Adjacent, Graph, GraphEdge, GraphNode, Position};
pub use self::ids::IdAllocator;
pub use self::linked_list::{LinkedList, ListError, ListNode};
pub use self::tree::{BinarySearchTree, TreeError, TreeNode};
