//! Instrumented graph traversals
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use self::bfs::{bfs, BreadthFirstSearch};
pub use self::dfs::{dfs, DepthFirstSearch};
pub use self::dijkstra::{dijkstra, shortest_paths, Dijkstra, DijkstraOutcome};

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::step::Step;
use crate::algorithm::traits::{AlgorithmError, NodeId, TraversalAlgorithm};
use crate::data_structures::graph::{GraphEdge, GraphNode};

/// Graph algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphAlgorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 3] = [GraphAlgorithm::Bfs, GraphAlgorithm::Dfs, GraphAlgorithm::Dijkstra];

    pub fn implementation(self) -> &'static dyn TraversalAlgorithm {
        match self {
            Self::Bfs => &BreadthFirstSearch,
            Self::Dfs => &DepthFirstSearch,
            Self::Dijkstra => &Dijkstra,
        }
    }

    pub fn run(self, nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> Result<Vec<Step>, AlgorithmError> {
        self.implementation().traverse(nodes, edges, start)
    }

    /// Whether edge weights influence the result
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.implementation().name())
    }
}

impl FromStr for GraphAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::algorithm::step::StepKind;
    use crate::execution::replay::visit_order;
    use crate::validation::correctness::reachable_from;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample() -> (Vec<GraphNode>, Vec<GraphEdge>) {
        let nodes = ["A", "B", "C", "D", "E", "F", "G"]
            .iter()
            .enumerate()
            .map(|(i, id)| GraphNode::new(*id, *id).at(i as f64 * 40.0, 100.0))
            .collect();
        let edges = vec![
            GraphEdge::new("A", "B", 4.0),
            GraphEdge::new("A", "C", 1.0),
            GraphEdge::new("C", "B", 2.0),
            GraphEdge::new("B", "D", 5.0),
            GraphEdge::new("D", "B", 1.0),
            GraphEdge::new("D", "D", 3.0),
            GraphEdge::new("E", "A", 1.0),
            GraphEdge::new("F", "G", 1.0),
            GraphEdge::new("C", "ghost", 1.0),
        ];
        (nodes, edges)
    }

    #[test]
    fn test_traversals_visit_reachable_set_exactly_once() {
        init_logging();
        let (nodes, edges) = sample();
        for start in ["A", "E", "F", "G"] {
            let start = NodeId::from(start);
            let expected = reachable_from(&nodes, &edges, &start);

            for algorithm in GraphAlgorithm::ALL {
                let steps = algorithm.run(&nodes, &edges, &start).unwrap();
                let order = visit_order(&steps);
                let unique: HashSet<NodeId> = order.iter().cloned().collect();

                assert_eq!(order.len(), unique.len(), "{} visited a node twice", algorithm);
                assert_eq!(unique, expected, "{} from {}", algorithm, start);
            }
        }
    }

    #[test]
    fn test_graph_steps_are_node_oriented() {
        let (nodes, edges) = sample();
        for algorithm in GraphAlgorithm::ALL {
            let steps = algorithm.run(&nodes, &edges, &NodeId::from("A")).unwrap();
            assert!(steps.iter().all(|s| s.node_ids().is_some() && s.indices().is_none()));
            assert!(steps.iter().all(|s| s.kind() != StepKind::Swap));
        }
    }

    #[test]
    fn test_selector() {
        assert_eq!("DFS".parse::<GraphAlgorithm>().unwrap(), GraphAlgorithm::Dfs);
        assert!("astar".parse::<GraphAlgorithm>().is_err());
        assert!(GraphAlgorithm::Dijkstra.is_weighted());
        assert_eq!(GraphAlgorithm::Bfs.to_string(), "Breadth-First Search");
    }

    #[test]
    fn test_implementation_metadata() {
        for algorithm in GraphAlgorithm::ALL {
            assert_eq!(algorithm.implementation().id().as_str(), algorithm.as_str());
        }
        assert_eq!(GraphAlgorithm::Bfs.implementation().complexity().worst_case, "O(V + E)");
        assert_eq!(GraphAlgorithm::Dijkstra.implementation().complexity().worst_case, "O(V^2 + E)");
    }
}
