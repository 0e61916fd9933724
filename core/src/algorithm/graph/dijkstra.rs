//! Dijkstra's shortest paths instrumented for visualization
//!
//! Array-based selection without a priority queue: each round scans the
//! unvisited nodes for the smallest finite tentative distance. Among equal
//! distances the node that comes first in the caller's node order wins.
//! Relaxations that strictly improve a distance emit a `distance` step that
//! carries the new value.
//!
//! # Preconditions
//! Edge weights must be non-negative. Negative weights are not rejected; the
//! resulting distances are simply not shortest paths.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{
    AlgorithmComplexity, AlgorithmError, AlgorithmId, NodeId, TraversalAlgorithm,
};
use crate::data_structures::graph::{Graph, GraphEdge, GraphNode};
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl TraversalAlgorithm for Dijkstra {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("dijkstra")
    }

    fn name(&self) -> &'static str {
        "Dijkstra's Algorithm"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(V^2 + E)",
            average_case: "O(V^2 + E)",
            worst_case: "O(V^2 + E)",
            space: "O(V)",
        }
    }

    fn traverse(
        &self,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
        start: &NodeId,
    ) -> Result<Vec<Step>, AlgorithmError> {
        dijkstra(nodes, edges, start)
    }
}

/// Full result of a Dijkstra run: the step log plus the shortest-path tree
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraOutcome {
    pub steps: Vec<Step>,
    /// Final distance of every node reached from the start
    pub distances: HashMap<NodeId, f64>,
    /// Predecessor on the shortest path, for every reached node but the start
    pub previous: HashMap<NodeId, NodeId>,
}

impl DijkstraOutcome {
    /// Reconstructs the shortest path from the start to `target`
    pub fn path_to(&self, target: &NodeId) -> Option<Vec<NodeId>> {
        if !self.distances.contains_key(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

pub fn dijkstra(nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> Result<Vec<Step>, AlgorithmError> {
    shortest_paths(nodes, edges, start).map(|outcome| outcome.steps)
}

pub fn shortest_paths(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    start: &NodeId,
) -> Result<DijkstraOutcome, AlgorithmError> {
    let graph = Graph::build(nodes, edges)?;
    let origin = graph.start_index(start)?;
    let mut tracer = StepTracer::new("dijkstra");

    let mut distance = vec![f64::INFINITY; graph.len()];
    let mut previous: Vec<Option<usize>> = vec![None; graph.len()];
    let mut visited = vec![false; graph.len()];
    distance[origin] = 0.0;

    tracer.relax(start, 0.0, format!("Starting Dijkstra from node {} with distance 0", start));

    while let Some(current) = closest_unvisited(&distance, &visited) {
        visited[current] = true;
        let current_id = graph.node_id(current);
        tracer.node(
            StepKind::Visit,
            current_id,
            format!("Visiting node {} with distance {}", current_id, distance[current]),
        );

        for adjacent in graph.neighbors(current) {
            let next = adjacent.target;
            if visited[next] {
                continue;
            }
            let candidate = distance[current] + adjacent.weight;
            if candidate < distance[next] {
                distance[next] = candidate;
                previous[next] = Some(current);

                let next_id = graph.node_id(next);
                tracer.relax(
                    next_id,
                    candidate,
                    format!("Updated distance to node {}: {}", next_id, candidate),
                );
            }
        }
    }

    let distances = distance
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_finite())
        .map(|(i, &d)| (graph.node_id(i).clone(), d))
        .collect();
    let previous = previous
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.map(|p| (graph.node_id(i).clone(), graph.node_id(p).clone())))
        .collect();

    Ok(DijkstraOutcome {
        steps: tracer.finish(),
        distances,
        previous,
    })
}

/// First unvisited node holding the minimum finite distance
fn closest_unvisited(distance: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &d) in distance.iter().enumerate() {
        if visited[i] || !d.is_finite() {
            continue;
        }
        if best.map_or(true, |b| d < distance[b]) {
            best = Some(i);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::replay::{final_distances, visit_order};
    use crate::validation::correctness::reference_distances;

    fn weighted(labels: &[&str], edges: &[(&str, &str, f64)]) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        (
            labels.iter().map(|l| GraphNode::new(*l, *l)).collect(),
            edges.iter().map(|(f, t, w)| GraphEdge::new(*f, *t, *w)).collect(),
        )
    }

    fn classic() -> (Vec<GraphNode>, Vec<GraphEdge>) {
        weighted(
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 7.0),
                ("A", "C", 9.0),
                ("A", "F", 14.0),
                ("B", "C", 10.0),
                ("B", "D", 15.0),
                ("C", "D", 11.0),
                ("C", "F", 2.0),
                ("D", "E", 6.0),
                ("F", "E", 9.0),
            ],
        )
    }

    #[test]
    fn test_distances_match_reference() {
        let (nodes, edges) = classic();
        let start = NodeId::from("A");
        let steps = dijkstra(&nodes, &edges, &start).unwrap();

        let recorded = final_distances(&steps);
        let expected = reference_distances(&nodes, &edges, &start);
        assert_eq!(recorded, expected);
        assert_eq!(recorded.get("E"), Some(&20.0));
        assert_eq!(recorded.get("F"), Some(&11.0));
    }

    #[test]
    fn test_each_reachable_node_visited_once() {
        let (nodes, mut edges) = classic();
        edges.push(GraphEdge::new("E", "A", 1.0));
        let steps = dijkstra(&nodes, &edges, &NodeId::from("A")).unwrap();

        let mut visited: Vec<String> = visit_order(&steps).iter().map(|id| id.to_string()).collect();
        visited.sort();
        assert_eq!(visited, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_unreachable_nodes_are_not_visited() {
        let (nodes, edges) = weighted(&["A", "B", "X"], &[("A", "B", 1.0), ("X", "A", 1.0)]);
        let outcome = shortest_paths(&nodes, &edges, &NodeId::from("A")).unwrap();

        assert_eq!(visit_order(&outcome.steps).len(), 2);
        assert!(!outcome.distances.contains_key("X"));
        assert_eq!(outcome.path_to(&NodeId::from("X")), None);
    }

    #[test]
    fn test_first_step_records_start_distance() {
        let (nodes, edges) = classic();
        let steps = dijkstra(&nodes, &edges, &NodeId::from("A")).unwrap();

        assert_eq!(steps[0].kind(), StepKind::Distance);
        assert_eq!(steps[0].distance(), Some(0.0));
        assert_eq!(steps[1].kind(), StepKind::Visit);
    }

    #[test]
    fn test_only_strict_improvements_emit_steps() {
        let (nodes, edges) = weighted(
            &["A", "B", "C"],
            &[("A", "B", 2.0), ("A", "C", 1.0), ("C", "B", 1.0)],
        );
        let steps = dijkstra(&nodes, &edges, &NodeId::from("A")).unwrap();

        let updates_to_b = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Distance && s.node_ids().unwrap()[0].as_str() == "B")
            .count();
        assert_eq!(updates_to_b, 1);
    }

    #[test]
    fn test_path_reconstruction() {
        let (nodes, edges) = classic();
        let outcome = shortest_paths(&nodes, &edges, &NodeId::from("A")).unwrap();
        let path: Vec<String> = outcome
            .path_to(&NodeId::from("E"))
            .unwrap()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(path, vec!["A", "C", "F", "E"]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let (nodes, edges) = weighted(&["A", "B", "C"], &[("A", "B", 0.0), ("B", "C", 0.0)]);
        let steps = dijkstra(&nodes, &edges, &NodeId::from("A")).unwrap();
        let distances = final_distances(&steps);
        assert_eq!(distances.get("C"), Some(&0.0));
    }

    #[test]
    fn test_invalid_start() {
        let (nodes, edges) = classic();
        assert!(matches!(
            dijkstra(&nodes, &edges, &NodeId::from("Q")),
            Err(AlgorithmError::InvalidStart(id)) if id.as_str() == "Q"
        ));
    }
}
