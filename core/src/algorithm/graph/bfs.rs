//! Breadth-first search instrumented for visualization
//!
//! A node is visited exactly once, when it is dequeued. Neighbors reached by
//! outgoing edges are enqueued (and highlighted) the first time they are
//! discovered, so the queue never holds duplicates.

use std::collections::VecDeque;

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{
    AlgorithmComplexity, AlgorithmError, AlgorithmId, NodeId, TraversalAlgorithm,
};
use crate::data_structures::graph::{Graph, GraphEdge, GraphNode};
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl TraversalAlgorithm for BreadthFirstSearch {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("bfs")
    }

    fn name(&self) -> &'static str {
        "Breadth-First Search"
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(V + E)",
            average_case: "O(V + E)",
            worst_case: "O(V + E)",
            space: "O(V)",
        }
    }

    fn traverse(
        &self,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
        start: &NodeId,
    ) -> Result<Vec<Step>, AlgorithmError> {
        bfs(nodes, edges, start)
    }
}

pub fn bfs(nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> Result<Vec<Step>, AlgorithmError> {
    let graph = Graph::build(nodes, edges)?;
    let origin = graph.start_index(start)?;
    let mut tracer = StepTracer::new("bfs");

    let mut visited = vec![false; graph.len()];
    let mut discovered = vec![false; graph.len()];
    let mut queue = VecDeque::from([origin]);
    discovered[origin] = true;

    tracer.node(StepKind::Highlight, start, format!("Starting BFS from node {}", start));

    while let Some(current) = queue.pop_front() {
        if visited[current] {
            continue;
        }
        visited[current] = true;

        let current_id = graph.node_id(current);
        tracer.node(StepKind::Visit, current_id, format!("Visiting node {}", current_id));

        for adjacent in graph.neighbors(current) {
            let next = adjacent.target;
            if visited[next] || discovered[next] {
                continue;
            }
            discovered[next] = true;
            queue.push_back(next);

            let next_id = graph.node_id(next);
            tracer.node(StepKind::Highlight, next_id, format!("Adding node {} to queue", next_id));
        }
    }

    Ok(tracer.finish())
}
