//! Depth-first search instrumented for visualization
//!
//! Pre-order walk driven by an explicit stack of (node, next-edge) frames,
//! which reproduces the recursive visit order without bounding depth by the
//! call stack. A neighbor is checked against the visited set only when its
//! turn comes, after earlier siblings' subtrees have been explored.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{
    AlgorithmComplexity, AlgorithmError, AlgorithmId, NodeId, TraversalAlgorithm,
};
use crate::data_structures::graph::{Graph, GraphEdge, GraphNode};
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

impl TraversalAlgorithm for DepthFirstSearch {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("dfs")
    }

    fn name(&self) -> &'static str {
        "Depth-First Search"
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
        dfs(nodes, edges, start)
    }
}

/// Stack frame: a node being explored and the position of its next edge
struct Frame {
    node: usize,
    next_edge: usize,
}

pub fn dfs(nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> Result<Vec<Step>, AlgorithmError> {
    let graph = Graph::build(nodes, edges)?;
    let origin = graph.start_index(start)?;
    let mut tracer = StepTracer::new("dfs");
    let mut visited = vec![false; graph.len()];

    tracer.node(StepKind::Highlight, start, format!("Starting DFS from node {}", start));

    let enter = |node: usize, visited: &mut Vec<bool>, tracer: &mut StepTracer| {
        visited[node] = true;
        let id = graph.node_id(node);
        tracer.node(StepKind::Visit, id, format!("Visiting node {}", id));
        Frame { node, next_edge: 0 }
    };

    let mut stack = vec![enter(origin, &mut visited, &mut tracer)];

    while let Some(frame) = stack.last_mut() {
        let neighbors = graph.neighbors(frame.node);
        let Some(adjacent) = neighbors.get(frame.next_edge) else {
            stack.pop();
            continue;
        };
        frame.next_edge += 1;

        let next = adjacent.target;
        if visited[next] {
            continue;
        }

        let next_id = graph.node_id(next);
        tracer.node(StepKind::Highlight, next_id, format!("Exploring node {}", next_id));
        stack.push(enter(next, &mut visited, &mut tracer));
    }

    Ok(tracer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::replay::visit_order;

    fn graph(labels: &[&str], edges: &[(&str, &str)]) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        (
            labels.iter().map(|l| GraphNode::new(*l, *l)).collect(),
            edges.iter().map(|(f, t)| GraphEdge::unweighted(*f, *t)).collect(),
        )
    }

    fn order(steps: &[Step]) -> Vec<String> {
        visit_order(steps).into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_pre_order_depth_first() {
        let (nodes, edges) = graph(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "E")],
        );
        let steps = dfs(&nodes, &edges, &NodeId::from("A")).unwrap();
        assert_eq!(order(&steps), vec!["A", "B", "D", "C", "E"]);
    }

    #[test]
    fn test_highlight_precedes_each_descent() {
        let (nodes, edges) = graph(&["A", "B"], &[("A", "B")]);
        let steps = dfs(&nodes, &edges, &NodeId::from("A")).unwrap();
        let kinds: Vec<StepKind> = steps.iter().map(|s| s.kind()).collect();

        assert_eq!(
            kinds,
            vec![StepKind::Highlight, StepKind::Visit, StepKind::Highlight, StepKind::Visit]
        );
        assert_eq!(steps[2].description(), "Exploring node B");
    }

    #[test]
    fn test_visited_neighbors_skipped_silently() {
        // B is reached through A's first edge; A's second edge to B emits nothing.
        let (nodes, edges) = graph(&["A", "B"], &[("A", "B"), ("A", "B"), ("B", "A"), ("A", "A")]);
        let steps = dfs(&nodes, &edges, &NodeId::from("A")).unwrap();
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_sibling_visited_by_earlier_subtree() {
        let (nodes, edges) = graph(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")]);
        let steps = dfs(&nodes, &edges, &NodeId::from("A")).unwrap();

        assert_eq!(order(&steps), vec!["A", "B", "C"]);
        let highlights_of_c = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Highlight && s.node_ids().unwrap()[0].as_str() == "C")
            .count();
        assert_eq!(highlights_of_c, 1);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let labels: Vec<String> = (0..50_000).map(|i| format!("n{i}")).collect();
        let nodes: Vec<GraphNode> = labels.iter().map(|l| GraphNode::new(l.as_str(), l.as_str())).collect();
        let edges: Vec<GraphEdge> = labels
            .windows(2)
            .map(|pair| GraphEdge::unweighted(pair[0].as_str(), pair[1].as_str()))
            .collect();

        let steps = dfs(&nodes, &edges, &NodeId::from("n0")).unwrap();
        assert_eq!(visit_order(&steps).len(), 50_000);
    }

    #[test]
    fn test_invalid_start() {
        let (nodes, edges) = graph(&["A"], &[]);
        assert!(dfs(&nodes, &edges, &NodeId::from("Z")).is_err());
    }
}
