//! Correctness oracles
//!
//! Independent reference computations used to verify what the instrumented
//! algorithms produce. None of these functions share code with the
//! algorithms they check: reachability is a fixpoint over the raw edge list
//! and shortest distances come from repeated full relaxation rather than
//! greedy selection.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{HashMap, HashSet};

use crate::algorithm::traits::NodeId;
use crate::data_structures::array::{ArrayElement, ElementId};
use crate::data_structures::graph::{GraphEdge, GraphNode};
use crate::data_structures::tree::TreeNode;

/// Values are in non-decreasing order
pub fn is_sorted_by_value(elements: &[ArrayElement]) -> bool {
    elements.windows(2).all(|pair| pair[0].value <= pair[1].value)
}

/// Both slices hold the same multiset of `(id, value)` pairs
pub fn same_elements(input: &[ArrayElement], output: &[ArrayElement]) -> bool {
    if input.len() != output.len() {
        return false;
    }
    let mut counts: HashMap<(&ElementId, u64), i64> = HashMap::new();
    for element in input {
        *counts.entry((&element.id, element.value.to_bits())).or_default() += 1;
    }
    for element in output {
        *counts.entry((&element.id, element.value.to_bits())).or_default() -= 1;
    }
    counts.values().all(|&count| count == 0)
}

/// `output` is a permutation of `input` in which elements of equal value
/// keep their relative input order
pub fn is_stable_permutation(input: &[ArrayElement], output: &[ArrayElement]) -> bool {
    fn runs(elements: &[ArrayElement]) -> HashMap<u64, Vec<&ElementId>> {
        let mut runs: HashMap<u64, Vec<&ElementId>> = HashMap::new();
        for element in elements {
            runs.entry(element.value.to_bits()).or_default().push(&element.id);
        }
        runs
    }

    same_elements(input, output) && runs(input) == runs(output)
}

/// Node ids reachable from `start` along directed edges, `start` included.
///
/// Edges with an endpoint outside `nodes` are ignored. An unknown start
/// yields the empty set.
pub fn reachable_from(nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> HashSet<NodeId> {
    let known: HashSet<&NodeId> = nodes.iter().map(|node| &node.id).collect();
    let mut reached = HashSet::new();
    if !known.contains(start) {
        return reached;
    }
    reached.insert(start.clone());

    let mut changed = true;
    while changed {
        changed = false;
        for edge in edges {
            if known.contains(&edge.to) && reached.contains(&edge.from) && !reached.contains(&edge.to) {
                reached.insert(edge.to.clone());
                changed = true;
            }
        }
    }
    reached
}

/// Shortest distances from `start` for every reachable node.
///
/// Relaxes every edge `|V|` times; only valid for non-negative weights.
pub fn reference_distances(nodes: &[GraphNode], edges: &[GraphEdge], start: &NodeId) -> HashMap<NodeId, f64> {
    let known: HashSet<&NodeId> = nodes.iter().map(|node| &node.id).collect();
    let mut distances = HashMap::new();
    if !known.contains(start) {
        return distances;
    }
    distances.insert(start.clone(), 0.0);

    for _ in 0..nodes.len() {
        let mut changed = false;
        for edge in edges {
            if !known.contains(&edge.to) {
                continue;
            }
            let Some(&from) = distances.get(&edge.from) else {
                continue;
            };
            let candidate = from + edge.weight;
            if distances.get(&edge.to).map_or(true, |&current| candidate < current) {
                distances.insert(edge.to.clone(), candidate);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    distances
}

/// Every node reachable from the root (first element) respects the BST
/// ordering: left descendants strictly smaller, right descendants greater or
/// equal.
pub fn satisfies_bst_invariant(nodes: &[TreeNode]) -> bool {
    let by_id: HashMap<&NodeId, &TreeNode> = nodes.iter().map(|node| (&node.id, node)).collect();
    let Some(root) = nodes.first() else {
        return true;
    };

    // (node, inclusive lower bound, exclusive upper bound)
    let mut stack: Vec<(&TreeNode, Option<f64>, Option<f64>)> = vec![(root, None, None)];
    let mut seen = 0;
    while let Some((node, low, high)) = stack.pop() {
        seen += 1;
        if seen > nodes.len() {
            return false;
        }
        if low.is_some_and(|low| node.value < low) || high.is_some_and(|high| node.value >= high) {
            return false;
        }
        if let Some(left) = node.left.as_ref().and_then(|id| by_id.get(id).copied()) {
            stack.push((left, low, Some(node.value)));
        }
        if let Some(right) = node.right.as_ref().and_then(|id| by_id.get(id).copied()) {
            stack.push((right, Some(node.value), high));
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sortedness() {
        assert!(is_sorted_by_value(&ArrayElement::from_values(&[1.0, 1.0, 2.0])));
        assert!(!is_sorted_by_value(&ArrayElement::from_values(&[2.0, 1.0])));
        assert!(is_sorted_by_value(&[]));
    }

    #[test]
    fn test_same_elements_detects_duplication() {
        let input = ArrayElement::from_values(&[1.0, 2.0]);
        let mut output = input.clone();
        output[1] = output[0].clone();
        assert!(!same_elements(&input, &output));
        assert!(same_elements(&input, &[input[1].clone(), input[0].clone()]));
    }

    #[test]
    fn test_stability_check() {
        let input = vec![
            ArrayElement::new("a", 2.0),
            ArrayElement::new("b", 1.0),
            ArrayElement::new("c", 2.0),
        ];
        let stable = vec![input[1].clone(), input[0].clone(), input[2].clone()];
        let unstable = vec![input[1].clone(), input[2].clone(), input[0].clone()];

        assert!(is_stable_permutation(&input, &stable));
        assert!(!is_stable_permutation(&input, &unstable));
    }

    #[test]
    fn test_reachability_follows_direction() {
        let nodes: Vec<GraphNode> = ["A", "B", "C"].iter().map(|id| GraphNode::new(*id, *id)).collect();
        let edges = vec![GraphEdge::unweighted("A", "B"), GraphEdge::unweighted("C", "A")];

        let reached = reachable_from(&nodes, &edges, &NodeId::from("A"));
        assert_eq!(reached.len(), 2);
        assert!(!reached.contains("C"));
        assert!(reachable_from(&nodes, &edges, &NodeId::from("Z")).is_empty());
    }

    #[test]
    fn test_reference_distances() {
        let nodes: Vec<GraphNode> = ["A", "B", "C"].iter().map(|id| GraphNode::new(*id, *id)).collect();
        let edges = vec![
            GraphEdge::new("A", "B", 5.0),
            GraphEdge::new("A", "C", 1.0),
            GraphEdge::new("C", "B", 1.0),
        ];

        let distances = reference_distances(&nodes, &edges, &NodeId::from("A"));
        assert_eq!(distances.get("B"), Some(&2.0));
        assert_eq!(distances.get("A"), Some(&0.0));
    }

    #[test]
    fn test_bst_invariant_rejects_deep_violation() {
        // 5 -> left 3 -> right 6: 6 sits in the left subtree of 5.
        let nodes = vec![
            TreeNode {
                id: NodeId::from("a"),
                value: 5.0,
                left: Some(NodeId::from("b")),
                right: None,
            },
            TreeNode {
                id: NodeId::from("b"),
                value: 3.0,
                left: None,
                right: Some(NodeId::from("c")),
            },
            TreeNode::leaf("c", 6.0),
        ];
        assert!(!satisfies_bst_invariant(&nodes));
        assert!(satisfies_bst_invariant(&nodes[2..]));
    }
}
