//! Step tracer shared by every instrumented algorithm
//!
//! The tracer is the single write path into a step log. Algorithms hand it
//! fully formatted descriptions (operand values already substituted) and it
//! appends immutable [`Step`] records in order. Once `finish` is called the
//! log is handed back and can no longer be extended.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, trace};

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::NodeId;
use crate::data_structures::array::ArrayElement;

/// Append-only step recorder for one algorithm run
#[derive(Debug)]
pub struct StepTracer {
    algorithm: &'static str,
    steps: Vec<Step>,
}

impl StepTracer {
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            steps: Vec::new(),
        }
    }

    pub fn with_capacity(algorithm: &'static str, capacity: usize) -> Self {
        Self {
            algorithm,
            steps: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, step: Step) {
        trace!("{} #{}: {}", self.algorithm, self.steps.len(), step);
        self.steps.push(step);
    }

    /// Records an array step over the given positions
    pub fn indices(&mut self, kind: StepKind, indices: Vec<usize>, description: impl Into<String>) {
        self.push(Step::at_indices(kind, indices, description));
    }

    pub fn compare(&mut self, a: usize, b: usize, description: impl Into<String>) {
        self.indices(StepKind::Compare, vec![a, b], description);
    }

    pub fn swap(&mut self, a: usize, b: usize, description: impl Into<String>) {
        self.indices(StepKind::Swap, vec![a, b], description);
    }

    pub fn place(&mut self, index: usize, element: &ArrayElement, description: impl Into<String>) {
        self.push(Step::placement(index, element.clone(), description));
    }

    /// Highlights the inclusive range `low..=high`
    pub fn highlight_range(&mut self, low: usize, high: usize, description: impl Into<String>) {
        self.indices(StepKind::Highlight, (low..=high).collect(), description);
    }

    /// Records a node step over a single node
    pub fn node(&mut self, kind: StepKind, id: &NodeId, description: impl Into<String>) {
        self.push(Step::at_nodes(kind, vec![id.clone()], description));
    }

    pub fn relax(&mut self, id: &NodeId, distance: f64, description: impl Into<String>) {
        self.push(Step::relaxation(id.clone(), distance, description));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Closes the log and returns it
    pub fn finish(self) -> Vec<Step> {
        debug!("{} produced {} steps", self.algorithm, self.steps.len());
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracer_preserves_order() {
        let mut tracer = StepTracer::new("test");
        tracer.compare(0, 1, "first");
        tracer.swap(0, 1, "second");
        tracer.highlight_range(2, 4, "third");

        let steps = tracer.finish();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].kind(), StepKind::Compare);
        assert_eq!(steps[1].description(), "second");
        assert_eq!(steps[2].indices(), Some(&[2, 3, 4][..]));
    }

    #[test]
    fn test_place_carries_element() {
        let mut tracer = StepTracer::new("test");
        let element = ArrayElement::new("elem-3", 9.0);
        tracer.place(5, &element, "Placing 9 at position 5");

        let steps = tracer.finish();
        assert_eq!(steps[0].kind(), StepKind::Place);
        assert_eq!(steps[0].placed(), Some(&element));
    }
}
