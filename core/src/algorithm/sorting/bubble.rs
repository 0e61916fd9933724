//! Bubble sort instrumented for visualization
//!
//! Adjacent pairs are compared left to right; each pass bubbles the largest
//! remaining value into the rightmost unsorted slot. The comparison count is
//! always n(n-1)/2 and exactly n `sort` steps are emitted (one per pass plus
//! a final one), independent of input order.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortingAlgorithm for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("bubble")
    }

    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(n^2)",
            average_case: "O(n^2)",
            worst_case: "O(n^2)",
            space: "O(1)",
        }
    }

    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step> {
        bubble_sort(elements)
    }
}

pub fn bubble_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("bubble sort");
    let mut working = elements.to_vec();
    let n = working.len();
    if n == 0 {
        return tracer.finish();
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            tracer.compare(j, j + 1, format!("Comparing elements at positions {} and {}", j, j + 1));

            if working[j].value > working[j + 1].value {
                tracer.swap(j, j + 1, format!("Swapping elements at positions {} and {}", j, j + 1));
                working.swap(j, j + 1);
            }
        }
        let settled = n - i - 1;
        tracer.indices(
            StepKind::Sort,
            vec![settled],
            format!("Element at position {} is in correct position", settled),
        );
    }

    tracer.indices(StepKind::Sort, vec![0], "Array is completely sorted!");
    tracer.finish()
}
