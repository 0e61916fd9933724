//! Top-down merge sort instrumented for visualization
//!
//! Every element written back during a merge is reported as a `place` step
//! carrying the element, including the drain loops for leftovers. Ties take
//! the left run first, which keeps the sort stable. Recursion depth is
//! logarithmic in the input length.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortingAlgorithm for MergeSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("merge")
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(n log n)",
            average_case: "O(n log n)",
            worst_case: "O(n log n)",
            space: "O(n)",
        }
    }

    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step> {
        merge_sort(elements)
    }
}

pub fn merge_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("merge sort");
    let mut working = elements.to_vec();
    let n = working.len();
    if n == 0 {
        return tracer.finish();
    }

    split(&mut working, 0, n - 1, &mut tracer);

    tracer.indices(StepKind::Sort, (0..n).collect(), "Merge sort complete!");
    tracer.finish()
}

fn split(array: &mut [ArrayElement], left: usize, right: usize, tracer: &mut StepTracer) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;

    tracer.highlight_range(left, right, format!("Dividing array from {} to {}", left, right));

    split(array, left, mid, tracer);
    split(array, mid + 1, right, tracer);
    merge(array, left, mid, right, tracer);
}

fn merge(array: &mut [ArrayElement], left: usize, mid: usize, right: usize, tracer: &mut StepTracer) {
    let left_run = array[left..=mid].to_vec();
    let right_run = array[mid + 1..=right].to_vec();

    tracer.highlight_range(
        left,
        right,
        format!(
            "Merging subarrays from {} to {} and {} to {}",
            left,
            mid,
            mid + 1,
            right
        ),
    );

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        tracer.compare(
            left + i,
            mid + 1 + j,
            format!("Comparing {} and {}", left_run[i].value, right_run[j].value),
        );

        let next = if left_run[i].value <= right_run[j].value {
            i += 1;
            &left_run[i - 1]
        } else {
            j += 1;
            &right_run[j - 1]
        };
        tracer.place(k, next, format!("Placing {} at position {}", next.value, k));
        array[k] = next.clone();
        k += 1;
    }

    for next in left_run[i..].iter().chain(&right_run[j..]) {
        tracer.place(k, next, format!("Placing remaining {} at position {}", next.value, k));
        array[k] = next.clone();
        k += 1;
    }
}
