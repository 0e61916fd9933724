//! Heap sort instrumented for visualization
//!
//! Builds a max-heap in place, then repeatedly swaps the root with the end
//! of the shrinking heap. Sift-down runs as a loop that emits exactly the
//! steps a recursive heapify would, in the same order.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl SortingAlgorithm for HeapSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("heap")
    }

    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(n log n)",
            average_case: "O(n log n)",
            worst_case: "O(n log n)",
            space: "O(1)",
        }
    }

    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step> {
        heap_sort(elements)
    }
}

pub fn heap_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("heap sort");
    let mut working = elements.to_vec();
    let n = working.len();
    if n == 0 {
        return tracer.finish();
    }

    tracer.indices(StepKind::Highlight, (0..n).collect(), "Building max heap from array");
    for parent in (0..n / 2).rev() {
        sift_down(&mut working, n, parent, &mut tracer);
    }

    for end in (1..n).rev() {
        tracer.swap(
            0,
            end,
            format!("Moving largest element {} to position {}", working[0].value, end),
        );
        working.swap(0, end);

        tracer.indices(
            StepKind::Sort,
            vec![end],
            format!("Element at position {} is now in final position", end),
        );

        sift_down(&mut working, end, 0, &mut tracer);
    }

    tracer.indices(StepKind::Sort, vec![0], "Heap sort complete!");
    tracer.finish()
}

/// Restores the max-heap property below `root` within `heap[..len]`
fn sift_down(heap: &mut [ArrayElement], len: usize, root: usize, tracer: &mut StepTracer) {
    let mut current = root;
    loop {
        let mut largest = current;
        let left = 2 * current + 1;
        let right = 2 * current + 2;

        tracer.indices(
            StepKind::Highlight,
            vec![current],
            format!("Heapifying at index {}", current),
        );

        if left < len {
            tracer.compare(
                left,
                largest,
                format!(
                    "Comparing left child {} with parent {}",
                    heap[left].value, heap[largest].value
                ),
            );
            if heap[left].value > heap[largest].value {
                largest = left;
            }
        }

        if right < len {
            tracer.compare(
                right,
                largest,
                format!(
                    "Comparing right child {} with current largest {}",
                    heap[right].value, heap[largest].value
                ),
            );
            if heap[right].value > heap[largest].value {
                largest = right;
            }
        }

        if largest == current {
            return;
        }

        tracer.swap(
            current,
            largest,
            format!(
                "Swapping {} with {} to maintain heap property",
                heap[current].value, heap[largest].value
            ),
        );
        heap.swap(current, largest);
        current = largest;
    }
}
