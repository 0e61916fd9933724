//! Selection sort instrumented for visualization

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortingAlgorithm for SelectionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("selection")
    }

    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    fn is_stable(&self) -> bool {
        false
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
        selection_sort(elements)
    }
}

pub fn selection_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("selection sort");
    let mut working = elements.to_vec();
    let n = working.len();
    if n == 0 {
        return tracer.finish();
    }

    for i in 0..n - 1 {
        let mut min_index = i;
        tracer.indices(
            StepKind::Highlight,
            vec![i],
            format!("Starting new pass, current position: {}", i),
        );

        for j in i + 1..n {
            tracer.compare(
                min_index,
                j,
                format!("Comparing {} with {}", working[min_index].value, working[j].value),
            );

            if working[j].value < working[min_index].value {
                min_index = j;
                tracer.indices(
                    StepKind::Highlight,
                    vec![min_index],
                    format!(
                        "New minimum found: {} at position {}",
                        working[min_index].value, min_index
                    ),
                );
            }
        }

        if min_index != i {
            tracer.swap(
                i,
                min_index,
                format!(
                    "Swapping {} with minimum {}",
                    working[i].value, working[min_index].value
                ),
            );
            working.swap(i, min_index);
        }

        tracer.indices(
            StepKind::Sort,
            vec![i],
            format!("Position {} is now sorted with value {}", i, working[i].value),
        );
    }

    tracer.indices(StepKind::Sort, vec![n - 1], "Selection sort complete!");
    tracer.finish()
}
