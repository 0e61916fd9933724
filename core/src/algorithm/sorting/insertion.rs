//! Insertion sort instrumented for visualization
//!
//! Shifting a displaced element one slot to the right is reported as a
//! `place` step carrying that element; the key's final write is another
//! `place`. Only strictly greater elements are shifted, so the sort is
//! stable.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortingAlgorithm for InsertionSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("insertion")
    }

    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(n)",
            average_case: "O(n^2)",
            worst_case: "O(n^2)",
            space: "O(1)",
        }
    }

    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step> {
        insertion_sort(elements)
    }
}

pub fn insertion_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("insertion sort");
    let mut working = elements.to_vec();
    let n = working.len();
    if n == 0 {
        return tracer.finish();
    }

    tracer.indices(StepKind::Sort, vec![0], "First element is considered sorted");

    for i in 1..n {
        let key = working[i].clone();
        tracer.indices(
            StepKind::Highlight,
            vec![i],
            format!("Inserting {} into sorted portion", key.value),
        );

        // `slot` is where the key would land if the scan stopped now.
        let mut slot = i;
        while slot > 0 && working[slot - 1].value > key.value {
            let j = slot - 1;
            tracer.compare(j, slot, format!("Comparing {} with {}", working[j].value, key.value));

            let displaced = working[j].clone();
            tracer.place(
                slot,
                &displaced,
                format!("Moving {} one position right", displaced.value),
            );
            working[slot] = displaced;
            slot -= 1;
        }

        tracer.place(slot, &key, format!("Placing {} at position {}", key.value, slot));
        working[slot] = key;

        tracer.indices(
            StepKind::Sort,
            (0..=i).collect(),
            format!("First {} elements are now sorted", i + 1),
        );
    }

    tracer.finish()
}
