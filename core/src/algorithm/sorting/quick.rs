//! Quick sort (Lomuto partition) instrumented for visualization
//!
//! The last element of each range is the pivot. Ranges are processed from an
//! explicit stack in the same order a recursive implementation would visit
//! them: the whole left partition first, then the right one.

use crate::algorithm::step::{Step, StepKind};
use crate::algorithm::traits::{AlgorithmComplexity, AlgorithmId, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;
use crate::execution::tracer::StepTracer;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortingAlgorithm for QuickSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::new("quick")
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn complexity(&self) -> AlgorithmComplexity {
        AlgorithmComplexity {
            best_case: "O(n log n)",
            average_case: "O(n log n)",
            worst_case: "O(n^2)",
            space: "O(log n)",
        }
    }

    fn generate_steps(&self, elements: &[ArrayElement]) -> Vec<Step> {
        quick_sort(elements)
    }
}

pub fn quick_sort(elements: &[ArrayElement]) -> Vec<Step> {
    let mut tracer = StepTracer::new("quick sort");
    let mut working = elements.to_vec();
    if working.len() < 2 {
        return tracer.finish();
    }

    let mut ranges = vec![(0, working.len() - 1)];
    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(&mut working, low, high, &mut tracer);

        // Pushed right first so the left partition is fully handled before it.
        ranges.push((pivot + 1, high));
        if pivot > low {
            ranges.push((low, pivot - 1));
        }
    }

    tracer.finish()
}

/// Partitions `low..=high` around `array[high]` and returns the pivot's final slot
fn partition(array: &mut [ArrayElement], low: usize, high: usize, tracer: &mut StepTracer) -> usize {
    let pivot = array[high].value;
    tracer.indices(StepKind::Highlight, vec![high], format!("Choosing pivot: {}", pivot));

    // Next slot that receives an element smaller than the pivot.
    let mut boundary = low;
    for j in low..high {
        tracer.compare(j, high, format!("Comparing {} with pivot {}", array[j].value, pivot));

        if array[j].value < pivot {
            if boundary != j {
                tracer.swap(
                    boundary,
                    j,
                    format!("Swapping {} and {}", array[boundary].value, array[j].value),
                );
                array.swap(boundary, j);
            }
            boundary += 1;
        }
    }

    tracer.swap(
        boundary,
        high,
        format!("Placing pivot {} at position {}", pivot, boundary),
    );
    array.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::step::count_kind;
    use crate::execution::replay::replay_array;

    fn sorted_values(input: &[f64]) -> Vec<f64> {
        let elements = ArrayElement::from_values(input);
        let steps = quick_sort(&elements);
        replay_array(&elements, &steps)
            .unwrap()
            .iter()
            .map(|e| e.value)
            .collect()
    }

    #[test]
    fn test_sorts_mixed_input() {
        assert_eq!(
            sorted_values(&[9.0, 3.0, 7.0, 1.0, 8.0, 2.0, 5.0]),
            vec![1.0, 2.0, 3.0, 5.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(sorted_values(&[2.0, 2.0, 1.0, 2.0]), vec![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_first_step_chooses_last_element_as_pivot() {
        let elements = ArrayElement::from_values(&[4.0, 1.0, 3.0]);
        let steps = quick_sort(&elements);

        assert_eq!(steps[0].kind(), StepKind::Highlight);
        assert_eq!(steps[0].indices(), Some(&[2][..]));
        assert_eq!(steps[0].description(), "Choosing pivot: 3");
    }

    #[test]
    fn test_self_swaps_are_skipped() {
        // Every candidate is smaller than the pivot and already in place.
        let elements = ArrayElement::from_values(&[1.0, 2.0, 3.0]);
        let steps = quick_sort(&elements);

        let swaps: Vec<&Step> = steps.iter().filter(|s| s.kind() == StepKind::Swap).collect();
        assert!(swaps.iter().all(|s| s.description().starts_with("Placing pivot")));
    }

    #[test]
    fn test_swap_description_uses_pre_swap_values() {
        let elements = ArrayElement::from_values(&[5.0, 1.0, 3.0]);
        let steps = quick_sort(&elements);

        let swap = steps.iter().find(|s| s.kind() == StepKind::Swap).unwrap();
        assert_eq!(swap.indices(), Some(&[0, 1][..]));
        assert_eq!(swap.description(), "Swapping 5 and 1");
    }

    #[test]
    fn test_one_compare_per_candidate_in_first_partition() {
        let elements = ArrayElement::from_values(&[3.0, 1.0, 2.0, 5.0, 4.0]);
        let steps = quick_sort(&elements);

        let first_partition: Vec<&Step> = steps
            .iter()
            .skip(1)
            .take_while(|s| s.kind() != StepKind::Highlight)
            .collect();
        let compares = first_partition
            .iter()
            .filter(|s| s.kind() == StepKind::Compare)
            .count();
        assert_eq!(compares, 4);
        assert!(count_kind(&steps, StepKind::Compare) >= 4);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(quick_sort(&[]).is_empty());
        assert!(quick_sort(&ArrayElement::from_values(&[1.0])).is_empty());
    }
}
