//! Array view for sorting playback
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;
use serde::{Deserialize, Serialize};

use stepwise_core::algorithm::step::{Step, StepKind};
use stepwise_core::data_structures::array::ArrayElement;
use stepwise_core::execution::replay::{apply_array_step, ReplayError};

use crate::config::ViewFamily;
use crate::view::StepView;

/// Per-position display flags. Everything except `is_sorted` is transient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementFlags {
    pub is_comparing: bool,
    pub is_swapping: bool,
    pub is_highlighted: bool,
    pub is_sorted: bool,
}

impl ElementFlags {
    fn clear_transient(&mut self) {
        self.is_comparing = false;
        self.is_swapping = false;
        self.is_highlighted = false;
    }
}

/// An element together with its flags, as rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayElement {
    #[serde(flatten)]
    pub element: ArrayElement,
    #[serde(flatten)]
    pub flags: ElementFlags,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayView {
    elements: Vec<ArrayElement>,
    flags: Vec<ElementFlags>,
}

impl ArrayView {
    pub fn new(elements: &[ArrayElement]) -> Self {
        Self {
            elements: elements.to_vec(),
            flags: vec![ElementFlags::default(); elements.len()],
        }
    }

    pub fn elements(&self) -> &[ArrayElement] {
        &self.elements
    }

    pub fn flags(&self) -> &[ElementFlags] {
        &self.flags
    }

    pub fn values(&self) -> Vec<f64> {
        self.elements.iter().map(|element| element.value).collect()
    }

    /// Elements paired with their flags, in position order
    pub fn display(&self) -> Vec<DisplayElement> {
        self.elements
            .iter()
            .zip(&self.flags)
            .map(|(element, flags)| DisplayElement {
                element: element.clone(),
                flags: *flags,
            })
            .collect()
    }
}

impl StepView for ArrayView {
    fn family(&self) -> ViewFamily {
        ViewFamily::Array
    }

    fn apply(&mut self, step: &Step, position: usize) -> Result<(), ReplayError> {
        // Validates the target before any flag changes.
        apply_array_step(&mut self.elements, step, position)?;

        self.flags.iter_mut().for_each(ElementFlags::clear_transient);
        let indices = step.indices().unwrap_or_default();
        for &index in indices {
            let flags = &mut self.flags[index];
            match step.kind() {
                StepKind::Compare => flags.is_comparing = true,
                StepKind::Swap | StepKind::Place => flags.is_swapping = true,
                StepKind::Highlight => flags.is_highlighted = true,
                StepKind::Sort => flags.is_sorted = true,
                StepKind::Visit | StepKind::Distance => {}
            }
        }
        trace!("Array view applied step {} ({})", position, step.kind());
        Ok(())
    }

    fn finish(&mut self) {
        for flags in &mut self.flags {
            flags.clear_transient();
            flags.is_sorted = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_core::algorithm::traits::NodeId;

    #[test]
    fn test_flags_are_transient_except_sorted() {
        let mut view = ArrayView::new(&ArrayElement::from_values(&[3.0, 1.0, 2.0]));

        view.apply(&Step::at_indices(StepKind::Compare, vec![0, 1], "c"), 0).unwrap();
        assert!(view.flags()[0].is_comparing && view.flags()[1].is_comparing);

        view.apply(&Step::at_indices(StepKind::Sort, vec![2], "s"), 1).unwrap();
        assert!(!view.flags()[0].is_comparing);
        assert!(view.flags()[2].is_sorted);

        view.apply(&Step::at_indices(StepKind::Highlight, vec![0], "h"), 2).unwrap();
        assert!(view.flags()[2].is_sorted);
        assert!(view.flags()[0].is_highlighted);
    }

    #[test]
    fn test_swap_moves_elements() {
        let mut view = ArrayView::new(&ArrayElement::from_values(&[3.0, 1.0]));
        view.apply(&Step::at_indices(StepKind::Swap, vec![0, 1], "swap"), 0).unwrap();

        assert_eq!(view.values(), vec![1.0, 3.0]);
        assert!(view.flags().iter().all(|f| f.is_swapping));
    }

    #[test]
    fn test_place_writes_single_slot() {
        let input = ArrayElement::from_values(&[3.0, 1.0]);
        let mut view = ArrayView::new(&input);
        view.apply(&Step::placement(0, input[1].clone(), "place"), 0).unwrap();

        assert_eq!(view.values(), vec![1.0, 1.0]);
        assert!(view.flags()[0].is_swapping);
        assert!(!view.flags()[1].is_swapping);
    }

    #[test]
    fn test_rejects_bad_targets() {
        let mut view = ArrayView::new(&ArrayElement::from_values(&[1.0]));
        assert_eq!(
            view.apply(&Step::at_indices(StepKind::Compare, vec![0, 4], "c"), 7),
            Err(ReplayError::IndexOutOfBounds { step: 7, index: 4, len: 1 })
        );
        assert_eq!(
            view.apply(&Step::at_nodes(StepKind::Visit, vec![NodeId::from("A")], "v"), 8),
            Err(ReplayError::TargetMismatch { step: 8 })
        );
        assert_eq!(view.flags()[0], ElementFlags::default());
    }

    #[test]
    fn test_finish_marks_everything_sorted() {
        let mut view = ArrayView::new(&ArrayElement::from_values(&[2.0, 1.0]));
        view.apply(&Step::at_indices(StepKind::Compare, vec![0, 1], "c"), 0).unwrap();
        view.finish();

        assert!(view.flags().iter().all(|f| f.is_sorted && !f.is_comparing));
    }

    #[test]
    fn test_display_json_shape() {
        let view = ArrayView::new(&[ArrayElement::new("elem-0", 4.0)]);
        let json = serde_json::to_value(view.display()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "elem-0",
                "value": 4.0,
                "isComparing": false,
                "isSwapping": false,
                "isHighlighted": false,
                "isSorted": false
            }])
        );
    }
}
