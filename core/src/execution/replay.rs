//! Deterministic replay of step logs
//!
//! Replay re-applies the mutations described by a step log to a fresh copy
//! of the original input. Only two step kinds mutate an array: `swap`
//! exchanges two slots and `place` overwrites one slot with the element it
//! carries. Every other kind is purely presentational and leaves the data
//! untouched. Node-oriented logs are never "replayed" onto a structure; the
//! helpers here extract what they establish (visit order, final distances).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use thiserror::Error;

use crate::algorithm::step::{Step, StepKind, StepTarget};
use crate::algorithm::traits::NodeId;
use crate::data_structures::array::ArrayElement;

/// Error types for replay operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("Step {step} addresses position {index} but the array holds {len} elements")]
    IndexOutOfBounds { step: usize, index: usize, len: usize },

    #[error("Step {step} targets nodes and cannot be applied to an array")]
    TargetMismatch { step: usize },

    #[error("Place step {step} carries no element")]
    MissingPlacement { step: usize },
}

/// Applies the mutation of one step to `array`.
///
/// `position` is the step's index in its log and only feeds error reports.
pub fn apply_array_step(
    array: &mut [ArrayElement],
    step: &Step,
    position: usize,
) -> Result<(), ReplayError> {
    let indices = match step.target() {
        StepTarget::Indices(indices) => indices,
        StepTarget::Nodes(_) => return Err(ReplayError::TargetMismatch { step: position }),
    };

    if let Some(&index) = indices.iter().find(|&&index| index >= array.len()) {
        return Err(ReplayError::IndexOutOfBounds {
            step: position,
            index,
            len: array.len(),
        });
    }

    match step.kind() {
        StepKind::Swap => {
            if let [a, b] = indices.as_slice() {
                array.swap(*a, *b);
            }
        }
        StepKind::Place => {
            let element = step
                .placed()
                .ok_or(ReplayError::MissingPlacement { step: position })?;
            if let Some(&index) = indices.first() {
                array[index] = element.clone();
            }
        }
        _ => {}
    }

    Ok(())
}

/// Replays a whole array log onto a copy of `initial`
pub fn replay_array(initial: &[ArrayElement], steps: &[Step]) -> Result<Vec<ArrayElement>, ReplayError> {
    let mut working = initial.to_vec();
    for (position, step) in steps.iter().enumerate() {
        apply_array_step(&mut working, step, position)?;
    }
    Ok(working)
}

/// Node ids of every `visit` step, in log order
pub fn visit_order(steps: &[Step]) -> Vec<NodeId> {
    steps
        .iter()
        .filter(|step| step.kind() == StepKind::Visit)
        .filter_map(|step| step.node_ids())
        .flat_map(|ids| ids.iter().cloned())
        .collect()
}

/// Last distance recorded per node by `distance` steps
pub fn final_distances(steps: &[Step]) -> HashMap<NodeId, f64> {
    let mut distances = HashMap::new();
    for step in steps {
        if let (Some(distance), Some(ids)) = (step.distance(), step.node_ids()) {
            for id in ids {
                distances.insert(id.clone(), distance);
            }
        }
    }
    distances
}
