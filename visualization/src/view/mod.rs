//! Display-state views driven by step logs
//!
//! A view owns the display state for one animated structure and knows how
//! to apply a single [`Step`] to it. Applying a step first clears every
//! transient flag, then flags the step's targets and performs the step's
//! mutation, so the display only ever reflects the most recent step plus
//! whatever the view treats as persistent (sorted positions, distances).
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod array_view;
pub mod graph_view;
pub mod tree_view;

pub use self::array_view::{ArrayView, DisplayElement};
pub use self::graph_view::{DisplayNode, NodeView};
pub use self::tree_view::{traversal_steps, TraversalView};

use stepwise_core::algorithm::step::Step;
use stepwise_core::execution::replay::ReplayError;

use crate::config::ViewFamily;

/// Display state that can be advanced one step at a time.
///
/// Views are cloned to take playback checkpoints, so cloning must capture
/// the full display state.
pub trait StepView: Clone {
    /// Timing family used to pace this view
    fn family(&self) -> ViewFamily;

    /// Applies step number `position` of the log
    fn apply(&mut self, step: &Step, position: usize) -> Result<(), ReplayError>;

    /// Called once when playback reaches the end of the log
    fn finish(&mut self);
}
