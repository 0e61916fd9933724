//! Stepwise visualization: playback of generated step logs
//!
//! This crate turns the step logs produced by `stepwise-core` into display
//! state a front end can render:
//!
//! - [`view`]: per-structure display state (arrays, graphs and lists, tree
//!   traversals) and the [`StepView`] trait that applies one step to it
//! - [`player`]: play, pause, step, seek and timed advance over a log
//! - [`config`]: speed presets and checkpointing, loadable from JSON
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod config;
pub mod player;
pub mod view;

pub use crate::config::{ConfigError, PlaybackConfig, Speed, ViewFamily};
pub use crate::player::{PlaybackError, PlaybackMode, Player};
pub use crate::view::{ArrayView, NodeView, StepView, TraversalView};
