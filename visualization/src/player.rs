//! Step-log playback
//!
//! A [`Player`] owns a step log and a view, and tracks how many steps of
//! the log have been applied. Forward navigation applies steps one at a
//! time. Backward navigation restores the nearest checkpoint at or before
//! the target position and replays forward from there, so stepping back
//! never has to replay the whole log.
//!
//! The player has no clock of its own. A host calls [`Player::advance`]
//! with the time elapsed since its last call and the player applies as
//! many whole steps as that time covers at the current speed. Steps are
//! always applied whole: pausing only ever takes effect between steps.
//!
//! # Completion
//! When the last step has been applied the view's `finish` hook runs and
//! the player becomes `Finished`. During timed playback the hook is delayed
//! by the view family's linger time so the final step stays visible.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;
use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stepwise_core::algorithm::step::Step;
use stepwise_core::execution::replay::ReplayError;

use crate::config::{PlaybackConfig, Speed};
use crate::view::StepView;

#[derive(Debug, Error, PartialEq)]
pub enum PlaybackError {
    #[error("Cannot seek to step {target}: the log has {len} steps")]
    SeekOutOfRange { target: usize, len: usize },

    #[error("Failed to apply step: {0}")]
    Replay(#[from] ReplayError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    Paused,
    Playing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Player<V: StepView> {
    steps: Vec<Step>,
    initial: V,
    view: V,
    /// Number of steps applied to `view`
    position: usize,
    mode: PlaybackMode,
    speed: Speed,
    config: PlaybackConfig,
    /// View state after `k` steps, for every `k` that is a multiple of the
    /// checkpoint interval and has been reached
    checkpoints: BTreeMap<usize, V>,
    /// Time accumulated towards the next step
    pending: Duration,
    completed: bool,
}

impl<V: StepView> Player<V> {
    pub fn new(view: V, steps: Vec<Step>) -> Self {
        Self::with_config(view, steps, PlaybackConfig::default())
    }

    pub fn with_config(view: V, steps: Vec<Step>, config: PlaybackConfig) -> Self {
        let mut checkpoints = BTreeMap::new();
        checkpoints.insert(0, view.clone());
        debug!("Player loaded {} steps ({:?} view)", steps.len(), view.family());

        let mut player = Self {
            steps,
            initial: view.clone(),
            view,
            position: 0,
            mode: PlaybackMode::Paused,
            speed: config.default_speed,
            config,
            checkpoints,
            pending: Duration::ZERO,
            completed: false,
        };
        player.complete_if_at_end();
        player
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// The step most recently applied
    pub fn current_step(&self) -> Option<&Step> {
        self.position.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.steps.len()
    }

    pub fn play(&mut self) {
        if self.mode == PlaybackMode::Paused {
            self.mode = PlaybackMode::Playing;
            self.pending = Duration::ZERO;
            debug!("Playback started at step {}", self.position);
        }
    }

    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Paused;
            debug!("Playback paused at step {}", self.position);
        }
    }

    /// Back to the initial display state, paused
    pub fn reset(&mut self) {
        self.view = self.initial.clone();
        self.position = 0;
        self.mode = PlaybackMode::Paused;
        self.pending = Duration::ZERO;
        self.completed = false;
        self.complete_if_at_end();
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    /// Applies the next step. Returns `false` when there is none.
    pub fn step_forward(&mut self) -> Result<bool, PlaybackError> {
        if self.is_at_end() {
            return Ok(false);
        }
        self.apply_next()?;
        self.complete_if_at_end();
        Ok(true)
    }

    /// Undoes the most recent step. Returns `false` at the start.
    pub fn step_back(&mut self) -> Result<bool, PlaybackError> {
        match self.position.checked_sub(1) {
            Some(target) => self.seek(target).map(|_| true),
            None => Ok(false),
        }
    }

    /// Moves to the state after exactly `target` steps
    pub fn seek(&mut self, target: usize) -> Result<(), PlaybackError> {
        if target > self.steps.len() {
            return Err(PlaybackError::SeekOutOfRange {
                target,
                len: self.steps.len(),
            });
        }
        if target == self.position {
            return Ok(());
        }

        if target < self.position {
            let (&at, checkpoint) = self
                .checkpoints
                .range(..=target)
                .next_back()
                .unwrap_or((&0, &self.initial));
            trace!("Seeking back to {} from checkpoint {}", target, at);
            self.view = checkpoint.clone();
            self.position = at;
            self.completed = false;
            if self.mode == PlaybackMode::Finished {
                self.mode = PlaybackMode::Paused;
            }
        }

        while self.position < target {
            self.apply_next()?;
        }
        self.pending = Duration::ZERO;
        self.complete_if_at_end();
        Ok(())
    }

    /// Feeds `elapsed` host time into timed playback and returns how many
    /// steps were applied
    pub fn advance(&mut self, elapsed: Duration) -> Result<usize, PlaybackError> {
        if self.mode != PlaybackMode::Playing {
            return Ok(0);
        }
        self.pending += elapsed;

        let family = self.view.family();
        let interval = self.config.interval(family, self.speed);
        let mut applied = 0;
        while !self.is_at_end() && self.pending >= interval {
            self.pending -= interval;
            self.apply_next()?;
            applied += 1;
        }

        if self.is_at_end() && self.pending >= self.config.linger(family) {
            self.complete_if_at_end();
        }
        Ok(applied)
    }

    fn apply_next(&mut self) -> Result<(), PlaybackError> {
        let step = &self.steps[self.position];
        self.view.apply(step, self.position)?;
        self.position += 1;

        let interval = self.config.checkpoint_interval.max(1);
        if self.position % interval == 0 && !self.checkpoints.contains_key(&self.position) {
            trace!("Checkpoint at step {}", self.position);
            self.checkpoints.insert(self.position, self.view.clone());
        }
        Ok(())
    }

    fn complete_if_at_end(&mut self) {
        if self.is_at_end() && !self.completed {
            self.view.finish();
            self.completed = true;
            self.mode = PlaybackMode::Finished;
            self.pending = Duration::ZERO;
            debug!("Playback finished after {} steps", self.position);
        }
    }
}
