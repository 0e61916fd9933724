//! Step recording and deterministic replay
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod replay;
pub mod tracer;

pub use self::replay::{apply_array_step, final_distances, replay_array, visit_order, ReplayError};
pub use self::tracer::StepTracer;
