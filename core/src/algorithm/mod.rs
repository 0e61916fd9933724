//! Stepwise algorithm framework
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod sorting;
pub mod step;
pub mod traits;
pub mod tree;

pub use self::step::*;
pub use self::traits::*;
