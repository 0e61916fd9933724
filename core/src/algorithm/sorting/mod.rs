//! Instrumented sorting algorithms
//!
//! Each algorithm exists both as a free function (`bubble_sort`, ...) and as
//! a unit struct implementing [`SortingAlgorithm`]. [`SortAlgorithm`] is the
//! selector a caller uses to pick one by name.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use self::bubble::{bubble_sort, BubbleSort};
pub use self::heap::{heap_sort, HeapSort};
pub use self::insertion::{insertion_sort, InsertionSort};
pub use self::merge::{merge_sort, MergeSort};
pub use self::quick::{quick_sort, QuickSort};
pub use self::selection::{selection_sort, SelectionSort};

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::step::Step;
use crate::algorithm::traits::{AlgorithmError, SortingAlgorithm};
use crate::data_structures::array::ArrayElement;

/// Sorting algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Quick,
    Merge,
    Selection,
    Insertion,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Heap,
    ];

    pub fn implementation(self) -> &'static dyn SortingAlgorithm {
        match self {
            Self::Bubble => &BubbleSort,
            Self::Quick => &QuickSort,
            Self::Merge => &MergeSort,
            Self::Selection => &SelectionSort,
            Self::Insertion => &InsertionSort,
            Self::Heap => &HeapSort,
        }
    }

    /// Runs the selected algorithm over a snapshot of `elements`
    pub fn run(self, elements: &[ArrayElement]) -> Vec<Step> {
        self.implementation().generate_steps(elements)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Heap => "heap",
        }
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.implementation().name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm(s.to_owned()))
    }
}
