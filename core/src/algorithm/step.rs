//! The step model: one immutable record per algorithmic micro-operation
//!
//! A step names what happened (`kind`), where it happened (`target`), and
//! carries a human-readable description whose operand values were captured
//! before the mutation the step represents. Steps are produced once by an
//! algorithm, appended to an append-only log and never changed afterwards,
//! so a log may be replayed any number of times in either direction.
//!
//! # Wire Shape
//! Serialized steps use the flat JSON layout consumed by the web front-end:
//!
//! ```json
//! {"type": "compare", "indices": [0, 1], "description": "Comparing elements at positions 0 and 1"}
//! {"type": "visit", "nodeIds": ["A"], "description": "Visiting node A"}
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::array::ArrayElement;

/// Closed set of step tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Two positions are being compared
    Compare,
    /// Two positions exchange their elements
    Swap,
    /// A single slot is overwritten with a known element (merge / insertion)
    Place,
    /// A node is visited
    Visit,
    /// Positions or nodes are drawn attention to without any mutation
    Highlight,
    /// Positions have reached their final place
    Sort,
    /// A node's tentative distance was lowered
    Distance,
}

impl StepKind {
    pub const ALL: [StepKind; 7] = [
        StepKind::Compare,
        StepKind::Swap,
        StepKind::Place,
        StepKind::Visit,
        StepKind::Highlight,
        StepKind::Sort,
        StepKind::Distance,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Place => "place",
            Self::Visit => "visit",
            Self::Highlight => "highlight",
            Self::Sort => "sort",
            Self::Distance => "distance",
        }
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a step points at. Array algorithms address positions, graph, tree
/// and list algorithms address node identifiers; never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepTarget {
    #[serde(rename = "indices")]
    Indices(Vec<usize>),
    #[serde(rename = "nodeIds")]
    Nodes(Vec<NodeId>),
}

/// Typed payload needed to replay a step faithfully
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepDetail {
    /// Element written by a `place` step
    Placed(ArrayElement),
    /// New tentative distance recorded by a `distance` step
    Distance(f64),
}

/// One discrete, replayable unit of algorithmic progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "type")]
    kind: StepKind,
    #[serde(flatten)]
    target: StepTarget,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<StepDetail>,
}

impl Step {
    /// Array-oriented step over `indices`
    pub fn at_indices(kind: StepKind, indices: Vec<usize>, description: impl Into<String>) -> Self {
        Self {
            kind,
            target: StepTarget::Indices(indices),
            description: description.into(),
            detail: None,
        }
    }

    /// Node-oriented step over `ids`
    pub fn at_nodes(kind: StepKind, ids: Vec<NodeId>, description: impl Into<String>) -> Self {
        Self {
            kind,
            target: StepTarget::Nodes(ids),
            description: description.into(),
            detail: None,
        }
    }

    /// `place` step writing `element` into `index`
    pub fn placement(index: usize, element: ArrayElement, description: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Place,
            target: StepTarget::Indices(vec![index]),
            description: description.into(),
            detail: Some(StepDetail::Placed(element)),
        }
    }

    /// `distance` step recording `distance` for `node`
    pub fn relaxation(node: NodeId, distance: f64, description: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Distance,
            target: StepTarget::Nodes(vec![node]),
            description: description.into(),
            detail: Some(StepDetail::Distance(distance)),
        }
    }

    #[inline]
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    #[inline]
    pub fn target(&self) -> &StepTarget {
        &self.target
    }

    pub fn indices(&self) -> Option<&[usize]> {
        match &self.target {
            StepTarget::Indices(indices) => Some(indices),
            StepTarget::Nodes(_) => None,
        }
    }

    pub fn node_ids(&self) -> Option<&[NodeId]> {
        match &self.target {
            StepTarget::Nodes(ids) => Some(ids),
            StepTarget::Indices(_) => None,
        }
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn detail(&self) -> Option<&StepDetail> {
        self.detail.as_ref()
    }

    pub fn placed(&self) -> Option<&ArrayElement> {
        match &self.detail {
            Some(StepDetail::Placed(element)) => Some(element),
            _ => None,
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self.detail {
            Some(StepDetail::Distance(distance)) => Some(distance),
            _ => None,
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.description)
    }
}

/// Counts the steps of one kind in a log
pub fn count_kind(steps: &[Step], kind: StepKind) -> usize {
    steps.iter().filter(|step| step.kind == kind).count()
}

/// Serializes a whole step log to JSON
pub fn to_json(steps: &[Step]) -> Result<String, AlgorithmError> {
    Ok(serde_json::to_string(steps)?)
}

/// Parses a step log previously produced by [`to_json`]
pub fn from_json(json: &str) -> Result<Vec<Step>, AlgorithmError> {
    Ok(serde_json::from_str(json)?)
}
