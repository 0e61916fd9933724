//! Array elements handed to the sorting algorithms
//!
//! An element carries only what the algorithms need: a stable identity and
//! the value being ordered. Presentation flags belong to the playback layer.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Stable, caller-assigned element identity
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// One sortable value with its identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayElement {
    pub id: ElementId,
    pub value: f64,
}

impl ArrayElement {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: ElementId::new(id),
            value,
        }
    }

    /// Builds elements `elem-0 .. elem-{n-1}` from raw values, in order
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Self::new(format!("elem-{i}"), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_assigns_positional_ids() {
        let elements = ArrayElement::from_values(&[3.0, 1.0]);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].id.as_str(), "elem-0");
        assert_eq!(elements[1].id.as_str(), "elem-1");
        assert_eq!(elements[1].value, 1.0);
    }

    #[test]
    fn test_element_json_shape() {
        let element = ArrayElement::new("elem-7", 42.0);
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#"{"id":"elem-7","value":42.0}"#);
    }
}
