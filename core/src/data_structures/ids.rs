//! Monotonic identifier allocation
//!
//! Node identifiers are handed out from an explicit counter so that two
//! nodes created in quick succession can never collide.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::NodeId;

/// Hands out `"{prefix}-{n}"` identifiers with a strictly increasing `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Returns a fresh identifier and advances the counter
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut ids = IdAllocator::default();
        let a = ids.allocate();
        let b = ids.allocate();

        assert_eq!(a.as_str(), "node-0");
        assert_eq!(b.as_str(), "node-1");
        assert_eq!(ids.allocated(), 2);
    }

    #[test]
    fn test_custom_prefix() {
        let mut ids = IdAllocator::new("elem");
        assert_eq!(ids.allocate().as_str(), "elem-0");
    }
}
