//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Sequence number of a design, assigned by ingestion order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(u32);

impl DesignId {
    /// Creates a DesignId from a raw sequence number.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DesignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DesignId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("design_id", e.to_string()))
    }
}

/// Hands out consecutive design ids in ingestion order.
#[derive(Debug, Default)]
pub struct DesignIdSequence {
    last: u32,
}

impl DesignIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id (the first call yields 1).
    pub fn next_id(&mut self) -> DesignId {
        self.last += 1;
        DesignId(self.last)
    }
}
