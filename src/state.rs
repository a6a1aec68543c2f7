// src/state.rs

//! Defines `StateCode`, the value carried by both input samples and output slices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sample or slice state.
///
/// In boolean-partial mode only the named constants below are meaningful. In
/// integer mode any non-negative value is a domain category (for example a
/// sleep stage) and doubles as the theme lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateCode(pub i32);

impl StateCode {
    /// Transient default of a slice no sample has touched yet.
    pub const UNINITIALIZED: StateCode = StateCode(-1);
    pub const OFF: StateCode = StateCode(0);
    pub const ON: StateCode = StateCode(1);
    /// The column covers samples that disagree.
    pub const PARTIAL: StateCode = StateCode(2);
    pub const HIGHLIGHTED: StateCode = StateCode(3);

    /// Returns `true` for the states that never change once a slice holds them
    /// in boolean-partial mode.
    pub fn is_sticky(self) -> bool {
        self == StateCode::PARTIAL || self == StateCode::HIGHLIGHTED
    }
}

impl Default for StateCode {
    fn default() -> Self {
        StateCode::UNINITIALIZED
    }
}

impl From<i32> for StateCode {
    fn from(value: i32) -> Self {
        StateCode(value)
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convenience for building sample sequences from literal integers.
pub fn codes(values: &[i32]) -> Vec<StateCode> {
    values.iter().copied().map(StateCode).collect()
}
