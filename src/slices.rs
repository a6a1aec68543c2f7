// src/slices.rs

//! Resamples a sample sequence onto a fixed number of pixel columns ("slices").
//!
//! Every sample claims a contiguous run of columns derived from the ratio
//! `width / samples.len()`. When a column is claimed by more than one sample the
//! active `OverlapPolicy` decides what the column ends up holding:
//!
//! - `Mode::BooleanPartial` marks columns whose samples disagree as `PARTIAL`,
//!   and `PARTIAL`/`HIGHLIGHTED` columns never change again.
//! - `Mode::Integer` lets the last sample to touch a column win.

use crate::state::StateCode;
use log::trace;
use serde::{Deserialize, Serialize};

/// How sample values are interpreted when several land on the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// On/off/highlighted data; disagreeing columns become `PARTIAL`.
    #[default]
    BooleanPartial,
    /// Arbitrary category codes; last writer wins.
    Integer,
}

impl Mode {
    /// The merge strategy for this mode.
    pub fn policy(self) -> &'static dyn OverlapPolicy {
        match self {
            Mode::BooleanPartial => &PartialOverlap,
            Mode::Integer => &LastWriter,
        }
    }
}

/// Which columns a sample claims at its right-hand edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceBoundary {
    /// `[start, end]` inclusive: the column at `end` is also the next sample's
    /// `start`, so consecutive samples share it. With boolean data this turns
    /// every on/off transition column `PARTIAL`.
    #[default]
    Shared,
    /// `[start, end)`: boundary columns belong to the later sample only. A sample
    /// whose run rounds to zero width still claims its `start` column.
    Disjoint,
}

/// Decides the next state of a column when another sample lands on it.
pub trait OverlapPolicy: Sync {
    fn merge(&self, current: StateCode, incoming: StateCode) -> StateCode;
}

/// Boolean-partial merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialOverlap;

impl OverlapPolicy for PartialOverlap {
    fn merge(&self, current: StateCode, incoming: StateCode) -> StateCode {
        match current {
            StateCode::UNINITIALIZED => incoming,
            StateCode::ON | StateCode::OFF if current != incoming => StateCode::PARTIAL,
            // Equal ON/OFF, sticky PARTIAL/HIGHLIGHTED, and codes outside the
            // boolean set are all left alone.
            _ => current,
        }
    }
}

/// Integer-mode merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastWriter;

impl OverlapPolicy for LastWriter {
    fn merge(&self, _current: StateCode, incoming: StateCode) -> StateCode {
        incoming
    }
}

/// The aggregated column states of one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Slices {
    states: Vec<StateCode>,
    sample_count: usize,
    ratio: Option<f64>,
}

impl Slices {
    pub fn states(&self) -> &[StateCode] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of samples the slices were aggregated from.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Columns per sample, or `None` when there were no samples.
    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    /// Column index of the right-hand edge of each sample, `round((bit + 1) * ratio)`.
    /// May equal the width for the last sample.
    pub fn sample_edges(&self) -> Vec<usize> {
        match self.ratio {
            Some(ratio) => (0..self.sample_count)
                .map(|bit| column_at(bit + 1, ratio))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Round half away from zero, matching the classic `round()` of most languages.
fn column_at(edge: usize, ratio: f64) -> usize {
    (edge as f64 * ratio).round() as usize
}

/// Aggregate `samples` onto `width` columns.
///
/// Never fails: an empty sample list leaves every column `UNINITIALIZED`, and a
/// zero width yields an empty result. Columns past `width - 1` are clamped away.
pub fn aggregate(samples: &[StateCode], width: usize, mode: Mode, boundary: SliceBoundary) -> Slices {
    let mut states = vec![StateCode::UNINITIALIZED; width];

    if samples.is_empty() || width == 0 {
        return Slices {
            states,
            sample_count: samples.len(),
            ratio: None,
        };
    }

    let ratio = width as f64 / samples.len() as f64;
    let policy = mode.policy();

    for (bit, &sample) in samples.iter().enumerate() {
        let start = column_at(bit, ratio);
        let end = column_at(bit + 1, ratio);
        let stop = match boundary {
            SliceBoundary::Shared => end + 1,
            SliceBoundary::Disjoint => end.max(start + 1),
        }
        .min(width);

        trace!("Sample {} = {} claims columns {}..{}", bit, sample, start, stop);

        for slot in states.iter_mut().take(stop).skip(start) {
            *slot = policy.merge(*slot, sample);
        }
    }

    Slices {
        states,
        sample_count: samples.len(),
        ratio: Some(ratio),
    }
}
