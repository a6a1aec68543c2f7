// src/night.rs

//! Aligns one night of samples to a fixed clock window so that strips for
//! different nights line up column for column.
//!
//! Offsets are measured in seconds from the noon preceding the night. Turning
//! wall-clock timestamps into those offsets (dates, timezones, DST) is the
//! caller's job; `seconds_since_noon` only handles the noon-to-noon wrap.

use crate::state::StateCode;
use log::debug;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: u32 = 60 * 60;
const SECONDS_PER_DAY: u32 = 24 * SECONDS_PER_HOUR;

/// Value used for padding before and after the recorded night.
pub const PAD_SAMPLE: StateCode = StateCode::OFF;

/// Clock window a strip covers, from `start_hour_pm` in the evening to
/// `end_hour_am` the next morning. The default is noon to noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightWindow {
    /// Hours after noon at which the window opens (9 means 9 pm).
    pub start_hour_pm: u32,
    /// Hour of the morning at which the window closes (11 means 11 am, 0 means
    /// midnight, 12 means noon).
    pub end_hour_am: u32,
    /// Seconds between consecutive samples.
    pub interval_seconds: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        NightWindow {
            start_hour_pm: 0,
            end_hour_am: 12,
            interval_seconds: 30,
        }
    }
}

impl NightWindow {
    pub fn new(start_hour_pm: u32, end_hour_am: u32) -> Self {
        NightWindow {
            start_hour_pm,
            end_hour_am,
            ..Self::default()
        }
    }

    /// Seconds from the previous noon to the start of the window.
    pub fn start_offset(&self) -> u32 {
        (self.start_hour_pm * SECONDS_PER_HOUR).min(SECONDS_PER_DAY)
    }

    /// Seconds from the end of the window to the following noon.
    pub fn end_offset(&self) -> u32 {
        12u32.saturating_sub(self.end_hour_am) * SECONDS_PER_HOUR
    }

    fn interval(&self) -> u32 {
        self.interval_seconds.max(1)
    }

    /// Number of samples spanning the whole window.
    pub fn total_samples(&self) -> usize {
        let span = SECONDS_PER_DAY
            .saturating_sub(self.start_offset())
            .saturating_sub(self.end_offset());
        (span / self.interval()) as usize
    }

    /// Number of padding samples needed between the window start and a night
    /// that began `night_start` seconds after noon. Zero if the night began
    /// before the window opened.
    pub fn leading_pad(&self, night_start: u32) -> usize {
        let gap = night_start as f64 - self.start_offset() as f64;
        (gap / self.interval() as f64).round().max(0.0) as usize
    }

    /// Prefix `samples` with the leading pad and extend the result with
    /// `PAD_SAMPLE` up to `total_samples()`. Nights that overrun the window are
    /// left intact rather than truncated.
    pub fn pad(&self, samples: &[StateCode], night_start: u32) -> Vec<StateCode> {
        let lead = self.leading_pad(night_start);
        let total = self.total_samples().max(lead + samples.len());

        let mut padded = Vec::with_capacity(total);
        padded.resize(lead, PAD_SAMPLE);
        padded.extend_from_slice(samples);
        padded.resize(total, PAD_SAMPLE);

        debug!(
            "Night padded: {} leading + {} samples -> {} total",
            lead,
            samples.len(),
            padded.len()
        );
        padded
    }
}

/// Seconds between the most recent noon and the given clock time. Morning
/// times (before 12:00) belong to the night that began the previous evening.
pub fn seconds_since_noon(hour: u32, minute: u32, second: u32) -> u32 {
    let hours_after_noon = if hour < 12 { hour + 12 } else { hour - 12 };
    hours_after_noon * SECONDS_PER_HOUR + minute * 60 + second
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::codes;

    #[test_log::test]
    fn test_noon_to_noon_window() {
        let window = NightWindow::default();
        assert_eq!(window.start_offset(), 0);
        assert_eq!(window.end_offset(), 0);
        assert_eq!(window.total_samples(), 2880);
    }

    #[test_log::test]
    fn test_zero_end_hour_closes_at_midnight() {
        let window = NightWindow::new(0, 0);
        assert_eq!(window.end_offset(), 12 * 3600);
        assert_eq!(window.total_samples(), 1440);
    }

    #[test_log::test]
    fn test_nine_pm_to_eleven_am_window() {
        let window = NightWindow::new(9, 11);
        assert_eq!(window.start_offset(), 9 * 3600);
        assert_eq!(window.end_offset(), 3600);
        assert_eq!(window.total_samples(), 1680);
    }

    #[test_log::test]
    fn test_seconds_since_noon_wraps_at_midnight() {
        assert_eq!(seconds_since_noon(12, 0, 0), 0);
        assert_eq!(seconds_since_noon(22, 30, 0), 10 * 3600 + 1800);
        assert_eq!(seconds_since_noon(0, 0, 30), 12 * 3600 + 30);
        assert_eq!(seconds_since_noon(6, 15, 0), 18 * 3600 + 900);
    }

    #[test_log::test]
    fn test_leading_pad_rounds_to_interval() {
        let window = NightWindow::new(9, 11);
        let start = seconds_since_noon(22, 30, 0);
        assert_eq!(window.leading_pad(start), 180);
        assert_eq!(window.leading_pad(start + 14), 180);
        assert_eq!(window.leading_pad(start + 15), 181);
    }

    #[test_log::test]
    fn test_night_before_window_gets_no_pad() {
        let window = NightWindow::new(9, 11);
        assert_eq!(window.leading_pad(seconds_since_noon(20, 0, 0)), 0);
    }

    #[test_log::test]
    fn test_pad_places_samples_and_fills_window() {
        let window = NightWindow::new(9, 11);
        let night = codes(&[1, 2, 3, 4]);
        let padded = window.pad(&night, seconds_since_noon(21, 1, 0));

        assert_eq!(padded.len(), 1680);
        assert_eq!(&padded[..2], &[PAD_SAMPLE; 2]);
        assert_eq!(&padded[2..6], night.as_slice());
        assert!(padded[6..].iter().all(|&s| s == PAD_SAMPLE));
    }

    #[test_log::test]
    fn test_pad_never_truncates_long_nights() {
        let window = NightWindow {
            start_hour_pm: 11,
            end_hour_am: 0,
            interval_seconds: 1800,
        };
        // one hour window = 2 samples
        assert_eq!(window.total_samples(), 2);
        let night = codes(&[1, 1, 1, 1, 1]);
        let padded = window.pad(&night, seconds_since_noon(23, 30, 0));
        assert_eq!(padded.len(), 6);
        assert_eq!(padded[0], PAD_SAMPLE);
    }
}
