//! Scene segmentation: partition a track duration into ordered windows.
//!
//! Pure and deterministic; the campaign engine turns the resulting slots
//! into scenes during storyboarding.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SegmentResult<T> = Result<T, SegmentError>;

#[derive(Debug, Error, PartialEq)]
pub enum SegmentError {
    #[error("total duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("window size must be positive, got {0}")]
    NonPositiveWindow(f64),
}

/// One slot produced by segmentation, before it becomes a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneSlot {
    /// Zero-based position in the sequence
    pub sequence_order: u32,
    /// Offset into the track, seconds
    pub time_start: f64,
    /// Slot length, seconds
    pub duration: f64,
}

/// Partition `total_duration` into windows of `window` seconds.
///
/// Slots are gapless with strictly increasing `time_start`; their
/// durations sum to `total_duration`. When the duration is not an exact
/// multiple of the window, the final slot is shorter; an exact multiple
/// never yields a zero-length trailing slot.
pub fn segment(total_duration: f64, window: f64) -> SegmentResult<Vec<SceneSlot>> {
    if !total_duration.is_finite() || total_duration <= 0.0 {
        return Err(SegmentError::NonPositiveDuration(total_duration));
    }
    if !window.is_finite() || window <= 0.0 {
        return Err(SegmentError::NonPositiveWindow(window));
    }

    let mut slots = Vec::new();
    let mut order = 0u32;
    loop {
        let time_start = f64::from(order) * window;
        if time_start >= total_duration {
            break;
        }
        slots.push(SceneSlot {
            sequence_order: order,
            time_start,
            duration: (total_duration - time_start).min(window),
        });
        order += 1;
    }
    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reference_scenario_24_5_by_8() {
        let slots = segment(24.5, 8.0).unwrap();
        assert_eq!(slots.len(), 4);

        let starts: Vec<f64> = slots.iter().map(|s| s.time_start).collect();
        let durations: Vec<f64> = slots.iter().map(|s| s.duration).collect();
        assert_eq!(starts, vec![0.0, 8.0, 16.0, 24.0]);
        assert_eq!(durations, vec![8.0, 8.0, 8.0, 0.5]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_sliver() {
        let slots = segment(24.0, 8.0).unwrap();
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().all(|s| (s.duration - 8.0).abs() < EPSILON));
    }

    #[test]
    fn test_short_track_yields_single_slot() {
        let slots = segment(3.2, 8.0).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].time_start, 0.0);
        assert!((slots[0].duration - 3.2).abs() < EPSILON);
    }

    #[test]
    fn test_durations_sum_and_starts_are_gapless() {
        for total in [0.1, 7.99, 8.0, 8.01, 24.5, 61.3, 240.0] {
            let slots = segment(total, 8.0).unwrap();
            assert!(!slots.is_empty(), "total={total}");

            let sum: f64 = slots.iter().map(|s| s.duration).sum();
            assert!((sum - total).abs() < EPSILON, "total={total} sum={sum}");

            for pair in slots.windows(2) {
                assert!(pair[0].time_start < pair[1].time_start);
                let end = pair[0].time_start + pair[0].duration;
                assert!((end - pair[1].time_start).abs() < EPSILON);
            }

            for (i, slot) in slots.iter().enumerate() {
                assert_eq!(slot.sequence_order, i as u32);
                assert!(slot.duration > 0.0);
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert_eq!(
            segment(0.0, 8.0),
            Err(SegmentError::NonPositiveDuration(0.0))
        );
        assert_eq!(
            segment(-1.5, 8.0),
            Err(SegmentError::NonPositiveDuration(-1.5))
        );
        assert_eq!(segment(10.0, 0.0), Err(SegmentError::NonPositiveWindow(0.0)));
        assert!(segment(f64::NAN, 8.0).is_err());
    }
}
