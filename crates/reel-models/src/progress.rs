//! Production progress reporting.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{SceneId, SceneStatus};

/// Per-scene render progress.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SceneProgress {
    pub scene_id: SceneId,
    pub sequence_order: u32,
    /// Render progress, 0-100; scenes not yet started count as 0
    pub percent: u8,
    pub status: SceneStatus,
}

/// Aggregate production progress across all scenes of a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProductionReport {
    pub scenes: Vec<SceneProgress>,
    /// Arithmetic mean of per-scene progress
    pub aggregate_percent: f64,
    /// True when at least one scene's render failed
    pub degraded: bool,
}

impl ProductionReport {
    /// Build a report from per-scene entries.
    pub fn new(scenes: Vec<SceneProgress>, degraded: bool) -> Self {
        let aggregate_percent = if scenes.is_empty() {
            0.0
        } else {
            scenes.iter().map(|s| f64::from(s.percent)).sum::<f64>() / scenes.len() as f64
        };
        Self {
            scenes,
            aggregate_percent,
            degraded,
        }
    }

    /// Every scene rendered successfully.
    pub fn is_complete(&self) -> bool {
        !self.scenes.is_empty()
            && self
                .scenes
                .iter()
                .all(|s| s.status == SceneStatus::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(order: u32, percent: u8, status: SceneStatus) -> SceneProgress {
        SceneProgress {
            scene_id: SceneId::new(),
            sequence_order: order,
            percent,
            status,
        }
    }

    #[test]
    fn test_aggregate_is_arithmetic_mean() {
        let report = ProductionReport::new(
            vec![
                entry(0, 100, SceneStatus::Completed),
                entry(1, 50, SceneStatus::ProcessingVideo),
                entry(2, 0, SceneStatus::Approved),
            ],
            false,
        );
        assert!((report.aggregate_percent - 50.0).abs() < f64::EPSILON);
        assert!(!report.is_complete());
    }

    #[test]
    fn test_aggregate_reaches_100_only_when_all_completed() {
        let all_done = ProductionReport::new(
            vec![
                entry(0, 100, SceneStatus::Completed),
                entry(1, 100, SceneStatus::Completed),
            ],
            false,
        );
        assert_eq!(all_done.aggregate_percent, 100.0);
        assert!(all_done.is_complete());

        // A failed scene pinned at 100 percent must not read as complete.
        let degraded = ProductionReport::new(
            vec![
                entry(0, 100, SceneStatus::Completed),
                entry(1, 100, SceneStatus::Failed),
            ],
            true,
        );
        assert!(!degraded.is_complete());
        assert!(degraded.degraded);
    }

    #[test]
    fn test_empty_report() {
        let report = ProductionReport::new(vec![], false);
        assert_eq!(report.aggregate_percent, 0.0);
        assert!(!report.is_complete());
    }
}
