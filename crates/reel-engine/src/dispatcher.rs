//! Production dispatch: parallel per-scene render jobs and progress
//! aggregation.
//!
//! Renders have no ordering dependency between scenes; each job streams
//! progress back into the engine loop, which is the only writer of scene
//! state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Semaphore};
use tracing::debug;

use reel_models::{ProductionReport, Scene, SceneId, SceneProgress, SceneStatus};
use reel_providers::{call_with_timeout, ClipRenderer, RenderRequest, RenderUpdate};

use crate::events::Event;

/// Dispatch is idempotent: scenes already rendering or rendered are
/// skipped when production is (re)invoked.
pub(crate) fn needs_dispatch(scene: &Scene) -> bool {
    !matches!(
        scene.status,
        SceneStatus::ProcessingVideo | SceneStatus::Completed
    )
}

/// Launch one independent render job for a scene.
pub(crate) fn spawn_render(
    renderer: Arc<dyn ClipRenderer>,
    semaphore: Arc<Semaphore>,
    timeout: Duration,
    request: RenderRequest,
    events: mpsc::Sender<Event>,
) {
    let scene_id = request.scene_id.clone();
    let (progress_tx, mut progress_rx) = mpsc::channel::<RenderUpdate>(32);

    let forward = events.clone();
    tokio::spawn(async move {
        while let Some(update) = progress_rx.recv().await {
            forward
                .send(Event::RenderProgressed {
                    scene_id: update.scene_id,
                    percent: update.percent.min(100),
                })
                .await
                .ok();
        }
    });

    tokio::spawn(async move {
        let _permit = semaphore.acquire_owned().await.ok();
        debug!(scene_id = %scene_id, "render job dispatched");
        let result =
            call_with_timeout("render_clip", timeout, renderer.render(request, progress_tx)).await;
        events
            .send(Event::RenderFinished { scene_id, result })
            .await
            .ok();
    });
}

/// Aggregate per-scene render progress into a campaign-level report.
///
/// Completed scenes count as 100, failed and not-yet-started scenes as 0;
/// the aggregate is the arithmetic mean, so it reads exactly 100 only when
/// every scene completed.
pub(crate) fn production_report(
    scenes: &[Scene],
    progress: &HashMap<SceneId, u8>,
    degraded: bool,
) -> ProductionReport {
    let entries = scenes
        .iter()
        .map(|scene| SceneProgress {
            scene_id: scene.id.clone(),
            sequence_order: scene.sequence_order,
            percent: match scene.status {
                SceneStatus::Completed => 100,
                SceneStatus::Failed => 0,
                _ => progress.get(&scene.id).copied().unwrap_or(0),
            },
            status: scene.status,
        })
        .collect();
    ProductionReport::new(entries, degraded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_models::CampaignId;

    fn scene(order: u32, status: SceneStatus) -> Scene {
        Scene {
            id: SceneId::new(),
            campaign_id: CampaignId::new(),
            sequence_order: order,
            time_start: f64::from(order) * 8.0,
            duration: 8.0,
            start_prompt: String::new(),
            end_prompt: String::new(),
            start_image_url: Some("start.png".into()),
            end_image_url: Some("end.png".into()),
            clip_url: None,
            status,
        }
    }

    #[test]
    fn test_needs_dispatch_skips_active_and_done() {
        assert!(needs_dispatch(&scene(0, SceneStatus::Approved)));
        assert!(needs_dispatch(&scene(0, SceneStatus::Failed)));
        assert!(!needs_dispatch(&scene(0, SceneStatus::ProcessingVideo)));
        assert!(!needs_dispatch(&scene(0, SceneStatus::Completed)));
    }

    #[test]
    fn test_report_counts_unstarted_scenes_as_zero() {
        let scenes = vec![
            scene(0, SceneStatus::Completed),
            scene(1, SceneStatus::ProcessingVideo),
            scene(2, SceneStatus::Approved),
        ];
        let mut progress = HashMap::new();
        progress.insert(scenes[1].id.clone(), 60u8);

        let report = production_report(&scenes, &progress, false);
        let percents: Vec<u8> = report.scenes.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![100, 60, 0]);
        assert!((report.aggregate_percent - 160.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_is_complete_only_when_all_rendered() {
        let done = vec![scene(0, SceneStatus::Completed), scene(1, SceneStatus::Completed)];
        let report = production_report(&done, &HashMap::new(), false);
        assert_eq!(report.aggregate_percent, 100.0);
        assert!(report.is_complete());

        let mixed = vec![scene(0, SceneStatus::Completed), scene(1, SceneStatus::Failed)];
        let report = production_report(&mixed, &HashMap::new(), true);
        assert!(!report.is_complete());
        assert!(report.degraded);
    }

    #[test]
    fn test_report_zeroes_failed_scenes() {
        // A render that reached 100% before failing must not leave its
        // last reported progress in the aggregate.
        let scenes = vec![scene(0, SceneStatus::Completed), scene(1, SceneStatus::Failed)];
        let mut progress = HashMap::new();
        progress.insert(scenes[1].id.clone(), 100u8);

        let report = production_report(&scenes, &progress, true);
        assert_eq!(report.scenes[1].percent, 0);
        assert_eq!(report.aggregate_percent, 50.0);
    }
}
