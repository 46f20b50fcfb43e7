//! Storyboarding: turn audio metadata and a style context into scenes.

use reel_models::{
    segment, AudioMetadata, CampaignId, KeyframeSlot, Scene, SceneId, SceneSlot, SceneStatus,
    SegmentResult, StyleContext,
};

/// Build the full ordered scene list for a campaign.
///
/// One scene per segmentation slot; prompts are seeded from the shared
/// style context and the beat density of each window.
pub fn build_scenes(
    campaign_id: &CampaignId,
    meta: &AudioMetadata,
    style: &StyleContext,
    window_seconds: f64,
) -> SegmentResult<Vec<Scene>> {
    let slots = segment(meta.duration_seconds, window_seconds)?;

    Ok(slots
        .into_iter()
        .map(|slot| {
            let start_prompt = keyframe_prompt(KeyframeSlot::Start, &slot, meta, style);
            let end_prompt = keyframe_prompt(KeyframeSlot::End, &slot, meta, style);
            Scene {
                id: SceneId::new(),
                campaign_id: campaign_id.clone(),
                sequence_order: slot.sequence_order,
                time_start: slot.time_start,
                duration: slot.duration,
                start_prompt,
                end_prompt,
                start_image_url: None,
                end_image_url: None,
                clip_url: None,
                status: SceneStatus::PendingImages,
            }
        })
        .collect())
}

fn keyframe_prompt(
    slot: KeyframeSlot,
    scene_slot: &SceneSlot,
    meta: &AudioMetadata,
    style: &StyleContext,
) -> String {
    let moment = match slot {
        KeyframeSlot::Start => "Opening",
        KeyframeSlot::End => "Closing",
    };
    let beats = meta.beats_in_window(scene_slot.time_start, scene_slot.duration);
    format!(
        "{} keyframe for scene {} at {:.1}s ({:.0} BPM, {} beat accents): {}",
        moment,
        scene_slot.sequence_order + 1,
        match slot {
            KeyframeSlot::Start => scene_slot.time_start,
            KeyframeSlot::End => scene_slot.time_start + scene_slot.duration,
        },
        meta.beats_per_minute,
        beats,
        style.prompt_fragment(),
    )
}
