//! Scenes: fixed-size time windows bounded by two keyframe images.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CampaignId, SceneId};

/// Status of a single scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneStatus {
    /// At least one keyframe slot is unfilled or failed synthesis
    #[default]
    PendingImages,
    /// Both keyframes present, awaiting human approval
    ImagesReady,
    /// Explicitly approved for production
    Approved,
    /// Render job in flight
    ProcessingVideo,
    /// Clip rendered successfully
    Completed,
    /// Render reported failure
    Failed,
}

impl SceneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneStatus::PendingImages => "pending_images",
            SceneStatus::ImagesReady => "images_ready",
            SceneStatus::Approved => "approved",
            SceneStatus::ProcessingVideo => "processing_video",
            SceneStatus::Completed => "completed",
            SceneStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SceneStatus::Completed | SceneStatus::Failed)
    }

    /// Approval is reachable only from `images_ready`.
    pub fn can_approve(&self) -> bool {
        matches!(self, SceneStatus::ImagesReady)
    }
}

impl fmt::Display for SceneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two keyframe slots bounding a scene's motion interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KeyframeSlot {
    Start,
    End,
}

impl KeyframeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyframeSlot::Start => "start",
            KeyframeSlot::End => "end",
        }
    }

    /// Both slots, in order.
    pub const ALL: [KeyframeSlot; 2] = [KeyframeSlot::Start, KeyframeSlot::End];
}

impl fmt::Display for KeyframeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-size time window of the campaign's audio.
///
/// Scenes are created once during storyboarding and never reordered;
/// only `status` and the asset URLs mutate afterward.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Unique scene ID
    pub id: SceneId,

    /// Owning campaign (scene is destroyed with it)
    pub campaign_id: CampaignId,

    /// Zero-based position; gapless, matches `time_start` ascending
    pub sequence_order: u32,

    /// Offset into the audio track, seconds
    pub time_start: f64,

    /// Scene length, seconds; the final scene may be shorter than the window
    pub duration: f64,

    /// Prompt for the opening keyframe
    pub start_prompt: String,

    /// Prompt for the closing keyframe
    pub end_prompt: String,

    /// Generated opening keyframe asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_image_url: Option<String>,

    /// Generated closing keyframe asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_image_url: Option<String>,

    /// Rendered clip asset, set when the scene completes production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_url: Option<String>,

    /// Scene status
    #[serde(default)]
    pub status: SceneStatus,
}

impl Scene {
    /// Keyframe URL for a slot, if synthesized.
    pub fn keyframe_url(&self, slot: KeyframeSlot) -> Option<&str> {
        match slot {
            KeyframeSlot::Start => self.start_image_url.as_deref(),
            KeyframeSlot::End => self.end_image_url.as_deref(),
        }
    }

    /// Replace the keyframe URL for a slot.
    pub fn set_keyframe_url(&mut self, slot: KeyframeSlot, url: impl Into<String>) {
        match slot {
            KeyframeSlot::Start => self.start_image_url = Some(url.into()),
            KeyframeSlot::End => self.end_image_url = Some(url.into()),
        }
    }

    /// Prompt text for a slot.
    pub fn prompt(&self, slot: KeyframeSlot) -> &str {
        match slot {
            KeyframeSlot::Start => &self.start_prompt,
            KeyframeSlot::End => &self.end_prompt,
        }
    }

    /// Both keyframe slots are populated.
    pub fn images_ready(&self) -> bool {
        self.start_image_url.is_some() && self.end_image_url.is_some()
    }
}
