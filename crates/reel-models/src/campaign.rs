//! Campaign aggregate root and lifecycle phases.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AudioMetadata, CampaignId, StyleContext};

/// Lifecycle phase of a campaign.
///
/// Phases advance strictly forward; no transition skips a state.
/// `Reviewing` may loop on itself (re-approval after edits) but never
/// regresses. `Failed` is terminal and reachable only from `Analyzing`
/// or `GeneratingImages`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPhase {
    /// Waiting for an audio track and reference images
    #[default]
    Draft,
    /// Audio analysis and style derivation in flight
    Analyzing,
    /// Scenes being derived from audio duration
    Storyboarding,
    /// Keyframe synthesis requests outstanding
    GeneratingImages,
    /// Human review gate; scenes approved individually
    Reviewing,
    /// Render jobs dispatched for approved scenes
    Production,
    /// All scenes rendered successfully
    Completed,
    /// Campaign-wide prerequisite failed
    Failed,
}

impl CampaignPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignPhase::Draft => "draft",
            CampaignPhase::Analyzing => "analyzing",
            CampaignPhase::Storyboarding => "storyboarding",
            CampaignPhase::GeneratingImages => "generating_images",
            CampaignPhase::Reviewing => "reviewing",
            CampaignPhase::Production => "production",
            CampaignPhase::Completed => "completed",
            CampaignPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CampaignPhase::Completed | CampaignPhase::Failed)
    }

    /// True once analysis has produced style and audio metadata.
    pub fn is_past_analyzing(&self) -> bool {
        !matches!(
            self,
            CampaignPhase::Draft | CampaignPhase::Analyzing | CampaignPhase::Failed
        )
    }
}

impl fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end-to-end orchestration run producing a video from one audio
/// track and a set of style reference images.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Campaign {
    /// Unique campaign ID, assigned at creation
    pub id: CampaignId,

    /// Requesting user
    pub owner_id: String,

    /// Current lifecycle phase
    pub phase: CampaignPhase,

    /// Derived visual profile; present iff phase is past `analyzing`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_context: Option<StyleContext>,

    /// Extracted audio features; present iff phase is past `analyzing`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_metadata: Option<AudioMetadata>,

    /// Set when production finished with at least one failed scene.
    /// A degraded campaign never reports `completed`.
    #[serde(default)]
    pub degraded: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Bumped on every phase transition
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new draft campaign for the given owner.
    pub fn new(owner_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CampaignId::new(),
            owner_id: owner_id.into(),
            phase: CampaignPhase::Draft,
            style_context: None,
            audio_metadata: None,
            degraded: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition to a new phase, bumping `updated_at`.
    pub fn set_phase(&mut self, phase: CampaignPhase) {
        self.phase = phase;
        self.updated_at = Utc::now();
    }

    /// Both analysis artifacts are present.
    pub fn analysis_complete(&self) -> bool {
        self.style_context.is_some() && self.audio_metadata.is_some()
    }
}
