//! Internal completion events and the public observation surface.

use serde::Serialize;

use reel_models::{
    AudioMetadata, Campaign, CampaignId, CampaignPhase, KeyframeSlot, ProductionReport,
    RequestId, Scene, SceneId, StyleContext,
};
use reel_providers::ProviderError;

/// Completion events sent by spawned provider tasks back into the engine
/// loop. All state mutation happens there, one event at a time.
#[derive(Debug)]
pub(crate) enum Event {
    AnalysisFinished {
        campaign_id: CampaignId,
        result: Result<(AudioMetadata, StyleContext), ProviderError>,
    },
    KeyframeFinished {
        scene_id: SceneId,
        slot: KeyframeSlot,
        request_id: RequestId,
        result: Result<String, String>,
    },
    RenderProgressed {
        scene_id: SceneId,
        percent: u8,
    },
    RenderFinished {
        scene_id: SceneId,
        result: Result<String, ProviderError>,
    },
}

/// Notifications broadcast to observers (the presentation layer).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    PhaseChanged {
        campaign_id: CampaignId,
        phase: CampaignPhase,
    },
    SceneUpdated {
        scene: Scene,
    },
    ProductionProgress {
        report: ProductionReport,
    },
    CampaignFailed {
        campaign_id: CampaignId,
        message: String,
    },
}

/// Read-only view of the engine state at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct EngineSnapshot {
    pub campaign: Option<Campaign>,
    pub scenes: Vec<Scene>,
    pub phase: CampaignPhase,
    pub progress: ProductionReport,
    pub last_error: Option<String>,
}
