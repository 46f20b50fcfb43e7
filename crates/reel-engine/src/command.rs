//! Commands accepted by the engine's single-writer loop.

use tokio::sync::oneshot;

use reel_models::{CampaignId, KeyframeSlot, RequestId, SceneId};
use reel_providers::{AudioSource, ImageSource};

use crate::error::EngineResult;
use crate::events::EngineSnapshot;

/// A command sent from an [`EngineHandle`](crate::handle::EngineHandle)
/// into the engine loop. Replies travel back through the paired oneshot.
#[derive(Debug)]
pub(crate) enum Command {
    Submit {
        audio: AudioSource,
        images: Vec<ImageSource>,
        reply: oneshot::Sender<EngineResult<CampaignId>>,
    },
    RegenerateKeyframe {
        scene_id: SceneId,
        slot: KeyframeSlot,
        reply: oneshot::Sender<EngineResult<RequestId>>,
    },
    SetKeyframe {
        scene_id: SceneId,
        slot: KeyframeSlot,
        url: String,
        reply: oneshot::Sender<EngineResult<()>>,
    },
    ApproveScene {
        scene_id: SceneId,
        reply: oneshot::Sender<EngineResult<()>>,
    },
    ApproveAll {
        reply: oneshot::Sender<EngineResult<()>>,
    },
    ResumeProduction {
        reply: oneshot::Sender<EngineResult<()>>,
    },
    Snapshot {
        reply: oneshot::Sender<EngineSnapshot>,
    },
    Shutdown,
}
