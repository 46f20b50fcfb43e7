//! Cloneable client handle to a running engine.

use tokio::sync::{broadcast, mpsc, oneshot};

use reel_models::{CampaignId, KeyframeSlot, RequestId, SceneId};
use reel_providers::{AudioSource, ImageSource};

use crate::command::Command;
use crate::error::{EngineError, EngineResult};
use crate::events::{EngineEvent, EngineSnapshot};

/// Handle used to drive and observe a [`CampaignEngine`](crate::engine::CampaignEngine).
///
/// Every method is a request/reply exchange with the engine loop; if the
/// loop has stopped, calls fail with [`EngineError::EngineStopped`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<Command>,
    broadcast_tx: broadcast::Sender<EngineEvent>,
}

impl EngineHandle {
    pub(crate) fn new(
        cmd_tx: mpsc::Sender<Command>,
        broadcast_tx: broadcast::Sender<EngineEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            broadcast_tx,
        }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, EngineError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.cmd_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| EngineError::EngineStopped)?;
        reply_rx.await.map_err(|_| EngineError::EngineStopped)
    }

    /// Submit an audio track plus reference images, creating the campaign
    /// and starting analysis.
    pub async fn submit(
        &self,
        audio: AudioSource,
        images: Vec<ImageSource>,
    ) -> EngineResult<CampaignId> {
        self.request(|reply| Command::Submit {
            audio,
            images,
            reply,
        })
        .await?
    }

    /// Re-run synthesis for one keyframe slot, superseding any in-flight
    /// request for it.
    pub async fn regenerate_keyframe(
        &self,
        scene_id: SceneId,
        slot: KeyframeSlot,
    ) -> EngineResult<RequestId> {
        self.request(|reply| Command::RegenerateKeyframe {
            scene_id,
            slot,
            reply,
        })
        .await?
    }

    /// Replace one keyframe slot with a caller-supplied image URL.
    pub async fn set_keyframe(
        &self,
        scene_id: SceneId,
        slot: KeyframeSlot,
        url: impl Into<String>,
    ) -> EngineResult<()> {
        self.request(|reply| Command::SetKeyframe {
            scene_id,
            slot,
            url: url.into(),
            reply,
        })
        .await?
    }

    /// Mark one scene as approved for production.
    pub async fn approve_scene(&self, scene_id: SceneId) -> EngineResult<()> {
        self.request(|reply| Command::ApproveScene { scene_id, reply })
            .await?
    }

    /// Close the review gate: requires every scene approved, then starts
    /// production.
    pub async fn approve_all(&self) -> EngineResult<()> {
        self.request(|reply| Command::ApproveAll { reply }).await?
    }

    /// Re-dispatch scenes that have not completed rendering.
    pub async fn resume_production(&self) -> EngineResult<()> {
        self.request(|reply| Command::ResumeProduction { reply })
            .await?
    }

    /// Current state of the campaign, scenes, and production progress.
    pub async fn snapshot(&self) -> EngineResult<EngineSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Subscribe to engine notifications. Slow subscribers may observe
    /// [`broadcast::error::RecvError::Lagged`] and should re-sync via
    /// [`snapshot`](Self::snapshot).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.broadcast_tx.subscribe()
    }

    /// Ask the engine loop to stop. In-flight provider tasks finish on
    /// their own but their results are discarded.
    pub async fn shutdown(&self) {
        self.cmd_tx.send(Command::Shutdown).await.ok();
    }
}
