//! Engine error taxonomy.
//!
//! `InvalidInput` and `PreconditionFailed` are recovered locally: the
//! command is rejected synchronously and the phase is left unchanged.
//! `Analysis` aborts the whole campaign. `Generation` is scene-scoped and
//! never fails sibling scenes. `InvariantViolation` is a programmer-visible
//! defect, not a user-recoverable condition.

use thiserror::Error;

use reel_models::{KeyframeSlot, SceneId};
use reel_providers::ProviderError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("campaign analysis failed: {0}")]
    Analysis(String),

    #[error("generation failed for scene {scene_id} ({operation}): {message}")]
    Generation {
        scene_id: SceneId,
        operation: String,
        message: String,
    },

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("unknown scene: {0}")]
    UnknownScene(SceneId),

    #[error("engine stopped")]
    EngineStopped,
}

impl EngineError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Scene-scoped keyframe synthesis failure.
    pub fn keyframe_failed(scene_id: SceneId, slot: KeyframeSlot, msg: impl Into<String>) -> Self {
        Self::Generation {
            scene_id,
            operation: format!("{slot} keyframe"),
            message: msg.into(),
        }
    }

    /// Scene-scoped clip render failure.
    pub fn render_failed(scene_id: SceneId, msg: impl Into<String>) -> Self {
        Self::Generation {
            scene_id,
            operation: "clip render".to_string(),
            message: msg.into(),
        }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionFailed(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Rejected synchronously with the phase left unchanged; the caller
    /// can correct the request and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_)
                | EngineError::PreconditionFailed(_)
                | EngineError::UnknownScene(_)
        )
    }
}

impl From<ProviderError> for EngineError {
    fn from(err: ProviderError) -> Self {
        EngineError::Analysis(err.to_string())
    }
}
