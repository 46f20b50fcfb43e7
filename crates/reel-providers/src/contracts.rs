//! Boundary contracts consumed by the campaign engine.
//!
//! Each trait wraps one out-of-scope external service. Implementations
//! must be `Send + Sync`; the engine invokes them from spawned tasks and
//! correlates responses by request identity, never by arrival order.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use reel_models::{AudioMetadata, RequestId, SceneId, StyleContext};

use crate::error::ProviderResult;

/// Uploaded audio track, opaque to the engine.
#[derive(Debug, Clone)]
pub struct AudioSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl AudioSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Uploaded style reference image, opaque to the engine.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// One keyframe synthesis request.
///
/// `request_id` is the cancellation/correlation key: a response whose id
/// no longer matches the engine's pending entry for its slot is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyframeRequest {
    pub request_id: RequestId,
    pub prompt: String,
    pub style: StyleContext,
}

/// One clip render request interpolating between two keyframes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub scene_id: SceneId,
    pub start_url: String,
    pub end_url: String,
    pub duration_seconds: f64,
}

/// Incremental progress reported by a render in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderUpdate {
    pub scene_id: SceneId,
    /// 0-100
    pub percent: u8,
}

/// Audio-feature extraction service.
#[async_trait]
pub trait AudioAnalyzer: Send + Sync {
    /// Extract duration, tempo, and beat map from a raw track.
    async fn analyze(&self, audio: &AudioSource) -> ProviderResult<AudioMetadata>;
}

/// Visual-style derivation service.
#[async_trait]
pub trait StyleDeriver: Send + Sync {
    /// Derive a shared look (palette, lighting, mood) from reference images.
    async fn derive(&self, images: &[ImageSource]) -> ProviderResult<StyleContext>;
}

/// Keyframe image synthesis service.
#[async_trait]
pub trait KeyframeSynthesizer: Send + Sync {
    /// Synthesize one keyframe; resolves to the generated asset URL.
    async fn synthesize(&self, request: KeyframeRequest) -> ProviderResult<String>;
}

/// Video clip rendering service.
#[async_trait]
pub trait ClipRenderer: Send + Sync {
    /// Render one clip, streaming progress updates through `progress`
    /// until the call resolves to the final clip URL.
    async fn render(
        &self,
        request: RenderRequest,
        progress: mpsc::Sender<RenderUpdate>,
    ) -> ProviderResult<String>;
}
