//! Shared data models for the ReelForge campaign engine.
//!
//! This crate provides Serde-serializable types for:
//! - Campaigns and their lifecycle phases
//! - Scenes and keyframe slots
//! - Style contexts and audio metadata
//! - Scene segmentation (pure, no side effects)
//! - Production progress reporting

pub mod campaign;
pub mod ids;
pub mod progress;
pub mod scene;
pub mod segment;
pub mod style;

// Re-export common types
pub use campaign::{Campaign, CampaignPhase};
pub use ids::{CampaignId, RequestId, SceneId};
pub use progress::{ProductionReport, SceneProgress};
pub use scene::{KeyframeSlot, Scene, SceneStatus};
pub use segment::{segment, SceneSlot, SegmentError, SegmentResult};
pub use style::{AudioMetadata, StyleContext};
