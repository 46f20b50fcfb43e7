//! Campaign orchestration engine.
//!
//! Drives one campaign from submission through audio analysis,
//! storyboarding, keyframe synthesis, human review, and clip production.
//! The engine is an actor: [`CampaignEngine::spawn`] starts the loop and
//! returns an [`EngineHandle`] for commands and event subscriptions.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod handle;
pub mod logging;
pub mod storyboard;

mod command;
mod dispatcher;

pub use config::EngineConfig;
pub use engine::{CampaignEngine, Providers};
pub use error::{EngineError, EngineResult};
pub use events::{EngineEvent, EngineSnapshot};
pub use handle::EngineHandle;
