//! Structured campaign logging.
//!
//! Consistent tracing fields (campaign id, operation) for lifecycle
//! events across analysis, storyboarding, and production.

use tracing::{error, info, warn, Span};

use reel_models::CampaignId;

/// Logger bound to one campaign and one operation.
#[derive(Debug, Clone)]
pub struct CampaignLogger {
    campaign_id: String,
    operation: String,
}

impl CampaignLogger {
    /// Create a logger for a specific campaign and operation
    /// (e.g. "analysis", "keyframe_generation", "production").
    pub fn new(campaign_id: &CampaignId, operation: &str) -> Self {
        Self {
            campaign_id: campaign_id.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn start(&self, message: &str) {
        info!(
            campaign_id = %self.campaign_id,
            operation = %self.operation,
            "started: {}", message
        );
    }

    pub fn progress(&self, message: &str) {
        info!(
            campaign_id = %self.campaign_id,
            operation = %self.operation,
            "progress: {}", message
        );
    }

    pub fn warning(&self, message: &str) {
        warn!(
            campaign_id = %self.campaign_id,
            operation = %self.operation,
            "warning: {}", message
        );
    }

    pub fn failure(&self, message: &str) {
        error!(
            campaign_id = %self.campaign_id,
            operation = %self.operation,
            "failed: {}", message
        );
    }

    pub fn completion(&self, message: &str) {
        info!(
            campaign_id = %self.campaign_id,
            operation = %self.operation,
            "completed: {}", message
        );
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Tracing span carrying the campaign context.
    pub fn span(&self) -> Span {
        tracing::info_span!(
            "campaign",
            campaign_id = %self.campaign_id,
            operation = %self.operation
        )
    }
}
