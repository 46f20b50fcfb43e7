//! Engine configuration.

use std::time::Duration;

/// Campaign engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Scene window size in seconds
    pub window_seconds: f64,
    /// Automatic retries per keyframe slot after the initial attempt
    pub synth_max_retries: u32,
    /// Base backoff delay between synthesis attempts (doubles each time)
    pub synth_base_delay: Duration,
    /// Backoff ceiling
    pub synth_max_delay: Duration,
    /// Deadline for audio analysis, style derivation, and keyframe calls
    pub provider_timeout: Duration,
    /// Deadline for a single clip render
    pub render_timeout: Duration,
    /// Maximum keyframe synthesis calls in flight
    pub max_synth_parallel: usize,
    /// Maximum render jobs in flight
    pub max_render_parallel: usize,
    /// Command channel depth
    pub command_buffer: usize,
    /// Broadcast event channel depth
    pub event_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_seconds: 8.0,
            synth_max_retries: 2,
            synth_base_delay: Duration::from_millis(500),
            synth_max_delay: Duration::from_secs(10),
            provider_timeout: Duration::from_secs(120),
            render_timeout: Duration::from_secs(600),
            max_synth_parallel: 8,
            max_render_parallel: 4,
            command_buffer: 64,
            event_buffer: 256,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            window_seconds: std::env::var("REEL_WINDOW_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8.0),
            synth_max_retries: std::env::var("REEL_SYNTH_MAX_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
            synth_base_delay: Duration::from_millis(
                std::env::var("REEL_SYNTH_BASE_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
            ),
            synth_max_delay: Duration::from_secs(
                std::env::var("REEL_SYNTH_MAX_DELAY_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            provider_timeout: Duration::from_secs(
                std::env::var("REEL_PROVIDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
            render_timeout: Duration::from_secs(
                std::env::var("REEL_RENDER_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(600),
            ),
            max_synth_parallel: std::env::var("REEL_MAX_SYNTH_PARALLEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8),
            max_render_parallel: std::env::var("REEL_MAX_RENDER_PARALLEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),
            command_buffer: 64,
            event_buffer: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_matches_reference_behavior() {
        let config = EngineConfig::default();
        assert_eq!(config.window_seconds, 8.0);
        assert_eq!(config.synth_max_retries, 2);
        assert!(config.max_render_parallel > 0);
    }
}
