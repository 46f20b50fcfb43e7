//! Style context and audio metadata derived during campaign analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shared visual profile applied to every scene's prompts.
///
/// Derived once from the uploaded reference images; immutable afterward.
/// Regenerating the style requires a new campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleContext {
    /// Ordered list of color values (e.g. hex strings).
    pub palette: Vec<String>,
    /// Lighting descriptor (e.g. "cinematic, high contrast").
    pub lighting: String,
    /// Mood descriptor (e.g. "cyberpunk, elegant, rhythmic").
    pub mood: String,
    /// Free-form hints appended to prompts.
    pub hints: String,
}

impl StyleContext {
    /// Render the style as a prompt fragment shared by all keyframes.
    pub fn prompt_fragment(&self) -> String {
        let mut fragment = format!("{} mood, {} lighting", self.mood, self.lighting);
        if !self.palette.is_empty() {
            fragment.push_str(&format!(", palette {}", self.palette.join(" ")));
        }
        if !self.hints.is_empty() {
            fragment.push_str(". ");
            fragment.push_str(&self.hints);
        }
        fragment
    }
}

/// Audio features extracted from the uploaded track.
///
/// Set once after successful audio analysis; immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioMetadata {
    /// Total track duration in seconds.
    pub duration_seconds: f64,
    /// Estimated tempo.
    pub beats_per_minute: f64,
    /// Timestamps (seconds) of detected beats, ascending.
    pub beat_timestamps: Vec<f64>,
}

impl AudioMetadata {
    /// Count the beats falling inside `[start, start + duration)`.
    pub fn beats_in_window(&self, start: f64, duration: f64) -> usize {
        self.beat_timestamps
            .iter()
            .filter(|t| **t >= start && **t < start + duration)
            .count()
    }
}
