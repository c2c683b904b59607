//! Timing constants and thresholds.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};

/// Tunable behavior of the coordinator and its panels.
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Window for the triple click, measured from the latest click
    pub gesture_window_ms: u64,
    /// How long the logo keeps its unlock highlight
    pub unlock_feedback_ms: u64,
    /// Reveal delay of the first card
    pub stagger_base_ms: u64,
    /// Added per card position
    pub stagger_step_ms: u64,
    /// No card waits longer than this
    pub stagger_cap_ms: u64,
    /// Reveal animation length; the will-change hint is dropped after it
    pub reveal_duration_ms: u64,
    /// Fewer books than this for a mood is logged as under-supply
    pub min_recommendations: usize,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            gesture_window_ms: 2000,
            unlock_feedback_ms: 1000,
            stagger_base_ms: 50,
            stagger_step_ms: 50,
            stagger_cap_ms: 150,
            reveal_duration_ms: 500,
            min_recommendations: 3,
        }
    }
}

impl MoodConfig {
    /// Load from a JSON file and validate.
    pub fn load(path: impl AsRef<Path>) -> MoodResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MoodResult<()> {
        if self.gesture_window_ms == 0 {
            return Err(MoodError::InvalidConfig(
                "gesture_window_ms must be greater than zero".to_string(),
            ));
        }
        if self.stagger_cap_ms < self.stagger_base_ms {
            return Err(MoodError::InvalidConfig(format!(
                "stagger_cap_ms ({}) is below stagger_base_ms ({})",
                self.stagger_cap_ms, self.stagger_base_ms
            )));
        }
        Ok(())
    }

    pub fn gesture_window(&self) -> Duration {
        Duration::from_millis(self.gesture_window_ms)
    }

    pub fn unlock_feedback(&self) -> Duration {
        Duration::from_millis(self.unlock_feedback_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    /// Reveal delay for the card at `index`.
    ///
    /// Non-decreasing in `index` and never above `stagger_cap_ms`.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        let step = self
            .stagger_step_ms
            .saturating_mul(u64::try_from(index).unwrap_or(u64::MAX));
        let ms = self
            .stagger_base_ms
            .saturating_add(step)
            .min(self.stagger_cap_ms);
        Duration::from_millis(ms)
    }
}
