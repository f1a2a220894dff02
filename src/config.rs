//! Tween Settings
//!
//! Runtime configuration for the task scheduler and the entry points.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use myth_tween::config::TweenSettings;
//!
//! // Default: 60 ticks per second, 1 ms duration floor
//! let settings = TweenSettings::default();
//!
//! // Tick once per frame with the frame delta
//! let settings = TweenSettings {
//!     tick_rate: None,
//!     ..Default::default()
//! };
//!
//! // From a JSON file; missing fields keep their defaults
//! let settings = TweenSettings::load("tween.json")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::duration::{DURATION_TOLERANCE, DurationPolicy, MIN_DURATION, TimingMode};
use crate::animation::easing::EasingKind;
use crate::errors::{Result, TweenError};

/// Default tick cadence of the scheduler.
pub const DEFAULT_TICK_RATE: f32 = 60.0;

// ---------------------------------------------------------------------------
// TaskDefaults
// ---------------------------------------------------------------------------

/// Argument defaults applied to requests that do not set them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDefaults {
    pub time: f32,
    pub timing_mode: TimingMode,
    pub easing: EasingKind,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            time: 1.0,
            timing_mode: TimingMode::Duration,
            easing: EasingKind::Linear,
        }
    }
}

// ---------------------------------------------------------------------------
// TweenSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSettings {
    /// Ticks per second delivered to each task.
    ///
    /// `None` ticks every task once per [`update`] with the raw frame delta.
    ///
    /// [`update`]: crate::animation::TaskScheduler::update
    pub tick_rate: Option<f32>,

    /// Maximum fixed ticks run by a single update. Time beyond that is
    /// folded into the last tick.
    pub max_ticks_per_update: u32,

    /// Shortest task duration in seconds. Must be at least [`MIN_DURATION`].
    pub min_duration: f32,

    /// Distances and rates at or below this are treated as zero.
    pub tolerance: f32,

    pub defaults: TaskDefaults,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            tick_rate: Some(DEFAULT_TICK_RATE),
            max_ticks_per_update: 16,
            min_duration: MIN_DURATION,
            tolerance: DURATION_TOLERANCE,
            defaults: TaskDefaults::default(),
        }
    }
}

impl TweenSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::debug!("Loaded tween settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(rate) = self.tick_rate
            && !(rate.is_finite() && rate > 0.0)
        {
            return Err(TweenError::InvalidSettings(format!(
                "tick_rate must be positive and finite, got {rate}"
            )));
        }
        if self.max_ticks_per_update == 0 {
            return Err(TweenError::InvalidSettings(
                "max_ticks_per_update must be at least 1".to_string(),
            ));
        }
        if !(self.min_duration.is_finite() && self.min_duration >= MIN_DURATION) {
            return Err(TweenError::InvalidSettings(format!(
                "min_duration must be at least {MIN_DURATION}, got {}",
                self.min_duration
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(TweenError::InvalidSettings(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if !self.defaults.time.is_finite() {
            return Err(TweenError::InvalidSettings(
                "defaults.time must be finite".to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn duration_policy(&self) -> DurationPolicy {
        DurationPolicy {
            min_duration: self.min_duration,
            tolerance: self.tolerance,
        }
    }

    /// Seconds between fixed ticks, if ticking at a fixed rate.
    #[must_use]
    pub fn tick_interval(&self) -> Option<f32> {
        self.tick_rate.map(|rate| 1.0 / rate)
    }
}
