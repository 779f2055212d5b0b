//! Game balance and configuration
//!
//! Every number the simulation reads comes from here. Defaults reproduce the
//! arcade feel; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::DifficultyCurve;

/// How per-frame constants (follow blend, enemy speed, pulse growth) relate to time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Apply each constant once per tick, whatever the delta (arcade feel at 60 Hz)
    #[default]
    PerFrame,
    /// Scale each constant by `delta / NOMINAL_FRAME_MS` so feel is frame-rate independent
    TimeScaled,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::PerFrame => "per_frame",
            Pacing::TimeScaled => "time_scaled",
        }
    }

    /// Number of nominal frames a tick of `delta_ms` stands for
    pub fn frames(&self, delta_ms: u32) -> f32 {
        match self {
            Pacing::PerFrame => 1.0,
            Pacing::TimeScaled => delta_ms as f32 / NOMINAL_FRAME_MS,
        }
    }
}

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Complete balance sheet for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_visual_radius: f32,
    /// Fraction of remaining distance to the pointer covered per frame (0, 1]
    pub follow_blend: f32,
    pub light_radius: f32,

    // === Enemies ===
    pub enemy_extent: f32,

    // === Blastometer ===
    pub meter_max: f32,
    pub meter_fill_ms: u32,

    // === Pulse ===
    pub pulse_start_radius: f32,
    pub pulse_growth: f32,
    pub pulse_max_radius: f32,

    // === Timing ===
    pub max_delta_ms: u32,
    pub pacing: Pacing,

    pub difficulty: DifficultyCurve,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_visual_radius: PLAYER_VISUAL_RADIUS,
            follow_blend: FOLLOW_BLEND,
            light_radius: LIGHT_RADIUS,

            enemy_extent: ENEMY_EXTENT,

            meter_max: METER_MAX,
            meter_fill_ms: METER_FILL_MS,

            pulse_start_radius: PULSE_START_RADIUS,
            pulse_growth: PULSE_GROWTH,
            pulse_max_radius: PULSE_MAX_RADIUS,

            max_delta_ms: MAX_DELTA_MS,
            pacing: Pacing::PerFrame,

            difficulty: DifficultyCurve::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document (missing fields keep defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values that would break the simulation's bounds
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), TuningError> {
            Err(TuningError::Invalid { field, reason })
        }

        if !(self.viewport_width > 0.0) {
            return invalid("viewport_width", "must be positive");
        }
        if !(self.viewport_height > 0.0) {
            return invalid("viewport_height", "must be positive");
        }
        if !(self.player_radius >= 0.0) {
            return invalid("player_radius", "must not be negative");
        }
        if !(self.enemy_extent >= 0.0) {
            return invalid("enemy_extent", "must not be negative");
        }
        if !(self.follow_blend > 0.0 && self.follow_blend <= 1.0) {
            return invalid("follow_blend", "must be in (0, 1]");
        }
        if !(self.meter_max > 0.0) {
            return invalid("meter_max", "must be positive");
        }
        if self.meter_fill_ms == 0 {
            return invalid("meter_fill_ms", "must be positive");
        }
        if !(self.pulse_growth > 0.0) {
            return invalid("pulse_growth", "must be positive");
        }
        if !(self.pulse_max_radius > self.pulse_start_radius) {
            return invalid("pulse_max_radius", "must exceed pulse_start_radius");
        }
        if self.max_delta_ms == 0 {
            return invalid("max_delta_ms", "must be positive");
        }
        self.difficulty.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "meter_fill_ms": 5000, "pacing": "time_scaled" }"#)
            .unwrap();
        assert_eq!(tuning.meter_fill_ms, 5000);
        assert_eq!(tuning.pacing, Pacing::TimeScaled);
        assert_eq!(tuning.viewport_width, VIEWPORT_WIDTH);
        assert_eq!(tuning.difficulty, DifficultyCurve::default());
    }

    #[test]
    fn rejects_bad_blend() {
        let err = Tuning::from_json(r#"{ "follow_blend": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "follow_blend",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn pacing_frames() {
        assert_eq!(Pacing::PerFrame.frames(100), 1.0);
        let frames = Pacing::TimeScaled.frames(33);
        assert!((frames - 33.0 / NOMINAL_FRAME_MS).abs() < 1e-6);
        assert_eq!(Pacing::TimeScaled.as_str(), "time_scaled");
    }
}
