//! Zombie Survival - an arcade horde-evasion game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, blastometer)
//! - `platform`: Clock/input/renderer collaborators and the frame loop
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Pacing, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the per-frame constants were tuned at
    pub const TARGET_FPS: u32 = 60;
    /// Duration of one nominal frame in milliseconds
    pub const NOMINAL_FRAME_MS: f32 = 1000.0 / TARGET_FPS as f32;
    /// Largest delta a single tick will accept (long pauses are clamped to this)
    pub const MAX_DELTA_MS: u32 = 100;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1000.0;
    pub const VIEWPORT_HEIGHT: f32 = 700.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_VISUAL_RADIUS: f32 = 30.0;
    /// Fraction of the remaining distance to the pointer covered each frame
    pub const FOLLOW_BLEND: f32 = 0.1;
    /// Radius of the lit area drawn around the player
    pub const LIGHT_RADIUS: f32 = 150.0;

    /// Enemy square size; also the extent used for collision and spawn offset
    pub const ENEMY_EXTENT: f32 = 30.0;

    /// Blastometer
    pub const METER_MAX: f32 = 100.0;
    pub const METER_FILL_MS: u32 = 25_000;

    /// Pulse (area clear)
    pub const PULSE_START_RADIUS: f32 = 50.0;
    pub const PULSE_GROWTH: f32 = 15.0;
    pub const PULSE_MAX_RADIUS: f32 = 400.0;

    /// Difficulty curve
    pub const LEVEL_DURATION_MS: u64 = 30_000;
    pub const BASE_SPAWN_INTERVAL_MS: u32 = 2000;
    pub const SPAWN_INTERVAL_STEP_MS: u32 = 250;
    pub const MIN_SPAWN_INTERVAL_MS: u32 = 200;
    pub const BASE_ENEMY_SPEED: f32 = 1.5;
    pub const ENEMY_SPEED_STEP: f32 = 0.3;
    pub const BASE_ELITE_CHANCE: f32 = 0.1;
    pub const ELITE_CHANCE_STEP: f32 = 0.02;
    pub const MAX_ELITE_CHANCE: f32 = 0.3;
    pub const MAX_SPAWN_BATCH: u32 = 5;
}

/// Center of a viewport of the given size
#[inline]
pub fn viewport_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}

/// Move `from` toward `to` by `speed` units.
///
/// Coincident points have no direction, so the point stays put.
#[inline]
pub fn step_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance == 0.0 {
        return from;
    }
    from + delta / distance * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_toward_moves_fixed_distance() {
        let next = step_toward(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.5);
        assert!((next - Vec2::new(1.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn step_toward_coincident_points_stay() {
        let p = Vec2::new(3.0, 4.0);
        assert_eq!(step_toward(p, p, 2.0), p);
    }

    #[test]
    fn center_of_default_viewport() {
        let c = viewport_center(consts::VIEWPORT_WIDTH, consts::VIEWPORT_HEIGHT);
        assert_eq!(c, Vec2::new(500.0, 350.0));
    }
}
