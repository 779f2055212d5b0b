//! Difficulty curve
//!
//! Level is a step function of elapsed run time; every other knob is a pure
//! function of level.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::TuningError;

/// Parameters of the level → pressure mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    pub level_duration_ms: u64,
    pub base_spawn_interval_ms: u32,
    pub spawn_interval_step_ms: u32,
    pub min_spawn_interval_ms: u32,
    pub base_enemy_speed: f32,
    pub enemy_speed_step: f32,
    pub base_elite_chance: f32,
    pub elite_chance_step: f32,
    pub max_elite_chance: f32,
    pub max_spawn_batch: u32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            level_duration_ms: LEVEL_DURATION_MS,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            base_enemy_speed: BASE_ENEMY_SPEED,
            enemy_speed_step: ENEMY_SPEED_STEP,
            base_elite_chance: BASE_ELITE_CHANCE,
            elite_chance_step: ELITE_CHANCE_STEP,
            max_elite_chance: MAX_ELITE_CHANCE,
            max_spawn_batch: MAX_SPAWN_BATCH,
        }
    }
}

/// Everything the spawner and movement need for the current level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub level: u32,
    pub spawn_interval_ms: u32,
    pub enemy_speed: f32,
    pub elite_chance: f32,
    pub batch_size: u32,
}

impl DifficultyCurve {
    /// `floor(elapsed / level_duration) + 1`, saturating at `u32::MAX`
    pub fn level(&self, elapsed_ms: u64) -> u32 {
        let steps = elapsed_ms / self.level_duration_ms.max(1);
        u32::try_from(steps).unwrap_or(u32::MAX).saturating_add(1)
    }

    pub fn spawn_interval_ms(&self, level: u32) -> u32 {
        let reduction = level
            .saturating_sub(1)
            .saturating_mul(self.spawn_interval_step_ms);
        self.base_spawn_interval_ms
            .saturating_sub(reduction)
            .max(self.min_spawn_interval_ms)
    }

    /// Units per nominal frame
    pub fn enemy_speed(&self, level: u32) -> f32 {
        self.base_enemy_speed + level.saturating_sub(1) as f32 * self.enemy_speed_step
    }

    pub fn elite_chance(&self, level: u32) -> f32 {
        let chance = self.base_elite_chance + level.saturating_sub(1) as f32 * self.elite_chance_step;
        chance.clamp(0.0, self.max_elite_chance)
    }

    /// Enemies spawned per batch
    pub fn batch_size(&self, level: u32) -> u32 {
        level.min(self.max_spawn_batch)
    }

    pub fn at(&self, elapsed_ms: u64) -> Difficulty {
        let level = self.level(elapsed_ms);
        Difficulty {
            level,
            spawn_interval_ms: self.spawn_interval_ms(level),
            enemy_speed: self.enemy_speed(level),
            elite_chance: self.elite_chance(level),
            batch_size: self.batch_size(level),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if self.level_duration_ms == 0 {
            return invalid("difficulty.level_duration_ms", "must be positive");
        }
        if self.min_spawn_interval_ms == 0 {
            return invalid("difficulty.min_spawn_interval_ms", "must be positive");
        }
        if !(0.0..=1.0).contains(&self.max_elite_chance) {
            return invalid("difficulty.max_elite_chance", "must be in [0, 1]");
        }
        if self.enemy_speed_step < 0.0 || self.elite_chance_step < 0.0 {
            return invalid("difficulty", "per-level steps must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_levels() {
        let curve = DifficultyCurve::default();
        let start = curve.at(0);
        assert_eq!(start.level, 1);
        assert_eq!(start.spawn_interval_ms, 2000);
        assert_eq!(start.batch_size, 1);
        assert!((start.enemy_speed - 1.5).abs() < 1e-6);
        assert!((start.elite_chance - 0.10).abs() < 1e-6);

        assert_eq!(curve.level(29_999), 1);
        let second = curve.at(30_000);
        assert_eq!(second.level, 2);
        assert_eq!(second.spawn_interval_ms, 1750);
        assert_eq!(second.batch_size, 2);
        assert!((second.enemy_speed - 1.8).abs() < 1e-6);
        assert!((second.elite_chance - 0.12).abs() < 1e-6);
    }

    #[test]
    fn late_game_clamps() {
        let curve = DifficultyCurve::default();
        // Level 9: 2000 - 8*250 = 0 -> floor of 200
        assert_eq!(curve.spawn_interval_ms(9), 200);
        assert_eq!(curve.spawn_interval_ms(u32::MAX), 200);
        assert_eq!(curve.batch_size(40), 5);
        assert!((curve.elite_chance(11) - 0.3).abs() < 1e-6);
        assert!((curve.elite_chance(500) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn level_saturates_on_huge_elapsed() {
        let curve = DifficultyCurve {
            level_duration_ms: 1,
            ..Default::default()
        };
        assert_eq!(curve.level(u64::MAX), u32::MAX);
    }
}
