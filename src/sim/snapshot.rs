//! Read-only view of the state handed to the renderer after each tick

use glam::Vec2;
use serde::Serialize;

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub elite: bool,
    pub extent: f32,
}

/// Everything needed to draw one frame and its HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player_pos: Vec2,
    pub player_radius: f32,
    pub light_radius: f32,
    pub enemies: Vec<EnemyView>,
    /// Blastometer fill in [0, 1]
    pub meter_fraction: f32,
    pub pulse_active: bool,
    pub pulse_radius: f32,
    pub level: u32,
    pub elapsed_secs: u64,
    pub game_over: bool,
    pub last_survival_secs: Option<u64>,
    pub viewport: Vec2,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let extent = state.tuning.enemy_extent;
        Self {
            player_pos: state.player.pos,
            player_radius: state.player.visual_radius,
            light_radius: state.tuning.light_radius,
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    elite: e.elite,
                    extent,
                })
                .collect(),
            meter_fraction: state.meter.fraction(),
            pulse_active: state.pulse.active,
            pulse_radius: state.pulse.radius,
            level: state.level,
            elapsed_secs: state.elapsed_secs(),
            game_over: state.is_game_over(),
            last_survival_secs: state.last_survival_ms.map(|ms| ms / 1000),
            viewport: Vec2::new(state.tuning.viewport_width, state.tuning.viewport_height),
        }
    }

    /// Pulse radius, only while the ring is on screen
    pub fn pulse_ring(&self) -> Option<f32> {
        self.pulse_active.then_some(self.pulse_radius)
    }

    pub fn elite_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.elite).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Enemy;
    use crate::tuning::Tuning;

    #[test]
    fn capture_mirrors_state() {
        let mut state = GameState::new(5, Tuning::default());
        state.enemies.push(Enemy {
            pos: Vec2::new(1.0, 2.0),
            elite: true,
        });
        state.elapsed_ms = 12_345;
        state.meter.charge(12_500);

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.elite_count(), 1);
        assert_eq!(snap.enemies[0].extent, 30.0);
        assert_eq!(snap.elapsed_secs, 12);
        assert!((snap.meter_fraction - 0.5).abs() < 1e-6);
        assert_eq!(snap.pulse_ring(), None);
        assert!(!snap.game_over);
        assert_eq!(snap.viewport, Vec2::new(1000.0, 700.0));
    }
}
