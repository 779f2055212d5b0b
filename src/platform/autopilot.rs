//! Demo input source that plays the game by itself
//!
//! Steers the pointer away from nearby enemies (weighted by proximity), drifts
//! back toward the middle when the coast is clear, and fires the pulse when the
//! meter is full and the horde is close.

use glam::Vec2;

use super::InputSource;
use crate::sim::{Snapshot, TickInput};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Enemies farther than this are ignored when steering
    pub awareness: f32,
    /// How far ahead of the player the pointer is placed
    pub lookahead: f32,
    /// Pointer keeps this far from the viewport border
    pub margin: f32,
    /// Fire once this many enemies are inside `crowd_radius`
    pub crowd_size: usize,
    pub crowd_radius: f32,
    /// Fire regardless of crowd size if anything is this close
    pub panic_radius: f32,
    /// Runs to play before asking to quit
    runs_remaining: u32,
}

impl Autopilot {
    pub fn new(runs: u32) -> Self {
        Self {
            awareness: 250.0,
            lookahead: 120.0,
            margin: 60.0,
            crowd_size: 4,
            crowd_radius: 180.0,
            panic_radius: 70.0,
            runs_remaining: runs.max(1),
        }
    }

    /// Pointer target for the current snapshot
    pub fn steer(&self, snapshot: &Snapshot) -> Vec2 {
        let player = snapshot.player_pos;
        let center = snapshot.viewport / 2.0;

        let mut flee = Vec2::ZERO;
        for enemy in &snapshot.enemies {
            let away = player - enemy.pos;
            let dist = away.length();
            if dist > 0.0 && dist < self.awareness {
                // Closer enemies push harder
                flee += away / dist * (1.0 - dist / self.awareness);
            }
        }

        let desired = if flee == Vec2::ZERO {
            center
        } else {
            // Bias toward the middle so the player isn't pinned against a wall
            let home = (center - player) / center.length().max(1.0);
            player + (flee.normalize() + home).normalize_or_zero() * self.lookahead
        };

        let min = Vec2::splat(self.margin);
        let max = (snapshot.viewport - min).max(min);
        desired.clamp(min, max)
    }

    /// Whether the pulse is worth firing now
    pub fn should_fire(&self, snapshot: &Snapshot) -> bool {
        if snapshot.meter_fraction < 1.0 || snapshot.pulse_active {
            return false;
        }
        let player = snapshot.player_pos;
        let mut crowd = 0;
        for enemy in &snapshot.enemies {
            let dist = player.distance(enemy.pos);
            if dist < self.panic_radius {
                return true;
            }
            if dist < self.crowd_radius {
                crowd += 1;
            }
        }
        crowd >= self.crowd_size
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(1)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot) -> TickInput {
        if snapshot.game_over {
            if self.runs_remaining > 1 {
                self.runs_remaining -= 1;
                return TickInput {
                    restart: true,
                    ..Default::default()
                };
            }
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        TickInput {
            target: Some(self.steer(snapshot)),
            activate: self.should_fire(snapshot),
            ..Default::default()
        }
    }
}
