//! Game state and core simulation types
//!
//! All state for a session lives in `GameState`; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::events::GameEvent;
use crate::tuning::Tuning;
use crate::viewport_center;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    /// Horde is moving, meter is charging
    #[default]
    Active,
    /// Player was caught; only a restart request is honoured
    GameOver,
}

/// The player-controlled survivor
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub visual_radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.player_radius,
            visual_radius: tuning.player_visual_radius,
        }
    }

    /// Exponential follow: cover `blend` of the remaining distance to `target`
    pub fn follow(&mut self, target: Vec2, blend: f32) {
        self.pos += (target - self.pos) * blend;
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Elite enemies only differ in appearance
    pub elite: bool,
}

/// Blastometer: charges with real time, gates the pulse.
///
/// Charge is tracked in whole milliseconds so it never drifts; the visible
/// value is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    charged_ms: u32,
    fill_ms: u32,
}

impl Meter {
    pub fn new(fill_ms: u32) -> Self {
        Self {
            charged_ms: 0,
            fill_ms: fill_ms.max(1),
        }
    }

    /// Accumulate charge, clamped at full
    pub fn charge(&mut self, delta_ms: u32) {
        self.charged_ms = self.charged_ms.saturating_add(delta_ms).min(self.fill_ms);
    }

    pub fn drain(&mut self) {
        self.charged_ms = 0;
    }

    pub fn is_full(&self) -> bool {
        self.charged_ms >= self.fill_ms
    }

    /// Fill fraction in [0, 1]
    pub fn fraction(&self) -> f32 {
        self.charged_ms as f32 / self.fill_ms as f32
    }

    /// Meter value in [0, max]
    pub fn value(&self, max: f32) -> f32 {
        if self.is_full() {
            max
        } else {
            self.fraction() * max
        }
    }

    pub(crate) fn charged_ms(&self) -> u32 {
        self.charged_ms
    }
}

/// Expanding area-clear ring centered on the player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pulse {
    pub active: bool,
    pub radius: f32,
    /// Run time (ms) the pulse was triggered at
    pub started_at_ms: u64,
}

impl Pulse {
    pub fn fire(&mut self, start_radius: f32, now_ms: u64) {
        self.active = true;
        self.radius = start_radius;
        self.started_at_ms = now_ms;
    }

    pub fn fade(&mut self) {
        self.active = false;
        self.radius = 0.0;
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: RunPhase,
    /// Run time since the last (re)start
    pub elapsed_ms: u64,
    /// Time since the last spawn batch
    pub spawn_timer_ms: u64,
    /// Current difficulty level (1-based)
    pub level: u32,
    /// Survival time captured when the last run ended
    pub last_survival_ms: Option<u64>,
    pub runs_started: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub meter: Meter,
    pub pulse: Pulse,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let center = viewport_center(tuning.viewport_width, tuning.viewport_height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(center, &tuning),
            meter: Meter::new(tuning.meter_fill_ms),
            tuning,
            phase: RunPhase::Active,
            elapsed_ms: 0,
            spawn_timer_ms: 0,
            level: 1,
            last_survival_ms: None,
            runs_started: 1,
            enemies: Vec::new(),
            pulse: Pulse::default(),
            events: Vec::new(),
        }
    }

    /// Reset everything run-scoped; the RNG stream and last survival time carry over
    pub fn restart(&mut self) {
        self.player.pos = self.center();
        self.enemies.clear();
        self.elapsed_ms = 0;
        self.spawn_timer_ms = 0;
        self.level = 1;
        self.phase = RunPhase::Active;
        self.pulse = Pulse::default();
        self.meter.drain();
        self.runs_started += 1;
    }

    pub fn center(&self) -> Vec2 {
        viewport_center(self.tuning.viewport_width, self.tuning.viewport_height)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    /// Whole seconds survived so far in this run
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn meter_value(&self) -> f32 {
        self.meter.value(self.tuning.meter_max)
    }
}
