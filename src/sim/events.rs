//! Gameplay events emitted by a tick
//!
//! Events are informational: the driver logs them and a renderer may use them
//! for effects. The simulation never reads them back.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// Difficulty stepped up
    LevelUp { level: u32 },
    /// A spawn batch entered the arena
    EnemiesSpawned { count: u32, elites: u32 },
    /// The pulse was triggered from a full meter
    PulseActivated,
    /// The pulse swept enemies away this tick
    EnemiesCleared { count: u32 },
    /// The pulse reached its cutoff radius
    PulseFaded,
    /// The player was caught
    GameOver { survival_secs: u64 },
    /// A new run began
    Restarted,
}
