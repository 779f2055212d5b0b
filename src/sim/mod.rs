//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the tick delta
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod events;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{contact_distance, first_contact, sweep_pulse, touches_player};
pub use difficulty::{Difficulty, DifficultyCurve};
pub use events::GameEvent;
pub use snapshot::{EnemyView, Snapshot};
pub use spawn::{Edge, spawn_enemy};
pub use state::{Enemy, GameState, Meter, Player, Pulse, RunPhase};
pub use tick::{TickInput, tick};
