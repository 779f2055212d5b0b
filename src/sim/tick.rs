//! Per-frame simulation tick
//!
//! Core game loop step that advances the run by one frame.

use glam::Vec2;

use super::collision::{first_contact, sweep_pulse};
use super::events::GameEvent;
use super::spawn::spawn_enemy;
use super::state::{GameState, RunPhase};
use crate::step_toward;
use crate::tuning::Pacing;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Point the player drifts toward (pointer position); `None` holds still
    pub target: Option<Vec2>,
    /// Trigger the pulse (only fires from a full meter)
    pub activate: bool,
    /// Start a new run (only honoured after game over)
    pub restart: bool,
    /// Stop the frame loop; the simulation itself ignores this
    pub quit: bool,
}

/// Effective follow blend for a tick covering `frames` nominal frames
fn follow_blend(pacing: Pacing, blend: f32, frames: f32) -> f32 {
    match pacing {
        Pacing::PerFrame => blend,
        // Same decay as applying `blend` once per nominal frame
        Pacing::TimeScaled => 1.0 - (1.0 - blend).powf(frames),
    }
}

/// Advance the game state by one frame of `delta_ms` wall time
pub fn tick(state: &mut GameState, input: &TickInput, delta_ms: u32) {
    state.events.clear();
    let delta_ms = delta_ms.min(state.tuning.max_delta_ms);

    if state.phase == RunPhase::GameOver {
        if input.restart {
            state.restart();
            state.events.push(GameEvent::Restarted);
            log::info!("Run {} started (seed {})", state.runs_started, state.seed);
        }
        return;
    }

    let frames = state.tuning.pacing.frames(delta_ms);
    state.elapsed_ms = state.elapsed_ms.saturating_add(delta_ms as u64);
    state.spawn_timer_ms = state.spawn_timer_ms.saturating_add(delta_ms as u64);

    // Player drifts toward the pointer
    if let Some(target) = input.target {
        let blend = follow_blend(state.tuning.pacing, state.tuning.follow_blend, frames);
        state.player.follow(target, blend);
    }

    let difficulty = state.tuning.difficulty.at(state.elapsed_ms);
    if difficulty.level > state.level {
        state.level = difficulty.level;
        state.events.push(GameEvent::LevelUp {
            level: difficulty.level,
        });
        log::info!(
            "Level {}: spawn every {}ms, speed {:.1}, elite {:.0}%",
            difficulty.level,
            difficulty.spawn_interval_ms,
            difficulty.enemy_speed,
            difficulty.elite_chance * 100.0
        );
    }

    // Spawn a batch once the interval has been exceeded
    if state.spawn_timer_ms > difficulty.spawn_interval_ms as u64 {
        let width = state.tuning.viewport_width;
        let height = state.tuning.viewport_height;
        let offset = state.tuning.enemy_extent;
        let mut elites = 0;
        for _ in 0..difficulty.batch_size {
            let enemy = spawn_enemy(&mut state.rng, width, height, offset, difficulty.elite_chance);
            elites += enemy.elite as u32;
            state.enemies.push(enemy);
        }
        state.spawn_timer_ms = 0;
        state.events.push(GameEvent::EnemiesSpawned {
            count: difficulty.batch_size,
            elites,
        });
        log::debug!(
            "Spawned {} enemies ({} elite), {} alive",
            difficulty.batch_size,
            elites,
            state.enemies.len()
        );
    }

    // Horde closes in
    let player_pos = state.player.pos;
    let step = difficulty.enemy_speed * frames;
    for enemy in &mut state.enemies {
        enemy.pos = step_toward(enemy.pos, player_pos, step);
    }

    if first_contact(
        player_pos,
        &state.enemies,
        state.player.radius,
        state.tuning.enemy_extent,
    )
    .is_some()
    {
        state.phase = RunPhase::GameOver;
        state.last_survival_ms = Some(state.elapsed_ms);
        let survival_secs = state.elapsed_secs();
        state.events.push(GameEvent::GameOver { survival_secs });
        log::info!(
            "Game over: survived {}s, reached level {}",
            survival_secs,
            state.level
        );
        return;
    }

    if !state.meter.is_full() {
        state.meter.charge(delta_ms);
    }

    if input.activate && state.meter.is_full() && !state.pulse.active {
        state
            .pulse
            .fire(state.tuning.pulse_start_radius, state.elapsed_ms);
        state.meter.drain();
        state.events.push(GameEvent::PulseActivated);
        log::info!("Pulse fired with {} enemies on screen", state.enemies.len());
    }

    if state.pulse.active {
        state.pulse.radius += state.tuning.pulse_growth * frames;

        let cleared = sweep_pulse(&mut state.enemies, player_pos, state.pulse.radius);
        if cleared > 0 {
            state.events.push(GameEvent::EnemiesCleared {
                count: cleared as u32,
            });
            log::debug!("Pulse r={:.0} cleared {} enemies", state.pulse.radius, cleared);
        }

        if state.pulse.radius >= state.tuning.pulse_max_radius {
            state.pulse.fade();
            state.events.push(GameEvent::PulseFaded);
        }
    }
}
