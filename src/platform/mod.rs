//! Platform abstraction layer
//!
//! The simulation is driven by three collaborators:
//! - `Clock`: paces frames and supplies monotonic time
//! - `InputSource`: pointer target and momentary action flags
//! - `Renderer`: consumes a read-only snapshot after every tick
//!
//! `FrameLoop` wires them to `sim::tick`, one tick per frame.

pub mod autopilot;
pub mod clock;
pub mod log_renderer;

pub use autopilot::Autopilot;
pub use clock::{FpsClock, SteppedClock, SystemClock};
pub use log_renderer::LogRenderer;

use serde::Serialize;

use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

/// Frame pacing and monotonic time
pub trait Clock {
    /// Current monotonic time in milliseconds
    fn now_ms(&self) -> u64;

    /// Wait until the next frame is due; returns the time it started at
    fn next_frame(&mut self) -> u64;
}

/// Supplies input for the upcoming tick
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot) -> TickInput;
}

impl<F> InputSource for F
where
    F: FnMut(&Snapshot) -> TickInput,
{
    fn poll(&mut self, snapshot: &Snapshot) -> TickInput {
        self(snapshot)
    }
}

/// Consumes the state after each tick
pub trait Renderer {
    fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]);
}

/// Aggregate statistics for a session of one or more runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub frames: u64,
    /// Survival time of every finished run, in order
    pub survival_secs: Vec<u64>,
    pub best_survival_secs: Option<u64>,
    pub max_level: u32,
    pub enemies_spawned: u64,
    pub pulses_fired: u32,
    pub enemies_cleared: u64,
    /// The loop stopped because the input source asked to quit
    pub quit: bool,
}

impl SessionSummary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::LevelUp { level } => self.max_level = self.max_level.max(level),
                GameEvent::EnemiesSpawned { count, .. } => self.enemies_spawned += count as u64,
                GameEvent::PulseActivated => self.pulses_fired += 1,
                GameEvent::EnemiesCleared { count } => self.enemies_cleared += count as u64,
                GameEvent::GameOver { survival_secs } => {
                    self.survival_secs.push(survival_secs);
                    self.best_survival_secs = self.best_survival_secs.max(Some(survival_secs));
                }
                GameEvent::PulseFaded | GameEvent::Restarted => {}
            }
        }
    }
}

/// Drives the simulation with a clock, an input source and a renderer
pub struct FrameLoop<C, I, R> {
    pub clock: C,
    pub input: I,
    pub renderer: R,
    /// Stop after this many frames even if nobody quits
    pub max_frames: Option<u64>,
}

impl<C: Clock, I: InputSource, R: Renderer> FrameLoop<C, I, R> {
    pub fn new(clock: C, input: I, renderer: R) -> Self {
        Self {
            clock,
            input,
            renderer,
            max_frames: None,
        }
    }

    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Run until the input source quits or the frame limit is hit
    pub fn run(&mut self, state: &mut GameState) -> SessionSummary {
        let mut summary = SessionSummary {
            seed: state.seed,
            max_level: state.level,
            ..Default::default()
        };
        let mut last_ms = self.clock.now_ms();
        let mut snapshot = Snapshot::capture(state);
        self.renderer.present(&snapshot, &[]);

        loop {
            if self.max_frames.is_some_and(|limit| summary.frames >= limit) {
                log::info!("Frame limit reached after {} frames", summary.frames);
                break;
            }

            let input = self.input.poll(&snapshot);
            if input.quit {
                log::info!("Quit requested after {} frames", summary.frames);
                summary.quit = true;
                break;
            }

            let now_ms = self.clock.next_frame();
            let delta_ms = u32::try_from(now_ms.saturating_sub(last_ms)).unwrap_or(u32::MAX);
            last_ms = now_ms;

            tick(state, &input, delta_ms);
            summary.record(&state.events);
            summary.frames += 1;

            snapshot = Snapshot::capture(state);
            self.renderer.present(&snapshot, &state.events);
        }

        summary
    }
}
