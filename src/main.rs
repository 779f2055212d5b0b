//! Zombie Survival entry point
//!
//! Runs the simulation headlessly with the autopilot at the wheel and prints a
//! JSON session summary. A windowed frontend supplies its own `InputSource`
//! and `Renderer` and reuses the same `FrameLoop`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use zombie_survival::Tuning;
use zombie_survival::consts::TARGET_FPS;
use zombie_survival::platform::{
    Autopilot, Clock, FpsClock, FrameLoop, LogRenderer, SessionSummary, SystemClock,
};
use zombie_survival::sim::GameState;

#[derive(Debug, Parser)]
#[command(name = "zombie-survival")]
#[command(about = "Headless Zombie Survival session driven by the autopilot")]
struct Options {
    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Runs to play before quitting
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Frame limit; 0 plays until the last run ends (default: ten minutes at 60 Hz)
    #[arg(long, default_value_t = 10 * 60 * TARGET_FPS as u64)]
    frames: u64,
    /// JSON tuning file overriding the default balance
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Pace frames with the wall clock instead of simulating time
    #[arg(long)]
    realtime: bool,
}

fn run<C: Clock>(clock: C, state: &mut GameState, options: &Options) -> SessionSummary {
    let mut frame_loop = FrameLoop::new(clock, Autopilot::new(options.runs), LogRenderer::default());
    if options.frames > 0 {
        frame_loop = frame_loop.with_frame_limit(options.frames);
    }
    frame_loop.run(state)
}

fn main() -> Result<()> {
    env_logger::init();

    let options = Options::parse();
    let tuning = match &options.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let seed = options.seed.unwrap_or_else(rand::random);

    log::info!("Zombie Survival starting (seed {seed}, {} run(s))", options.runs);
    log::info!("Pacing: {}", tuning.pacing.as_str());

    let mut state = GameState::new(seed, tuning);
    let summary = if options.realtime {
        run(SystemClock::new(TARGET_FPS), &mut state, &options)
    } else {
        run(FpsClock::new(TARGET_FPS), &mut state, &options)
    };

    log::info!(
        "Session over after {} frames, best run {}s",
        summary.frames,
        summary.best_survival_secs.unwrap_or(0)
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let options = Options::try_parse_from([
            "zombie-survival",
            "--seed",
            "42",
            "--runs",
            "3",
            "--frames",
            "0",
            "--tuning",
            "t.json",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.runs, 3);
        assert_eq!(options.frames, 0);
        assert_eq!(options.tuning, Some(PathBuf::from("t.json")));
        assert!(options.realtime);
    }

    #[test]
    fn defaults() {
        let options = Options::try_parse_from(["zombie-survival"]).unwrap();
        assert_eq!(options.seed, None);
        assert_eq!(options.runs, 1);
        assert_eq!(options.frames, 36_000);
        assert!(options.tuning.is_none());
        assert!(!options.realtime);
    }

    #[test]
    fn rejects_unknown_and_missing() {
        assert!(Options::try_parse_from(["zombie-survival", "--bogus"]).is_err());
        assert!(Options::try_parse_from(["zombie-survival", "--seed"]).is_err());
        assert!(Options::try_parse_from(["zombie-survival", "--runs", "many"]).is_err());
    }

    #[test]
    fn headless_session_is_reproducible() {
        let options =
            Options::try_parse_from(["zombie-survival", "--seed", "7", "--frames", "3000"]).unwrap();
        let mut a = GameState::new(7, Tuning::default());
        let mut b = GameState::new(7, Tuning::default());
        let first = run(FpsClock::new(TARGET_FPS), &mut a, &options);
        let second = run(FpsClock::new(TARGET_FPS), &mut b, &options);
        assert_eq!(first, second);
        assert_eq!(first.frames, 3000);
        assert_eq!(a.enemies, b.enemies);
    }
}
