//! Headless renderer: writes the HUD to the log instead of the screen

use super::Renderer;
use crate::sim::{GameEvent, Snapshot};

#[derive(Debug, Clone)]
pub struct LogRenderer {
    /// Emit a HUD line every this many frames (0 = never)
    pub hud_every: u64,
    frames: u64,
    last: Option<Snapshot>,
}

impl LogRenderer {
    pub fn new(hud_every: u64) -> Self {
        Self {
            hud_every,
            frames: 0,
            last: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recent snapshot presented
    pub fn last(&self) -> Option<&Snapshot> {
        self.last.as_ref()
    }

    /// One-line HUD text for a snapshot
    pub fn hud_line(snapshot: &Snapshot) -> String {
        if snapshot.game_over {
            return format!(
                "GAME OVER - survived {}s",
                snapshot.last_survival_secs.unwrap_or(0)
            );
        }
        let pulse = match snapshot.pulse_ring() {
            Some(r) => format!(" pulse r={r:.0}"),
            None => String::new(),
        };
        format!(
            "t={}s level={} enemies={} ({} elite) blastometer={:.0}%{}",
            snapshot.elapsed_secs,
            snapshot.level,
            snapshot.enemies.len(),
            snapshot.elite_count(),
            snapshot.meter_fraction * 100.0,
            pulse
        )
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new(60)
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]) {
        let game_over = events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. }));
        if game_over || (self.hud_every > 0 && self.frames % self.hud_every == 0) {
            log::debug!("{}", Self::hud_line(snapshot));
        }
        self.frames += 1;
        self.last = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn hud_line_shows_progress() {
        let mut state = GameState::new(1, Tuning::default());
        state.elapsed_ms = 31_500;
        state.level = 2;
        state.meter.charge(12_500);
        let line = LogRenderer::hud_line(&Snapshot::capture(&state));
        assert_eq!(line, "t=31s level=2 enemies=0 (0 elite) blastometer=50%");
    }

    #[test]
    fn hud_line_game_over() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = crate::sim::RunPhase::GameOver;
        state.last_survival_ms = Some(42_900);
        let line = LogRenderer::hud_line(&Snapshot::capture(&state));
        assert_eq!(line, "GAME OVER - survived 42s");
    }

    #[test]
    fn keeps_last_snapshot() {
        let state = GameState::new(1, Tuning::default());
        let mut renderer = LogRenderer::new(0);
        assert!(renderer.last().is_none());
        renderer.present(&Snapshot::capture(&state), &[]);
        assert_eq!(renderer.frames(), 1);
        assert_eq!(renderer.last().map(|s| s.level), Some(1));
    }
}
