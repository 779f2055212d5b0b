//! Frame clocks

use std::time::{Duration, Instant};

use super::Clock;
use crate::consts::TARGET_FPS;

/// Simulated clock that advances a fixed step per frame (headless runs, tests)
#[derive(Debug, Clone)]
pub struct SteppedClock {
    now_ms: u64,
    step_ms: u64,
}

impl SteppedClock {
    pub fn new(step_ms: u64) -> Self {
        Self { now_ms: 0, step_ms }
    }
}

impl Clock for SteppedClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn next_frame(&mut self) -> u64 {
        self.now_ms = self.now_ms.saturating_add(self.step_ms);
        self.now_ms
    }
}

/// Simulated clock whose frame boundaries are `floor(frame * 1000 / fps)`.
///
/// Steps alternate so the long-run average matches `fps` (16/17/17 at 60 Hz).
#[derive(Debug, Clone)]
pub struct FpsClock {
    frame: u64,
    fps: u64,
}

impl FpsClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: 0,
            fps: fps.max(1) as u64,
        }
    }
}

impl Clock for FpsClock {
    fn now_ms(&self) -> u64 {
        self.frame * 1000 / self.fps
    }

    fn next_frame(&mut self) -> u64 {
        self.frame += 1;
        self.now_ms()
    }
}

/// Wall clock that sleeps to hold a target frame rate
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
    frame: Duration,
    deadline: Instant,
}

impl SystemClock {
    pub fn new(fps: u32) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            start,
            frame,
            deadline: start + frame,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn next_frame(&mut self) -> u64 {
        let now = Instant::now();
        if now < self.deadline {
            std::thread::sleep(self.deadline - now);
            self.deadline += self.frame;
        } else {
            // Fell behind; don't try to catch up with a burst of frames
            self.deadline = now + self.frame;
        }
        self.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_clock_advances() {
        let mut clock = SteppedClock::new(16);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.next_frame(), 16);
        assert_eq!(clock.next_frame(), 32);
    }

    #[test]
    fn fps_clock_averages_out() {
        let mut clock = FpsClock::new(60);
        let mut last = clock.now_ms();
        let mut deltas = Vec::new();
        for _ in 0..60 {
            let now = clock.next_frame();
            deltas.push(now - last);
            last = now;
        }
        assert_eq!(last, 1000);
        assert!(deltas.iter().all(|d| *d == 16 || *d == 17));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new(1000);
        let a = clock.next_frame();
        let b = clock.next_frame();
        assert!(b >= a);
    }
}
