// Real-time pacing for the fixed-step simulation
//
// Wall-clock time is accumulated and paid out in whole ticks of
// `FIXED_TIMESTEP`. The clock only decides how many ticks to run; the
// physics always integrates with the fixed step.

use std::time::{Duration, Instant};

use super::physics::TICKS_PER_SECOND;

/// Maximum number of ticks paid out per frame to prevent a spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Fixed-step accumulator
#[derive(Debug)]
pub struct TickClock {
    /// Time not yet paid out as ticks
    accumulator: Duration,
    /// Length of one tick
    tick_duration: Duration,
    /// Time of the last `begin_frame`
    last_frame_time: Instant,
    /// Whether time is currently accumulating
    paused: bool,
    /// Total frames seen
    frame_count: u64,
    /// Total ticks paid out
    tick_count: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            tick_duration: Duration::from_secs(1) / TICKS_PER_SECOND,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Measure time since the previous frame and return the ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(elapsed)
    }

    /// Account for `elapsed` wall-clock time and return the ticks to run
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        // Drop the backlog instead of carrying it into later frames
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.tick_duration {
            log::warn!(
                "Simulation fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
