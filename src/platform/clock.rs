//! Frame clocks

use std::time::{Duration, Instant};

use super::FrameClock;

/// Wall-clock frame limiter that sleeps off the rest of each frame
#[derive(Debug)]
pub struct SleepClock {
    last: Option<Instant>,
}

impl Default for SleepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepClock {
    pub fn new() -> Self {
        Self { last: None }
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self, target_hz: u32) -> u64 {
        let now = Instant::now();
        let Some(last) = self.last else {
            self.last = Some(now);
            return 0;
        };

        let frame = Duration::from_secs_f64(1.0 / f64::from(target_hz.max(1)));
        let busy = now.duration_since(last);
        if busy < frame {
            std::thread::sleep(frame - busy);
        }

        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last).as_millis() as u64
    }
}

/// Clock that never waits; each tick reports exactly one frame's worth of time
#[derive(Debug, Default)]
pub struct ManualClock {
    pub ticks: u64,
}

impl FrameClock for ManualClock {
    fn tick(&mut self, target_hz: u32) -> u64 {
        self.ticks += 1;
        1000 / u64::from(target_hz.max(1))
    }
}
