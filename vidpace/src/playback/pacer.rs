use std::thread;
use std::time::Duration;

use crate::config::PacingMode;

/**
    Result of pacing one frame.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaceOutcome {
    /// Time spent decoding the frame.
    pub elapsed: Duration,
    /// Time left in the frame interval, if decoding finished early.
    pub shortfall: Option<Duration>,
    /// Whether the shortfall was actually waited out.
    pub slept: bool,
}

/**
    Holds decoding to the stream's nominal frame rate.

    Elapsed time is measured by the caller with a monotonic clock; the pacer
    decides how much of the interval is left and, in sleep mode, waits it out.
*/
#[derive(Clone, Copy, Debug)]
pub struct Pacer {
    interval: Option<Duration>,
    mode: PacingMode,
}

impl Pacer {
    pub fn new(interval: Option<Duration>, mode: PacingMode) -> Self {
        Self { interval, mode }
    }

    /**
        Time remaining in the frame interval after `elapsed`, if any.
    */
    pub fn shortfall(&self, elapsed: Duration) -> Option<Duration> {
        let interval = self.interval?;
        interval.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    pub fn pace(&self, elapsed: Duration) -> PaceOutcome {
        let shortfall = self.shortfall(elapsed);
        let slept = match (self.mode, shortfall) {
            (PacingMode::Sleep, Some(delay)) => {
                thread::sleep(delay);
                true
            }
            _ => false,
        };

        PaceOutcome {
            elapsed,
            shortfall,
            slept,
        }
    }
}
