//! Elapsed-time tracking for level-sampled switches.
//!
//! Buttons are read as a bare level every poll. [`ElapsedTracker`] turns
//! that level into "how long has this been held", including one final
//! sample on the poll that observes the release, so the classifier sees the
//! true hold duration exactly once.

use platform::Millis;

/// Per-switch assertion timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElapsedTracker {
    press_start: Option<Millis>,
}

impl ElapsedTracker {
    /// Idle tracker.
    pub const fn new() -> Self {
        Self { press_start: None }
    }

    /// Feed one level sample and return the hold duration in ms.
    ///
    /// | asserted | started | result                                  |
    /// |----------|---------|-----------------------------------------|
    /// | yes      | no      | start timing at `now`, return 0         |
    /// | yes      | yes     | running duration                        |
    /// | no       | yes     | final duration, timer cleared           |
    /// | no       | no      | 0                                       |
    pub fn sample(&mut self, asserted: bool, now: Millis) -> u32 {
        match (asserted, self.press_start) {
            (true, None) => {
                self.press_start = Some(now);
                0
            }
            (true, Some(start)) => now.elapsed_since(start),
            (false, Some(start)) => {
                self.press_start = None;
                now.elapsed_since(start)
            }
            (false, None) => 0,
        }
    }

    /// `true` while an assertion is being timed.
    pub const fn is_timing(&self) -> bool {
        self.press_start.is_some()
    }

    /// Timestamp at which the current assertion began.
    pub const fn press_start(&self) -> Option<Millis> {
        self.press_start
    }
}
