//! Press classifier state machine.
//!
//! Consumes one hold-duration sample per poll and decides whether the
//! control produced a short, bold or long press. The state is implicit in
//! two fields:
//!
//! | `pending_ms` | `long_fired` | state        |
//! |--------------|--------------|--------------|
//! | 0            | false        | Idle         |
//! | > 0          | false        | Held         |
//! | > long       | true         | LongFired    |
//!
//! Each poll applies two rules against the *previous* sample
//! (`pending_ms`) before rolling the new sample forward:
//!
//! 1. Held past the long threshold and not yet fired: fire
//!    [`PressEvent::Long`] immediately, without waiting for release.
//! 2. New sample is 0 and previous was not (release edge): classify the
//!    previous sample. A long hold only clears `long_fired`; anything at or
//!    below the short threshold is noise and yields nothing.
//!
//! Both rules read the same pre-update snapshot, so a hold whose first
//! sample past the long threshold is also its release fires `Long` and
//! `LongRelease` in that one poll.

use heapless::Vec;

use crate::thresholds::{Bucket, Thresholds};

/// Events produced by one classification step (at most two).
pub type PressEvents = Vec<PressEvent, 2>;

/// Classified press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressEvent {
    /// Released after `(short, bold]` ms.
    Short,
    /// Released after `(bold, long]` ms.
    Bold,
    /// Held past `long` ms; fired while still held.
    Long,
    /// Released after a long press. Bookkeeping only, nothing is sent.
    LongRelease,
}

/// Per-control classifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressState {
    pending_ms: u32,
    long_fired: bool,
}

impl PressState {
    /// Idle state.
    pub const fn new() -> Self {
        Self {
            pending_ms: 0,
            long_fired: false,
        }
    }

    /// Advance by one poll with the newly observed hold duration `sw_ms`.
    pub fn classify(&mut self, sw_ms: u32, thresholds: &Thresholds) -> PressEvents {
        let mut events = PressEvents::new();
        let pending = self.pending_ms;

        if thresholds.is_long(pending) && !self.long_fired {
            self.long_fired = true;
            // Capacity is 2 and this is the first push.
            events.push(PressEvent::Long).ok();
        }

        if sw_ms == 0 && pending != 0 {
            let released = match thresholds.bucket(pending) {
                Bucket::Long => {
                    self.long_fired = false;
                    Some(PressEvent::LongRelease)
                }
                Bucket::Bold => Some(PressEvent::Bold),
                Bucket::Short => Some(PressEvent::Short),
                Bucket::Noise | Bucket::Released => None,
            };
            if let Some(event) = released {
                // At most the second push.
                events.push(event).ok();
            }
        }

        self.pending_ms = sw_ms;
        events
    }

    /// Duration observed on the previous poll.
    pub const fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    /// `true` once the long event fired for the current hold.
    pub const fn long_fired(&self) -> bool {
        self.long_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Thresholds = Thresholds::DEFAULT;

    fn run(samples: &[u32]) -> (PressState, heapless::Vec<PressEvent, 16>) {
        let mut state = PressState::new();
        let mut all = heapless::Vec::new();
        for &sw in samples {
            for ev in state.classify(sw, &T) {
                all.push(ev).ok();
            }
        }
        (state, all)
    }

    #[test]
    fn test_short_press_on_release() {
        // Scenario A
        let (state, events) = run(&[0, 0, 120, 250, 0]);
        assert_eq!(events.as_slice(), &[PressEvent::Short]);
        assert_eq!(state.pending_ms(), 0);
    }

    #[test]
    fn test_bold_press_on_release() {
        // Scenario B
        let (_, events) = run(&[100, 300, 500, 0]);
        assert_eq!(events.as_slice(), &[PressEvent::Bold]);
    }

    #[test]
    fn test_long_fires_while_held_then_release_is_silent() {
        // Scenario C
        let mut state = PressState::new();
        assert!(state.classify(1_500, &T).is_empty());
        assert!(state.classify(2_100, &T).is_empty());
        // Previous sample 2100 > 2000: fire now, still held.
        assert_eq!(state.classify(2_200, &T).as_slice(), &[PressEvent::Long]);
        assert!(state.long_fired());
        assert!(state.classify(2_300, &T).is_empty());
        assert_eq!(state.classify(0, &T).as_slice(), &[PressEvent::LongRelease]);
        assert!(!state.long_fired());
    }

    #[test]
    fn test_noise_is_ignored() {
        let (_, events) = run(&[1, 0]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_zero_to_zero_is_idle() {
        let (state, events) = run(&[0, 0, 0]);
        assert!(events.is_empty());
        assert_eq!(state, PressState::new());
    }

    #[test]
    fn test_long_and_release_in_same_poll() {
        let mut state = PressState::new();
        state.classify(1_990, &T);
        // Release poll carries the final duration (past long).
        assert!(state.classify(2_050, &T).is_empty());
        assert_eq!(
            state.classify(0, &T).as_slice(),
            &[PressEvent::Long, PressEvent::LongRelease]
        );
        assert!(!state.long_fired());
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(run(&[300, 0]).1.as_slice(), &[PressEvent::Short]);
        assert_eq!(run(&[301, 0]).1.as_slice(), &[PressEvent::Bold]);
        assert_eq!(run(&[2_000, 0]).1.as_slice(), &[PressEvent::Bold]);
    }

    #[test]
    fn test_second_hold_fires_long_again() {
        let (_, events) = run(&[2_500, 2_600, 0, 2_500, 2_600, 0]);
        assert_eq!(
            events.as_slice(),
            &[
                PressEvent::Long,
                PressEvent::LongRelease,
                PressEvent::Long,
                PressEvent::LongRelease,
            ]
        );
    }
}
