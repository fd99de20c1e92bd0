//! Property-based tests for press classification.
//! Drives the tracker and classifier the way a polling loop does: a hold of
//! `hold` ms sampled every `step` ms, then idle polls.

#![allow(clippy::arithmetic_side_effects)]

use input::{ElapsedTracker, PressEvent, PressState, Thresholds};
use platform::Millis;

/// Run one complete hold and return every event it produced.
fn run_hold(start: u32, hold: u32, step: u32, thresholds: &Thresholds) -> Vec<PressEvent> {
    let mut tracker = ElapsedTracker::new();
    let mut state = PressState::new();
    let mut events = Vec::new();
    let start = Millis::new(start);

    let mut offset = 0u32;
    while offset < hold {
        let d = tracker.sample(true, start.wrapping_add(offset));
        events.extend(state.classify(d, thresholds));
        offset += step;
    }
    let d = tracker.sample(false, start.wrapping_add(hold));
    events.extend(state.classify(d, thresholds));
    for idle in 1..=3 {
        let d = tracker.sample(false, start.wrapping_add(hold + idle * step));
        events.extend(state.classify(d, thresholds));
    }

    assert_eq!(state, PressState::new(), "state must return to idle");
    events
}

proptest::proptest! {
    /// Holds at or below the short threshold never produce anything.
    #[test]
    fn noise_is_silent(start in proptest::num::u32::ANY, step in 1u32..=5) {
        let t = Thresholds::DEFAULT;
        assert!(run_hold(start, t.short_ms, step, &t).is_empty());
    }

    /// Short-bucket holds produce exactly one Short.
    #[test]
    fn short_bucket_emits_one_short(
        start in proptest::num::u32::ANY,
        hold in 2u32..=300,
        step in 1u32..=20,
    ) {
        let t = Thresholds::DEFAULT;
        assert_eq!(run_hold(start, hold, step, &t), vec![PressEvent::Short]);
    }

    /// Bold-bucket holds produce exactly one Bold.
    #[test]
    fn bold_bucket_emits_one_bold(
        start in proptest::num::u32::ANY,
        hold in 301u32..=2_000,
        step in 1u32..=50,
    ) {
        let t = Thresholds::DEFAULT;
        assert_eq!(run_hold(start, hold, step, &t), vec![PressEvent::Bold]);
    }

    /// Long holds fire Long exactly once, then LongRelease on release.
    #[test]
    fn long_hold_fires_long_once(
        start in proptest::num::u32::ANY,
        hold in 2_001u32..=10_000,
        step in 1u32..=50,
    ) {
        let t = Thresholds::DEFAULT;
        assert_eq!(
            run_hold(start, hold, step, &t),
            vec![PressEvent::Long, PressEvent::LongRelease]
        );
    }

    /// Classification depends only on the hold length, not on where in the
    /// counter range it starts.
    #[test]
    fn wraparound_does_not_change_outcome(hold in 1u32..=5_000, step in 1u32..=25) {
        let t = Thresholds::DEFAULT;
        let near_wrap = u32::MAX - hold / 2;
        assert_eq!(
            run_hold(near_wrap, hold, step, &t),
            run_hold(1_000, hold, step, &t)
        );
    }

    /// Bucket boundaries are inclusive at the top.
    #[test]
    fn bucket_upper_bounds_are_inclusive(extra in 1u32..=1_000) {
        use input::Bucket;
        let t = Thresholds::DEFAULT;
        assert_eq!(t.bucket(t.short_ms), Bucket::Noise);
        assert_eq!(t.bucket(t.bold_ms), Bucket::Short);
        assert_eq!(t.bucket(t.long_ms), Bucket::Bold);
        assert_eq!(t.bucket(t.long_ms + extra), Bucket::Long);
    }
}
