//! Polled quadrature encoder with integrated push switch.
//!
//! Decodes A/B with a detent state machine rather than counting edges, so
//! contact bounce inside one detent cannot produce extra ticks:
//!
//! ```text
//! Forward: rest -> A only -> A+B -> either released => Forward
//! Reverse: rest -> B only -> A+B -> either released => Reverse
//! ```
//!
//! Returning to rest before both channels are asserted abandons the step.
//! "Asserted" follows the board's [`ActiveLevel`]; a failed pin read repeats
//! the channel's previous level, so it can neither start nor finish a step.

use embedded_hal::digital::InputPin;
use input::ElapsedTracker;
use platform::{ActiveLevel, Millis, RawTick, RotaryEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Rest,
    ForwardLead,
    ForwardBoth,
    ReverseLead,
    ReverseBoth,
}

/// Quadrature encoder on three input pins.
pub struct QuadratureEncoder<A, B, S> {
    a: A,
    b: B,
    switch: S,
    level: ActiveLevel,
    phase: Phase,
    last: (bool, bool),
    tracker: ElapsedTracker,
}

impl<A, B, S> QuadratureEncoder<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    /// Wrap the pins. Contacts and switch share one active level.
    pub fn new(a: A, b: B, switch: S, level: ActiveLevel) -> Self {
        Self {
            a,
            b,
            switch,
            level,
            phase: Phase::Rest,
            last: (false, false),
            tracker: ElapsedTracker::new(),
        }
    }

    /// Release the pins.
    pub fn into_parts(self) -> (A, B, S) {
        (self.a, self.b, self.switch)
    }

    fn decode(&mut self, a: bool, b: bool) -> RawTick {
        let (next, tick) = match (self.phase, a, b) {
            (Phase::Rest, true, false) => (Phase::ForwardLead, RawTick::Idle),
            (Phase::Rest, false, true) => (Phase::ReverseLead, RawTick::Idle),
            (Phase::ForwardLead, true, true) => (Phase::ForwardBoth, RawTick::Idle),
            (Phase::ReverseLead, true, true) => (Phase::ReverseBoth, RawTick::Idle),
            (Phase::ForwardLead | Phase::ReverseLead, false, false) => (Phase::Rest, RawTick::Idle),
            (Phase::ForwardBoth, _, _) if !(a && b) => (Phase::Rest, RawTick::Forward),
            (Phase::ReverseBoth, _, _) if !(a && b) => (Phase::Rest, RawTick::Reverse),
            (phase, _, _) => (phase, RawTick::Idle),
        };
        self.phase = next;
        tick
    }
}

impl<A, B, S> RotaryEncoder for QuadratureEncoder<A, B, S>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    fn rotate(&mut self) -> RawTick {
        let a = self.level.sample_or(&mut self.a, self.last.0);
        let b = self.level.sample_or(&mut self.b, self.last.1);
        if (a, b) == self.last {
            return RawTick::Idle;
        }
        self.last = (a, b);
        self.decode(a, b)
    }

    fn push_time(&mut self, now: Millis) -> u32 {
        let pressed = self.level.sample_or(&mut self.switch, self.tracker.is_timing());
        self.tracker.sample(pressed, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    /// Active-low encoder fed with `(a, b)` levels, one pair per poll.
    fn encoder(levels: &[(State, State)]) -> QuadratureEncoder<PinMock, PinMock, PinMock> {
        let a: Vec<_> = levels.iter().map(|&(a, _)| Transaction::get(a)).collect();
        let b: Vec<_> = levels.iter().map(|&(_, b)| Transaction::get(b)).collect();
        QuadratureEncoder::new(
            PinMock::new(&a),
            PinMock::new(&b),
            PinMock::new(&[]),
            ActiveLevel::Low,
        )
    }

    fn finish(enc: QuadratureEncoder<PinMock, PinMock, PinMock>) {
        let (mut a, mut b, mut sw) = enc.into_parts();
        a.done();
        b.done();
        sw.done();
    }

    fn run(enc: &mut QuadratureEncoder<PinMock, PinMock, PinMock>, polls: usize) -> Vec<RawTick> {
        run_any(enc, polls)
    }

    fn run_any(enc: &mut impl RotaryEncoder, polls: usize) -> Vec<RawTick> {
        (0..polls).map(|_| enc.rotate()).collect()
    }

    use State::{High as H, Low as L};

    /// Pin replaying raw levels; `None` is a failed read.
    struct Flaky(std::collections::VecDeque<Option<State>>);

    impl Flaky {
        fn new(levels: &[Option<State>]) -> Self {
            Self(levels.iter().copied().collect())
        }
    }

    impl embedded_hal::digital::ErrorType for Flaky {
        type Error = embedded_hal::digital::ErrorKind;
    }

    impl InputPin for Flaky {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            match self.0.pop_front().flatten() {
                Some(level) => Ok(level == H),
                None => Err(embedded_hal::digital::ErrorKind::Other),
            }
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[test]
    fn test_full_forward_detent() {
        let mut enc = encoder(&[(H, H), (L, H), (L, L), (H, L), (H, H)]);
        assert_eq!(
            run(&mut enc, 5),
            [RawTick::Idle, RawTick::Idle, RawTick::Idle, RawTick::Forward, RawTick::Idle]
        );
        finish(enc);
    }

    #[test]
    fn test_full_reverse_detent() {
        let mut enc = encoder(&[(H, L), (L, L), (L, H), (H, H)]);
        assert_eq!(
            run(&mut enc, 4),
            [RawTick::Idle, RawTick::Idle, RawTick::Reverse, RawTick::Idle]
        );
        finish(enc);
    }

    #[test]
    fn test_bounce_back_to_rest_is_ignored() {
        let mut enc = encoder(&[(L, H), (H, H), (L, H), (H, H)]);
        assert!(run(&mut enc, 4).iter().all(|&t| t == RawTick::Idle));
        finish(enc);
    }

    #[test]
    fn test_unchanged_levels_do_not_advance() {
        let mut enc = encoder(&[(L, H), (L, H), (L, L), (L, L), (H, L)]);
        assert_eq!(run(&mut enc, 5).last(), Some(&RawTick::Forward));
        finish(enc);
    }

    #[test]
    fn test_switch_is_timed() {
        let sw = [
            Transaction::get(L),
            Transaction::get(L),
            Transaction::get(H),
            Transaction::get(H),
        ];
        let mut enc = QuadratureEncoder::new(
            PinMock::new(&[]),
            PinMock::new(&[]),
            PinMock::new(&sw),
            ActiveLevel::Low,
        );
        assert_eq!(enc.push_time(Millis::new(100)), 0);
        assert_eq!(enc.push_time(Millis::new(400)), 300);
        assert_eq!(enc.push_time(Millis::new(450)), 350);
        assert_eq!(enc.push_time(Millis::new(460)), 0);
        finish(enc);
    }

    #[test]
    fn test_active_high_contacts() {
        let a = [Transaction::get(H), Transaction::get(H), Transaction::get(L)];
        let b = [Transaction::get(L), Transaction::get(H), Transaction::get(H)];
        let mut enc = QuadratureEncoder::new(
            PinMock::new(&a),
            PinMock::new(&b),
            PinMock::new(&[]),
            ActiveLevel::High,
        );
        assert_eq!(run(&mut enc, 3), [RawTick::Idle, RawTick::Idle, RawTick::Forward]);
        finish(enc);
    }

    #[test]
    fn test_read_error_mid_detent_is_not_a_tick() {
        let a = Flaky::new(&[Some(H), Some(L), Some(L), None, Some(L), Some(L), Some(H)]);
        let b = Flaky::new(&[Some(H), Some(H), Some(L), Some(L), Some(L), Some(L), Some(H)]);
        let mut enc = QuadratureEncoder::new(a, b, Flaky::new(&[]), ActiveLevel::Low);
        let mut expected = [RawTick::Idle; 7];
        if let Some(last) = expected.last_mut() {
            *last = RawTick::Forward;
        }
        assert_eq!(run_any(&mut enc, 7), expected);
    }

    #[test]
    fn test_switch_read_error_keeps_press() {
        let sw = Flaky::new(&[Some(L), None, Some(H), Some(H)]);
        let mut enc = QuadratureEncoder::new(Flaky::new(&[]), Flaky::new(&[]), sw, ActiveLevel::Low);
        assert_eq!(enc.push_time(Millis::new(100)), 0);
        assert_eq!(enc.push_time(Millis::new(200)), 100);
        assert_eq!(enc.push_time(Millis::new(300)), 200);
        assert_eq!(enc.push_time(Millis::new(310)), 0);
    }
}
