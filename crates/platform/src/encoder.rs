//! Rotary encoder abstraction.
//!
//! Quadrature decoding is the driver's job. The classification engine only
//! consumes what the driver resolves each poll: a [`RawTick`] and the
//! duration the integrated push switch has been held.
//!
//! Which physical sense of rotation the driver calls "forward" depends on
//! how the encoder is wired. [`Polarity`] is resolved once at boot and turns
//! raw ticks into a [`Direction`] uniformly for every encoder.

use crate::time::Millis;

/// Raw driver output for one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawTick {
    /// No detent crossed since the last poll.
    #[default]
    Idle,
    /// One detent in the driver's forward sense.
    Forward,
    /// One detent in the driver's reverse sense.
    Reverse,
}

/// Logical rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise
    Clockwise,
    /// Counter-clockwise
    CounterClockwise,
}

/// Mapping from raw ticks to directions, shared by all encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Forward is clockwise.
    #[default]
    Normal,
    /// Forward is counter-clockwise (encoders mounted or wired reversed).
    Inverted,
}

impl Polarity {
    /// Resolve a raw tick. [`RawTick::Idle`] yields `None`.
    pub fn resolve(self, tick: RawTick) -> Option<Direction> {
        match (self, tick) {
            (_, RawTick::Idle) => None,
            (Self::Normal, RawTick::Forward) | (Self::Inverted, RawTick::Reverse) => {
                Some(Direction::Clockwise)
            }
            (Self::Normal, RawTick::Reverse) | (Self::Inverted, RawTick::Forward) => {
                Some(Direction::CounterClockwise)
            }
        }
    }
}

/// Rotary encoder driver with an integrated push switch.
pub trait RotaryEncoder {
    /// Consume the tick detected since the previous call.
    fn rotate(&mut self) -> RawTick;

    /// Switch hold duration in ms for this poll.
    ///
    /// Same contract as `input::ElapsedTracker::sample`: 0 when idle, the
    /// running duration while held, and the final duration exactly once on
    /// the poll that observes the release.
    fn push_time(&mut self, now: Millis) -> u32;
}
