//! Per-control signal sources.
//!
//! A source turns whatever the hardware exposes into one [`Sample`] per
//! poll: an optional rotation direction plus the switch hold duration.
//! Buttons time their own level with an [`ElapsedTracker`]; encoders
//! delegate both tick detection and switch timing to their driver.

use embedded_hal::digital::InputPin;
use platform::{ActiveLevel, Direction, Millis, Polarity, RotaryEncoder};

use crate::elapsed::ElapsedTracker;

/// What one control reported in one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Rotation detected this poll, if any.
    pub tick: Option<Direction>,
    /// Switch hold duration in ms (see [`ElapsedTracker::sample`]).
    pub duration_ms: u32,
}

impl Sample {
    /// Switch-only sample.
    pub const fn press(duration_ms: u32) -> Self {
        Self {
            tick: None,
            duration_ms,
        }
    }
}

/// Anything that can be polled for a [`Sample`].
pub trait ControlSource {
    /// Read the control once at time `now`.
    fn sample(&mut self, now: Millis) -> Sample;
}

/// Momentary push-button on a single input pin.
pub struct ButtonSource<P> {
    pin: P,
    level: ActiveLevel,
    tracker: ElapsedTracker,
}

impl<P: InputPin> ButtonSource<P> {
    /// Wrap `pin`, asserted at `level`.
    pub fn new(pin: P, level: ActiveLevel) -> Self {
        Self {
            pin,
            level,
            tracker: ElapsedTracker::new(),
        }
    }

    /// Release the pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ControlSource for ButtonSource<P> {
    fn sample(&mut self, now: Millis) -> Sample {
        let asserted = self.level.sample_or(&mut self.pin, self.tracker.is_timing());
        Sample::press(self.tracker.sample(asserted, now))
    }
}

/// Rotary encoder whose raw ticks are resolved through a shared polarity.
pub struct EncoderSource<E> {
    encoder: E,
    polarity: Polarity,
}

impl<E: RotaryEncoder> EncoderSource<E> {
    /// Wrap a driver.
    pub fn new(encoder: E, polarity: Polarity) -> Self {
        Self { encoder, polarity }
    }

    /// Borrow the driver.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }
}

impl<E: RotaryEncoder> ControlSource for EncoderSource<E> {
    fn sample(&mut self, now: Millis) -> Sample {
        let tick = self.polarity.resolve(self.encoder.rotate());
        Sample {
            tick,
            duration_ms: self.encoder.push_time(now),
        }
    }
}

/// Either kind of source, so one registry can hold buttons and encoders.
pub enum AnySource<P, E> {
    /// Push-button
    Button(ButtonSource<P>),
    /// Rotary encoder
    Encoder(EncoderSource<E>),
}

impl<P: InputPin, E: RotaryEncoder> ControlSource for AnySource<P, E> {
    fn sample(&mut self, now: Millis) -> Sample {
        match self {
            Self::Button(button) => button.sample(now),
            Self::Encoder(encoder) => encoder.sample(now),
        }
    }
}
