//! Digital input level handling.
//!
//! Physical switches are wired either to ground (read low when closed, with
//! a pull-up) or to the supply rail. [`ActiveLevel`] records which electrical
//! level means "asserted" so the classification engine only ever sees a
//! logical pressed / not-pressed sample.

use embedded_hal::digital::InputPin;

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Electrical level at which a switch counts as asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Closed switch pulls the line low (pull-up wiring).
    #[default]
    Low,
    /// Closed switch drives the line high (pull-down wiring).
    High,
}

impl ActiveLevel {
    /// `true` when `state` is the asserted level.
    pub fn is_asserted(self, state: PinState) -> bool {
        match self {
            Self::Low => state == PinState::Low,
            Self::High => state == PinState::High,
        }
    }

    /// Sample `pin` and resolve it against this level.
    ///
    /// A failed read yields `previous`: a glitch on the line must not look
    /// like a press, a release or a quadrature edge.
    pub fn sample_or<P: InputPin>(self, pin: &mut P, previous: bool) -> bool {
        match pin.is_high() {
            Ok(high) => self.is_asserted(PinState::from(high)),
            Err(_) => previous,
        }
    }
}
