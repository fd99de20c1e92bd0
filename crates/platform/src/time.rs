//! Wrapping millisecond clock.
//!
//! The controller runs for weeks without a reset, so durations are measured
//! on a 32-bit millisecond counter that wraps roughly every 49.7 days.
//! [`Millis::elapsed_since`] uses modular subtraction: a measurement that
//! straddles the wrap still yields the true elapsed time.

/// Timestamp on a wrapping 32-bit millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Millis(u32);

impl Millis {
    /// Counter origin.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw counter value.
    pub const fn new(ms: u32) -> Self {
        Self(ms)
    }

    /// Truncate a 64-bit millisecond count to the wrapping counter width.
    #[allow(clippy::cast_possible_truncation)] // truncation is the wrap
    pub const fn from_u64(ms: u64) -> Self {
        Self(ms as u32)
    }

    /// Raw counter value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Milliseconds from `earlier` to `self`, modulo 2^32.
    #[must_use]
    pub const fn elapsed_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Advance by `ms`, wrapping at the counter width.
    #[must_use]
    pub const fn wrapping_add(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}

/// Monotonic millisecond time source.
pub trait Clock {
    /// Current counter value.
    fn now(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// [`Clock`] backed by the embassy-time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Millis {
        Millis::from_u64(embassy_time::Instant::now().as_millis())
    }
}
