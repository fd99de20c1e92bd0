//! Press-duration thresholds.

/// Duration bucket of a completed (or ongoing) hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bucket {
    /// `0`: not pressed.
    Released,
    /// `(0, short]`: contact noise, ignored.
    Noise,
    /// `(short, bold]`
    Short,
    /// `(bold, long]`
    Bold,
    /// `(long, ∞)`
    Long,
}

/// Upper bounds (ms, inclusive) of the noise, short and bold buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
    /// Holds at or below this are noise.
    pub short_ms: u32,
    /// Holds above `short_ms` and at or below this are short presses.
    pub bold_ms: u32,
    /// Holds above `bold_ms` and at or below this are bold presses;
    /// anything longer is a long press.
    pub long_ms: u32,
}

impl Thresholds {
    /// Reference timings: 1 ms / 300 ms / 2000 ms.
    pub const DEFAULT: Self = Self {
        short_ms: 1,
        bold_ms: 300,
        long_ms: 2_000,
    };

    /// Bucket containing `duration_ms`.
    pub const fn bucket(&self, duration_ms: u32) -> Bucket {
        if duration_ms == 0 {
            Bucket::Released
        } else if duration_ms > self.long_ms {
            Bucket::Long
        } else if duration_ms > self.bold_ms {
            Bucket::Bold
        } else if duration_ms > self.short_ms {
            Bucket::Short
        } else {
            Bucket::Noise
        }
    }

    /// `true` once a hold has crossed the long threshold.
    pub const fn is_long(&self, duration_ms: u32) -> bool {
        duration_ms > self.long_ms
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
