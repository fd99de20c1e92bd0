//! Control registry and the polling sweep.
//!
//! The registry is a fixed-capacity list of `(Control, source)` pairs built
//! once at startup. [`Registry::sweep`] services every control exactly once,
//! in registration order: sample, classify, and emit all resulting combos
//! before moving to the next control, so combos from two controls never
//! interleave on the wire.

use heapless::Vec;
use platform::{Clock, KeyboardSink};

use crate::control::Control;
use crate::emitter;
use crate::source::ControlSource;
use crate::thresholds::Thresholds;

/// Registry errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Registry capacity reached
    #[error("control registry is full")]
    Full,
}

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepReport {
    /// Combos fully sent.
    pub emitted: u16,
    /// Combos the sink rejected part-way.
    pub rejected: u16,
}

/// Fixed-capacity set of controls and their sources.
pub struct Registry<S, const N: usize> {
    entries: Vec<(Control, S), N>,
    thresholds: Thresholds,
}

impl<S: ControlSource, const N: usize> Registry<S, N> {
    /// Empty registry classifying with `thresholds`.
    pub const fn new(thresholds: Thresholds) -> Self {
        Self {
            entries: Vec::new(),
            thresholds,
        }
    }

    /// Append a control. Sweep order is registration order.
    pub fn register(&mut self, control: Control, source: S) -> Result<(), RegistryError> {
        self.entries
            .push((control, source))
            .map_err(|_| RegistryError::Full)
    }

    /// Number of registered controls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered controls in sweep order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> + '_ {
        self.entries.iter().map(|(control, _)| control)
    }

    /// Poll every control once and emit what it produced.
    ///
    /// A sink error drops the rest of that combo's presses (its release
    /// still goes out), is counted in the report and logged; the sweep
    /// carries on with the next combo.
    pub async fn sweep<C, K>(&mut self, clock: &C, sink: &mut K) -> SweepReport
    where
        C: Clock,
        K: KeyboardSink,
    {
        let thresholds = self.thresholds;
        let mut report = SweepReport::default();

        for (control, source) in &mut self.entries {
            let sample = source.sample(clock.now());
            for combo in control.step(sample, &thresholds) {
                if combo.is_empty() {
                    continue;
                }
                match emitter::emit(sink, &combo).await {
                    Ok(()) => {
                        #[cfg(feature = "defmt")]
                        defmt::trace!("{=str}: sent {}", control.label(), combo);
                        report.emitted = report.emitted.saturating_add(1);
                    }
                    Err(_) => {
                        #[cfg(feature = "defmt")]
                        defmt::warn!("{=str}: keyboard rejected combo", control.label());
                        report.rejected = report.rejected.saturating_add(1);
                    }
                }
            }
        }

        report
    }
}
