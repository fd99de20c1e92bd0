//! USB HID boot-keyboard sink.
//!
//! [`ReportState`] is the 8-byte boot report held as state: a modifier
//! bitmask for usages `0xE0..=0xE7` plus six key slots. [`HidKeyboard`]
//! applies each [`KeyboardSink`] call to that state and writes the
//! resulting report through a [`ReportWriter`], one report per call.
//!
//! The state tracks what the host should end up holding. A press whose
//! report could not be written is undone, so an unplugged cable cannot
//! fill the key slots; releases stick even when their report is lost, so
//! the next report that does reach the host carries no stale keys.

use platform::{HidError, KeyCode, KeyboardSink};
use usbd_hid::descriptor::KeyboardReport;

/// Key slots in a boot keyboard report (6-key rollover).
pub const KEY_SLOTS: usize = 6;

/// Held keys and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportState {
    modifier: u8,
    keys: [u8; KEY_SLOTS],
}

impl ReportState {
    /// Nothing held.
    pub const fn new() -> Self {
        Self {
            modifier: 0,
            keys: [0; KEY_SLOTS],
        }
    }

    /// Hold `key`. Pressing a key that is already held changes nothing.
    pub fn press(&mut self, key: KeyCode) -> Result<(), HidError> {
        if key.is_none() {
            return Ok(());
        }
        if let Some(bit) = key.modifier_bit() {
            self.modifier |= bit;
            return Ok(());
        }
        let usage = key.usage();
        if self.keys.contains(&usage) {
            return Ok(());
        }
        let slot = self
            .keys
            .iter_mut()
            .find(|slot| **slot == 0)
            .ok_or(HidError::RolloverFull)?;
        *slot = usage;
        Ok(())
    }

    /// Stop holding `key`. Releasing a key that is not held changes nothing.
    pub fn release(&mut self, key: KeyCode) {
        if key.is_none() {
            return;
        }
        if let Some(bit) = key.modifier_bit() {
            self.modifier &= !bit;
            return;
        }
        let usage = key.usage();
        for slot in &mut self.keys {
            if *slot == usage {
                *slot = 0;
            }
        }
    }

    /// Drop every key and modifier.
    pub fn release_all(&mut self) {
        *self = Self::new();
    }

    /// `true` when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keys.iter().all(|&k| k == 0)
    }

    /// Modifier bitmask.
    pub const fn modifier(&self) -> u8 {
        self.modifier
    }

    /// Key slots, in press order with released slots zeroed.
    pub const fn keys(&self) -> &[u8; KEY_SLOTS] {
        &self.keys
    }

    /// Boot keyboard report for the current state.
    pub fn report(&self) -> KeyboardReport {
        KeyboardReport {
            modifier: self.modifier,
            reserved: 0,
            leds: 0,
            keycodes: self.keys,
        }
    }
}

/// Transport for finished keyboard reports.
pub trait ReportWriter {
    /// Send one report to the host.
    async fn write_report(&mut self, report: &KeyboardReport) -> Result<(), HidError>;
}

/// [`KeyboardSink`] backed by a HID report stream.
pub struct HidKeyboard<W> {
    writer: W,
    state: ReportState,
}

impl<W: ReportWriter> HidKeyboard<W> {
    /// Wrap `writer`; nothing is held initially.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: ReportState::new(),
        }
    }

    /// Current report state.
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Borrow the writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Mutably borrow the writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    async fn flush(&mut self) -> Result<(), HidError> {
        let report = self.state.report();
        self.writer.write_report(&report).await
    }
}

impl<W: ReportWriter> KeyboardSink for HidKeyboard<W> {
    type Error = HidError;

    async fn press(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        if key.is_none() {
            return Ok(());
        }
        let before = self.state;
        self.state.press(key)?;
        let written = self.flush().await;
        if written.is_err() {
            self.state = before;
        }
        written
    }

    async fn release(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        if key.is_none() {
            return Ok(());
        }
        self.state.release(key);
        self.flush().await
    }

    async fn release_all(&mut self) -> Result<(), Self::Error> {
        self.state.release_all();
        self.flush().await
    }
}

#[cfg(feature = "hardware")]
mod usb {
    use embassy_usb::class::hid::HidWriter;
    use embassy_usb::driver::{Driver, EndpointError};
    use platform::HidError;
    use usbd_hid::descriptor::KeyboardReport;

    use super::ReportWriter;

    impl<'d, D: Driver<'d>, const N: usize> ReportWriter for HidWriter<'d, D, N> {
        async fn write_report(&mut self, report: &KeyboardReport) -> Result<(), HidError> {
            self.write_serialize(report).await.map_err(|e| match e {
                EndpointError::Disabled => HidError::Disabled,
                EndpointError::BufferOverflow => HidError::Overflow,
            })
        }
    }
}
