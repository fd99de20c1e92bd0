//! One physical control: its key map plus its classifier state.

use heapless::Vec;
use platform::KeyCombo;

use crate::classifier::PressState;
use crate::keymap::KeyMap;
use crate::source::Sample;
use crate::thresholds::Thresholds;

/// Combos produced by one control in one poll: at most one rotation and
/// two press events.
pub type ControlCombos = Vec<KeyCombo, 3>;

/// Kind of physical control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlKind {
    /// Rotary encoder with push switch.
    Encoder,
    /// Plain push-button.
    Button,
}

/// A control descriptor with its exclusively owned press state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    label: &'static str,
    kind: ControlKind,
    keymap: KeyMap,
    state: PressState,
}

impl Control {
    /// New control in the idle state.
    pub const fn new(label: &'static str, kind: ControlKind, keymap: KeyMap) -> Self {
        Self {
            label,
            kind,
            keymap,
            state: PressState::new(),
        }
    }

    /// Encoder control.
    pub const fn encoder(label: &'static str, keymap: KeyMap) -> Self {
        Self::new(label, ControlKind::Encoder, keymap)
    }

    /// Button control.
    pub const fn button(label: &'static str, keymap: KeyMap) -> Self {
        Self::new(label, ControlKind::Button, keymap)
    }

    /// Run one poll: the rotation combo (if any) first, then press combos.
    ///
    /// Rotation and press handling are independent; a tick and a release
    /// in the same poll both produce combos.
    pub fn step(&mut self, sample: Sample, thresholds: &Thresholds) -> ControlCombos {
        let mut combos = ControlCombos::new();

        if let Some(direction) = sample.tick {
            // Capacity 3: one rotation + at most two press events.
            combos.push(self.keymap.rotation_combo(direction)).ok();
        }

        for event in self.state.classify(sample.duration_ms, thresholds) {
            #[cfg(feature = "defmt")]
            defmt::debug!("{=str}: {}", self.label, event);
            if let Some(combo) = self.keymap.press_combo(event) {
                combos.push(combo).ok();
            }
        }

        combos
    }

    /// Short human-readable name used in logs.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Control kind.
    pub const fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Key map.
    pub const fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Current classifier state.
    pub const fn state(&self) -> &PressState {
        &self.state
    }
}
