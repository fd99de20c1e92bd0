//! Static per-control key mapping.

use platform::{Direction, KeyCode, KeyCombo, Modifiers};

use crate::classifier::PressEvent;

/// Key combos one control produces.
///
/// Built once at startup (usually in a `const`) and never mutated.
/// Any field may be [`KeyCode::NONE`]; the emitter never transmits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyMap {
    /// Key sent for one clockwise tick.
    pub rotate_cw_key: KeyCode,
    /// Key sent for one counter-clockwise tick.
    pub rotate_ccw_key: KeyCode,
    /// Modifiers applied to every rotation combo.
    pub rotate_modifiers: Modifiers,
    /// Key sent for a press of the control's switch.
    pub switch_key: KeyCode,
    /// Modifier for a short press.
    pub short_modifier: KeyCode,
    /// Modifier for a bold press.
    pub bold_modifier: KeyCode,
    /// Modifier for a long press.
    pub long_modifier: KeyCode,
}

impl KeyMap {
    /// Mapping for a rotary encoder with an integrated switch.
    pub const fn encoder(
        rotate_cw_key: KeyCode,
        rotate_ccw_key: KeyCode,
        rotate_modifiers: Modifiers,
        switch_key: KeyCode,
        short_modifier: KeyCode,
        bold_modifier: KeyCode,
        long_modifier: KeyCode,
    ) -> Self {
        Self {
            rotate_cw_key,
            rotate_ccw_key,
            rotate_modifiers,
            switch_key,
            short_modifier,
            bold_modifier,
            long_modifier,
        }
    }

    /// Mapping for a plain push-button (no rotation keys).
    pub const fn button(
        switch_key: KeyCode,
        short_modifier: KeyCode,
        bold_modifier: KeyCode,
        long_modifier: KeyCode,
    ) -> Self {
        Self::encoder(
            KeyCode::NONE,
            KeyCode::NONE,
            Modifiers::none(),
            switch_key,
            short_modifier,
            bold_modifier,
            long_modifier,
        )
    }

    /// Combo for one rotation tick.
    pub const fn rotation_combo(&self, direction: Direction) -> KeyCombo {
        let key = match direction {
            Direction::Clockwise => self.rotate_cw_key,
            Direction::CounterClockwise => self.rotate_ccw_key,
        };
        KeyCombo::new(key, self.rotate_modifiers)
    }

    /// Combo for a classified press, or `None` for bookkeeping events.
    pub const fn press_combo(&self, event: PressEvent) -> Option<KeyCombo> {
        let modifier = match event {
            PressEvent::Short => self.short_modifier,
            PressEvent::Bold => self.bold_modifier,
            PressEvent::Long => self.long_modifier,
            PressEvent::LongRelease => return None,
        };
        Some(KeyCombo::new(self.switch_key, Modifiers::one(modifier)))
    }
}
