//! Keymap layouts.
//!
//! A layout assigns a [`KeyMap`] and a log label to each of the four
//! encoders; the four push-buttons are the same in every layout.
//!
//! | Layout    | Rotation                         | Encoder switch        |
//! |-----------|----------------------------------|-----------------------|
//! | `Direct`  | `,` / `.` + per-encoder modifier | `i` `k` `o` `l`       |
//! | `Classic` | Down / Up + per-encoder modifier | Esc `l` `s` Return    |
//!
//! `Direct` leaves press-duration handling to the host (every press sends
//! the bare key). `Classic` adds Shift for a bold press and Ctrl for a long
//! press.

use embedded_hal::digital::InputPin;
use input::{
    AnySource, ButtonSource, Control, EncoderSource, KeyMap, Registry, RegistryError,
};
use platform::{ActiveLevel, KeyCode, Modifiers, Polarity, RotaryEncoder};

use crate::board::{BUTTON_COUNT, ENCODER_COUNT};

/// Total controls registered by a layout.
pub const CONTROL_COUNT: usize = ENCODER_COUNT + BUTTON_COUNT;

/// Label and key map of one control.
pub type Binding = (&'static str, KeyMap);

/// Keymap preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layout {
    /// Comma/period rotation, one letter per encoder switch.
    #[default]
    Direct,
    /// Arrow-key rotation with duration-qualified switch modifiers.
    Classic,
}

const fn plain_switch(rotate_modifiers: Modifiers, switch_key: KeyCode) -> KeyMap {
    KeyMap::encoder(
        KeyCode::COMMA,
        KeyCode::PERIOD,
        rotate_modifiers,
        switch_key,
        KeyCode::NONE,
        KeyCode::NONE,
        KeyCode::NONE,
    )
}

const fn arrow_switch(rotate_modifier: KeyCode, switch_key: KeyCode) -> KeyMap {
    KeyMap::encoder(
        KeyCode::DOWN,
        KeyCode::UP,
        Modifiers::one(rotate_modifier),
        switch_key,
        KeyCode::NONE,
        KeyCode::LEFT_SHIFT,
        KeyCode::LEFT_CTRL,
    )
}

const fn push_button(key: KeyCode) -> KeyMap {
    KeyMap::button(key, KeyCode::NONE, KeyCode::LEFT_SHIFT, KeyCode::LEFT_CTRL)
}

const DIRECT: [Binding; ENCODER_COUNT] = [
    (
        "enc1",
        plain_switch(Modifiers::two(KeyCode::LEFT_SHIFT, KeyCode::LEFT_CTRL), KeyCode::I),
    ),
    ("enc2", plain_switch(Modifiers::one(KeyCode::LEFT_CTRL), KeyCode::K)),
    ("enc3", plain_switch(Modifiers::one(KeyCode::LEFT_SHIFT), KeyCode::O)),
    ("enc4", plain_switch(Modifiers::none(), KeyCode::L)),
];

const CLASSIC: [Binding; ENCODER_COUNT] = [
    ("back", arrow_switch(KeyCode::CAPS_LOCK, KeyCode::ESCAPE)),
    ("layer", arrow_switch(KeyCode::LEFT_SHIFT, KeyCode::L)),
    ("snap", arrow_switch(KeyCode::LEFT_CTRL, KeyCode::S)),
    ("select", arrow_switch(KeyCode::NONE, KeyCode::ENTER)),
];

/// Push-buttons, shared by every layout.
pub const BUTTONS: [Binding; BUTTON_COUNT] = [
    ("s1", push_button(KeyCode::Z)),
    ("s2", push_button(KeyCode::X)),
    ("s3", push_button(KeyCode::C)),
    ("s4", push_button(KeyCode::V)),
];

impl Layout {
    /// Layout name for boot logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Classic => "classic",
        }
    }

    /// Encoder bindings in sweep order.
    pub const fn encoders(self) -> [Binding; ENCODER_COUNT] {
        match self {
            Self::Direct => DIRECT,
            Self::Classic => CLASSIC,
        }
    }

    /// Register every encoder, then every button, in board order.
    pub fn populate<P, E, const N: usize>(
        self,
        registry: &mut Registry<AnySource<P, E>, N>,
        encoders: [E; ENCODER_COUNT],
        buttons: [P; BUTTON_COUNT],
        polarity: Polarity,
        button_level: ActiveLevel,
    ) -> Result<(), RegistryError>
    where
        P: InputPin,
        E: RotaryEncoder,
    {
        for ((label, keymap), encoder) in self.encoders().into_iter().zip(encoders) {
            registry.register(
                Control::encoder(label, keymap),
                AnySource::Encoder(EncoderSource::new(encoder, polarity)),
            )?;
        }
        for ((label, keymap), pin) in BUTTONS.into_iter().zip(buttons) {
            registry.register(
                Control::button(label, keymap),
                AnySource::Button(ButtonSource::new(pin, button_level)),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::Mock as PinMock;
    use input::{ControlKind, PressEvent, Thresholds};
    use platform::mocks::ScriptedEncoder;
    use platform::{Direction, KeyCombo};

    fn pins() -> ([PinMock; BUTTON_COUNT], [PinMock; BUTTON_COUNT]) {
        let pins: [PinMock; BUTTON_COUNT] = core::array::from_fn(|_| PinMock::new(&[]));
        let handles = pins.clone();
        (pins, handles)
    }

    fn encoders() -> [ScriptedEncoder; ENCODER_COUNT] {
        core::array::from_fn(|_| ScriptedEncoder::new())
    }

    #[test]
    fn test_direct_first_encoder_uses_two_modifiers() {
        let [(_, map), ..] = Layout::Direct.encoders();
        assert_eq!(
            map.rotation_combo(Direction::Clockwise),
            KeyCombo::new(
                KeyCode::COMMA,
                Modifiers::two(KeyCode::LEFT_SHIFT, KeyCode::LEFT_CTRL)
            )
        );
        assert_eq!(
            map.press_combo(PressEvent::Long),
            Some(KeyCombo::plain(KeyCode::I))
        );
    }

    #[test]
    fn test_classic_back_rotates_with_caps_lock() {
        let [(label, map), ..] = Layout::Classic.encoders();
        assert_eq!(label, "back");
        assert!(map
            .rotation_combo(Direction::CounterClockwise)
            .modifiers()
            .contains_caps_lock());
        assert_eq!(
            map.press_combo(PressEvent::Bold),
            Some(KeyCombo::new(KeyCode::ESCAPE, Modifiers::one(KeyCode::LEFT_SHIFT)))
        );
    }

    #[test]
    fn test_buttons_are_shared() {
        let [.., (label, map)] = BUTTONS;
        assert_eq!(label, "s4");
        assert_eq!(
            map.press_combo(PressEvent::Long),
            Some(KeyCombo::new(KeyCode::V, Modifiers::one(KeyCode::LEFT_CTRL)))
        );
    }

    #[test]
    fn test_populate_registers_encoders_then_buttons() {
        let (buttons, handles) = pins();
        let mut registry: Registry<AnySource<PinMock, ScriptedEncoder>, CONTROL_COUNT> =
            Registry::new(Thresholds::DEFAULT);

        let result = Layout::Classic.populate(
            &mut registry,
            encoders(),
            buttons,
            Polarity::Normal,
            ActiveLevel::Low,
        );
        assert_eq!(result, Ok(()));
        assert_eq!(registry.len(), CONTROL_COUNT);

        let labels: Vec<_> = registry.controls().map(Control::label).collect();
        assert_eq!(
            labels,
            ["back", "layer", "snap", "select", "s1", "s2", "s3", "s4"]
        );
        assert!(registry
            .controls()
            .take(ENCODER_COUNT)
            .all(|c| c.kind() == ControlKind::Encoder));

        for mut pin in handles {
            pin.done();
        }
    }

    #[test]
    fn test_populate_reports_full_registry() {
        let (buttons, handles) = pins();
        let mut registry: Registry<AnySource<PinMock, ScriptedEncoder>, ENCODER_COUNT> =
            Registry::new(Thresholds::DEFAULT);

        let result = Layout::Direct.populate(
            &mut registry,
            encoders(),
            buttons,
            Polarity::Normal,
            ActiveLevel::Low,
        );
        assert_eq!(result, Err(RegistryError::Full));
        assert_eq!(registry.len(), ENCODER_COUNT);

        for mut pin in handles {
            pin.done();
        }
    }
}
