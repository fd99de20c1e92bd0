//! Board profiles.
//!
//! A profile is compiled-in data describing how controls are wired on one
//! PCB: which pins carry what, which electrical level means "asserted", and
//! which optional features (indicator LED, polarity-select strap) exist.
//! `main.rs` wires peripherals to match [`BLACK_PILL`]; everything else is
//! host-testable.
//!
//! # Black pill (STM32F401CC) pin assignments
//!
//! | Control | GND  | VCC  | SW   | A    | B    |
//! |---------|------|------|------|------|------|
//! | Enc 1   | PA10 | PA9  | PA8  | PA7  | PA6  |
//! | Enc 2   | PA4  | PA3  | PA2  | PA1  | PA0  |
//! | Enc 3   | PB9  | PB10 | PB12 | PB13 | PB14 |
//! | Enc 4   | PB3  | PB4  | PB5  | PB6  | PB7  |
//!
//! Buttons: PA15, PA14, PA13, PB0 (active-low, internal pull-up).
//! PA5 and PB8 are left free so each encoder lines up with a 5-pin JST
//! header. PA11/PA12 are USB D-/D+. PC13 drives the on-board LED (lit when
//! low). PB2 is the polarity-select strap (BOOT1 on this board).

use platform::{ActiveLevel, PinState};

/// Number of rotary encoders on every supported board.
pub const ENCODER_COUNT: usize = 4;

/// Number of stand-alone push-buttons on every supported board.
pub const BUTTON_COUNT: usize = 4;

/// MCU pin name, e.g. `"PA8"`.
pub type PinLabel = &'static str;

/// Wiring of one encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderWiring {
    /// Quadrature channel A.
    pub a: PinLabel,
    /// Quadrature channel B.
    pub b: PinLabel,
    /// Integrated push switch.
    pub switch: PinLabel,
    /// Pin driven low to supply the encoder's ground, if powered from GPIO.
    pub gnd: Option<PinLabel>,
    /// Pin driven high to supply the encoder's VCC, if powered from GPIO.
    pub vcc: Option<PinLabel>,
}

impl EncoderWiring {
    /// Every pin this encoder occupies.
    pub fn pins(&self) -> impl Iterator<Item = PinLabel> {
        [Some(self.a), Some(self.b), Some(self.switch), self.gnd, self.vcc]
            .into_iter()
            .flatten()
    }
}

/// Static description of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardProfile {
    /// Human-readable board name for boot logs.
    pub name: &'static str,
    /// Indicator LED, if fitted.
    pub led: Option<PinLabel>,
    /// Level that lights the LED.
    pub led_level: ActiveLevel,
    /// Level at which encoder contacts and switches are asserted.
    pub encoder_level: ActiveLevel,
    /// Level at which stand-alone buttons are asserted.
    pub button_level: ActiveLevel,
    /// Strap read once at boot; high inverts every encoder.
    pub polarity_select: Option<PinLabel>,
    /// Compiled-in inversion applied regardless of the strap.
    pub default_invert: bool,
    /// Encoders, in sweep order.
    pub encoders: [EncoderWiring; ENCODER_COUNT],
    /// Buttons, in sweep order.
    pub buttons: [PinLabel; BUTTON_COUNT],
}

impl BoardProfile {
    /// Pin level that turns the indicator LED on or off.
    pub const fn led_state(&self, on: bool) -> PinState {
        match (self.led_level, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => PinState::High,
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => PinState::Low,
        }
    }

    /// Every pin claimed by the profile.
    pub fn pins(&self) -> impl Iterator<Item = PinLabel> + '_ {
        self.led
            .into_iter()
            .chain(self.polarity_select)
            .chain(self.encoders.iter().flat_map(EncoderWiring::pins))
            .chain(self.buttons.iter().copied())
    }
}

/// WeAct STM32F401CC "black pill".
pub const BLACK_PILL: BoardProfile = BoardProfile {
    name: "STM32F401CC black pill",
    led: Some("PC13"),
    led_level: ActiveLevel::Low,
    encoder_level: ActiveLevel::High,
    button_level: ActiveLevel::Low,
    polarity_select: Some("PB2"),
    default_invert: false,
    encoders: [
        EncoderWiring {
            a: "PA7",
            b: "PA6",
            switch: "PA8",
            gnd: Some("PA10"),
            vcc: Some("PA9"),
        },
        EncoderWiring {
            a: "PA1",
            b: "PA0",
            switch: "PA2",
            gnd: Some("PA4"),
            vcc: Some("PA3"),
        },
        EncoderWiring {
            a: "PB13",
            b: "PB14",
            switch: "PB12",
            gnd: Some("PB9"),
            vcc: Some("PB10"),
        },
        EncoderWiring {
            a: "PB6",
            b: "PB7",
            switch: "PB5",
            gnd: Some("PB3"),
            vcc: Some("PB4"),
        },
    ],
    buttons: ["PA15", "PA14", "PA13", "PB0"],
};
