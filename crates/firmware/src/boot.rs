//! Boot sequence for the encoder deck.
//!
//! Initialization order:
//!   1. Indicator LED on (running application code, not the bootloader)
//!   2. Drive encoder GND/VCC pins (encoders are powered from GPIO)
//!   3. Configure switch and quadrature inputs
//!   4. Read the polarity strap once
//!   5. Wait [`USB_WARMUP_MS`] before enumerating
//!   6. Start the USB HID keyboard
//!   7. Wait [`POST_USB_SETTLE_MS`]
//!   8. Indicator LED off, enter the polling loop
//!
//! The two delays give the host time to finish with the DFU bootloader and
//! settle the new HID device before the first keystroke is sent.

use platform::{PinState, Polarity};

/// Ordered list of boot steps, logged at startup and checked by tests.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. LED: on while booting",
    "2. Encoder power: GND pins low, VCC pins high",
    "3. Inputs: encoder A/B/SW and buttons",
    "4. Polarity: compiled default OR strap pin high",
    "5. Delay: USB warm-up",
    "6. USB: start HID keyboard",
    "7. Delay: post-USB settle",
    "8. LED: off, enter polling loop",
];

/// Delay before the USB keyboard is started, in ms.
pub const USB_WARMUP_MS: u64 = 2_000;

/// Delay after the USB keyboard is started, in ms.
pub const POST_USB_SETTLE_MS: u64 = 500;

/// Resolve encoder polarity at boot.
///
/// Inverted if the compiled default says so, or if the board has a
/// polarity strap and it reads high. A board without a strap passes `None`.
pub fn resolve_polarity(default_invert: bool, strap: Option<PinState>) -> Polarity {
    if default_invert || strap == Some(PinState::High) {
        Polarity::Inverted
    } else {
        Polarity::Normal
    }
}

/// Embassy configuration for the STM32F401 (hardware only).
#[cfg(feature = "hardware")]
pub mod hardware {
    use embassy_stm32::rcc::{
        AHBPrescaler, APBPrescaler, Hse, HseMode, Pll, PllMul, PllPDiv, PllPreDiv, PllQDiv,
        PllSource, Sysclk,
    };
    use embassy_stm32::time::Hertz;

    /// HSE crystal fitted to the black pill.
    pub const HSE_HZ: u32 = 25_000_000;

    /// Build the RCC configuration.
    ///
    /// | Clock  | Source            | Frequency |
    /// |--------|-------------------|-----------|
    /// | SYSCLK | PLL P (336 / 4)   | 84 MHz    |
    /// | USB FS | PLL Q (336 / 7)   | 48 MHz    |
    /// | APB1   | SYSCLK / 2        | 42 MHz    |
    ///
    /// USB full-speed needs exactly 48 MHz, hence the HSE-driven PLL.
    pub fn build_embassy_config() -> embassy_stm32::Config {
        let mut config = embassy_stm32::Config::default();
        config.rcc.hse = Some(Hse {
            freq: Hertz(HSE_HZ),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll_src = PllSource::HSE;
        config.rcc.pll = Some(Pll {
            prediv: PllPreDiv::DIV25,
            mul: PllMul::MUL336,
            divp: Some(PllPDiv::DIV4),
            divq: Some(PllQDiv::DIV7),
            divr: None,
        });
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
        config.rcc.sys = Sysclk::PLL1_P;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only() {
        assert_eq!(resolve_polarity(false, None), Polarity::Normal);
        assert_eq!(resolve_polarity(true, None), Polarity::Inverted);
    }

    #[test]
    fn test_strap_high_inverts() {
        assert_eq!(resolve_polarity(false, Some(PinState::High)), Polarity::Inverted);
        assert_eq!(resolve_polarity(false, Some(PinState::Low)), Polarity::Normal);
    }

    #[test]
    fn test_strap_cannot_cancel_default() {
        assert_eq!(resolve_polarity(true, Some(PinState::Low)), Polarity::Inverted);
    }

    #[test]
    fn test_usb_starts_after_warmup() {
        let usb = BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains("USB: start"));
        let warmup = BOOT_SEQUENCE_STEPS
            .iter()
            .position(|s| s.contains("warm-up"));
        assert!(warmup < usb);
        assert!(USB_WARMUP_MS > POST_USB_SETTLE_MS);
    }
}
