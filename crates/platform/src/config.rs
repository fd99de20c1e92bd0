//! Application configuration and constants
//!
//! Product identity reported to the USB host. All branding and USB
//! descriptor strings should reference these constants rather than
//! hardcoding values.

/// The application name
pub const APP_NAME: &str = "Encoder Deck";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// USB vendor ID (pid.codes test VID).
pub const USB_VID: u16 = 0x1209;

/// USB product ID.
pub const USB_PID: u16 = 0x0001;

/// USB manufacturer string descriptor.
pub const USB_MANUFACTURER: &str = "Encoder Deck";

/// USB product string descriptor.
pub const USB_PRODUCT: &str = "Encoder Deck HID Keyboard";

/// USB serial number string descriptor.
pub const USB_SERIAL: &str = "ED-0001";

/// HID interrupt endpoint poll interval requested from the host, in ms.
pub const HID_POLL_MS: u8 = 1;

/// Full application title (name + version banner)
pub const fn app_title() -> &'static str {
    APP_NAME
}
