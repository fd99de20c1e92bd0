//! Encoder Deck firmware
//!
//! USB HID keyboard for STM32F401 boards: four rotary encoders and four
//! push-buttons, each interaction turned into a keystroke.
//!
//! # Architecture
//!
//! ```text
//! Application (main.rs: boot, USB, polling loop)
//!         ↓
//! Board data (board, layout, boot)   Drivers (encoder, hid)
//!         ↓                                 ↓
//! Classification engine (input crate)
//!         ↓
//! Platform HAL (platform crate, embedded-hal, embassy)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the STM32F401 target (embassy, embassy-usb, defmt)
//! - `std` - Enable standard library (host testing)
//!
//! # Hardware Target
//!
//! ```bash
//! cargo build --release --target thumbv7em-none-eabihf --features hardware
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::await_holding_lock)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)]
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(async_fn_in_trait)]

pub mod board;
pub mod boot;
pub mod encoder;
pub mod hid;
pub mod layout;

pub use board::{BoardProfile, EncoderWiring, BLACK_PILL, BUTTON_COUNT, ENCODER_COUNT};
pub use boot::{resolve_polarity, BOOT_SEQUENCE_STEPS, POST_USB_SETTLE_MS, USB_WARMUP_MS};
pub use encoder::QuadratureEncoder;
pub use hid::{HidKeyboard, ReportState, ReportWriter, KEY_SLOTS};
pub use layout::{Layout, BUTTONS, CONTROL_COUNT};

/// Layout flashed onto the device.
pub const ACTIVE_LAYOUT: Layout = Layout::Direct;
