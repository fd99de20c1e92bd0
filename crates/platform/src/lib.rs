//! Hardware Abstraction Layer (HAL) for the encoder keyboard controller
//!
//! This crate provides the trait seams and plain data types shared by the
//! classification engine and the firmware, so the engine can be developed
//! and tested without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: boot, USB HID, board pins)
//!         ↓
//! Feature Layer (input crate: press classification, key-combo emission)
//!         ↓
//! Platform HAL (this crate - trait abstractions + newtypes)
//!         ↓
//! Hardware Layer (Embassy HAL + embassy-usb)
//! ```
//!
//! # Abstractions
//!
//! - [`KeyboardSink`] - press / release keys on the host HID interface
//! - [`RotaryEncoder`] - resolved encoder ticks + integrated switch duration
//! - [`Clock`] - wrapping millisecond counter
//! - [`gpio`] - active-level resolution for digital inputs
//!
//! # Features
//!
//! - `std`: expose [`mocks`] to other crates' tests
//! - `defmt`: derive `defmt::Format` on public types
//!
//! # Example
//!
//! ```no_run
//! use platform::{KeyCode, KeyCombo, KeyboardSink, Modifiers};
//!
//! async fn send_ctrl_s<K: KeyboardSink>(sink: &mut K) -> Result<(), K::Error> {
//!     let combo = KeyCombo::new(KeyCode::S, Modifiers::one(KeyCode::LEFT_CTRL));
//!     for modifier in combo.modifiers().iter() {
//!         sink.press(modifier).await?;
//!     }
//!     sink.press(combo.key()).await?;
//!     sink.release_all().await
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // pin names and usage IDs in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

pub mod config;
pub mod encoder;
pub mod gpio;
pub mod keyboard;
pub mod keycode;
pub mod time;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use encoder::{Direction, Polarity, RawTick, RotaryEncoder};
pub use keyboard::{HidError, KeyAction, KeyCombo, KeyboardSink, Modifiers, MAX_MODIFIERS};
pub use keycode::KeyCode;
pub use time::{Clock, EmbassyClock, Millis};

// Re-export GPIO types
pub use gpio::{ActiveLevel, PinState};
