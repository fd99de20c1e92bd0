//! Input-event classification engine
//!
//! Turns continuously sampled control signals (switch level, encoder tick)
//! into discrete, duration-qualified events and the key combos they map to.
//!
//! # Pipeline
//!
//! ```text
//! Registry::sweep (one pass over every control, fixed order)
//!   ├─ ControlSource::sample    level → ElapsedTracker, or encoder driver
//!   ├─ Control::step            rotation combo + PressState::classify
//!   └─ emitter::emit            modifiers down, key down, release all
//! ```
//!
//! Everything here is `no_std`, allocation-free and hardware-agnostic: pins
//! come in through `embedded-hal`, time through [`platform::Clock`], and
//! keystrokes leave through [`platform::KeyboardSink`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)]

pub mod classifier;
pub mod control;
pub mod elapsed;
pub mod emitter;
pub mod keymap;
pub mod registry;
pub mod source;
pub mod thresholds;

pub use classifier::{PressEvent, PressEvents, PressState};
pub use control::{Control, ControlCombos, ControlKind};
pub use elapsed::ElapsedTracker;
pub use keymap::KeyMap;
pub use registry::{Registry, RegistryError, SweepReport};
pub use source::{AnySource, ButtonSource, ControlSource, EncoderSource, Sample};
pub use thresholds::{Bucket, Thresholds};
