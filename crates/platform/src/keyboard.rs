//! Keyboard sink abstraction and key-combo value types.

use crate::keycode::KeyCode;

/// Maximum number of modifiers carried by one [`KeyCombo`].
pub const MAX_MODIFIERS: usize = 2;

/// Host-facing keyboard: press and release individual usages.
///
/// Implementations send one HID report per call. Callers that want a
/// complete keystroke use `input::emitter::emit`, which presses the
/// modifiers, presses the key and then releases everything.
pub trait KeyboardSink {
    /// Error type
    type Error;

    /// Mark `key` as held and report it to the host.
    async fn press(&mut self, key: KeyCode) -> Result<(), Self::Error>;

    /// Mark `key` as released and report it to the host.
    async fn release(&mut self, key: KeyCode) -> Result<(), Self::Error>;

    /// Release every held key and modifier.
    async fn release_all(&mut self) -> Result<(), Self::Error>;
}

/// Keyboard sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidError {
    /// Host has not configured the HID interface yet
    #[error("HID interface not configured by host")]
    NotConfigured,
    /// Endpoint disabled (cable unplugged or bus reset)
    #[error("HID endpoint disabled")]
    Disabled,
    /// All six boot-report key slots are in use
    #[error("HID key rollover exhausted")]
    RolloverFull,
    /// Serialized report does not fit the endpoint buffer
    #[error("HID report exceeds endpoint buffer")]
    Overflow,
}

/// Up to [`MAX_MODIFIERS`] modifier keys.
///
/// Unused slots hold [`KeyCode::NONE`]; [`Modifiers::iter`] skips them, so
/// a zero-, one- or two-modifier list all look the same to the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers([KeyCode; MAX_MODIFIERS]);

impl Modifiers {
    /// No modifiers.
    pub const fn none() -> Self {
        Self([KeyCode::NONE; MAX_MODIFIERS])
    }

    /// A single modifier (may itself be [`KeyCode::NONE`]).
    pub const fn one(first: KeyCode) -> Self {
        Self([first, KeyCode::NONE])
    }

    /// Two modifiers, pressed in the given order.
    pub const fn two(first: KeyCode, second: KeyCode) -> Self {
        Self([first, second])
    }

    /// Iterate over the modifiers that are not [`KeyCode::NONE`].
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = KeyCode> + '_ {
        self.0.iter().copied().filter(|code| !code.is_none())
    }

    /// `true` when any modifier is Caps Lock.
    pub fn contains_caps_lock(&self) -> bool {
        self.iter().any(KeyCode::is_caps_lock)
    }

    /// `true` when every slot is [`KeyCode::NONE`].
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// A fully resolved keystroke: one key plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCombo {
    key: KeyCode,
    modifiers: Modifiers,
}

impl KeyCombo {
    /// Combine a key with its modifiers.
    pub const fn new(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Key without modifiers.
    pub const fn plain(key: KeyCode) -> Self {
        Self::new(key, Modifiers::none())
    }

    /// Main key (may be [`KeyCode::NONE`]).
    pub const fn key(&self) -> KeyCode {
        self.key
    }

    /// Modifier list.
    pub const fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// `true` when nothing in the combo would be transmitted.
    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.modifiers.is_empty()
    }
}

/// One call on a [`KeyboardSink`], as recorded by test doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// `press(key)`
    Press(KeyCode),
    /// `release(key)`
    Release(KeyCode),
    /// `release_all()`
    ReleaseAll,
}
