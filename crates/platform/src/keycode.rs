//! USB HID keyboard usage codes.
//!
//! A [`KeyCode`] is a usage ID on the HID Keyboard/Keypad page (0x07).
//! Usage `0x00` is reserved by the HID specification and is used here as
//! the "no key" sentinel: it is a valid configuration value but must never
//! be transmitted.
//!
//! Modifier keys occupy usages `0xE0..=0xE7` and are reported through the
//! modifier bitmask of a boot keyboard report rather than a key slot.
//! Caps Lock (`0x39`) is an ordinary key that the host latches on press.

/// HID keyboard usage ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct KeyCode(u8);

impl KeyCode {
    /// Absence sentinel. Never transmitted.
    pub const NONE: Self = Self(0x00);

    /// Letter keys.
    pub const A: Self = Self(0x04);
    #[allow(missing_docs)]
    pub const B: Self = Self(0x05);
    #[allow(missing_docs)]
    pub const C: Self = Self(0x06);
    #[allow(missing_docs)]
    pub const D: Self = Self(0x07);
    #[allow(missing_docs)]
    pub const E: Self = Self(0x08);
    #[allow(missing_docs)]
    pub const F: Self = Self(0x09);
    #[allow(missing_docs)]
    pub const G: Self = Self(0x0A);
    #[allow(missing_docs)]
    pub const H: Self = Self(0x0B);
    #[allow(missing_docs)]
    pub const I: Self = Self(0x0C);
    #[allow(missing_docs)]
    pub const J: Self = Self(0x0D);
    #[allow(missing_docs)]
    pub const K: Self = Self(0x0E);
    #[allow(missing_docs)]
    pub const L: Self = Self(0x0F);
    #[allow(missing_docs)]
    pub const M: Self = Self(0x10);
    #[allow(missing_docs)]
    pub const N: Self = Self(0x11);
    #[allow(missing_docs)]
    pub const O: Self = Self(0x12);
    #[allow(missing_docs)]
    pub const P: Self = Self(0x13);
    #[allow(missing_docs)]
    pub const Q: Self = Self(0x14);
    #[allow(missing_docs)]
    pub const R: Self = Self(0x15);
    #[allow(missing_docs)]
    pub const S: Self = Self(0x16);
    #[allow(missing_docs)]
    pub const T: Self = Self(0x17);
    #[allow(missing_docs)]
    pub const U: Self = Self(0x18);
    #[allow(missing_docs)]
    pub const V: Self = Self(0x19);
    #[allow(missing_docs)]
    pub const W: Self = Self(0x1A);
    #[allow(missing_docs)]
    pub const X: Self = Self(0x1B);
    #[allow(missing_docs)]
    pub const Y: Self = Self(0x1C);
    #[allow(missing_docs)]
    pub const Z: Self = Self(0x1D);

    /// Return / Enter.
    pub const ENTER: Self = Self(0x28);
    /// Escape.
    pub const ESCAPE: Self = Self(0x29);
    /// Backspace.
    pub const BACKSPACE: Self = Self(0x2A);
    /// Tab.
    pub const TAB: Self = Self(0x2B);
    /// Space bar.
    pub const SPACE: Self = Self(0x2C);
    /// `,` / `<`
    pub const COMMA: Self = Self(0x36);
    /// `.` / `>`
    pub const PERIOD: Self = Self(0x37);
    /// Caps Lock. Toggles on press, see [`KeyCode::is_caps_lock`].
    pub const CAPS_LOCK: Self = Self(0x39);

    /// Arrow keys.
    pub const RIGHT: Self = Self(0x4F);
    #[allow(missing_docs)]
    pub const LEFT: Self = Self(0x50);
    #[allow(missing_docs)]
    pub const DOWN: Self = Self(0x51);
    #[allow(missing_docs)]
    pub const UP: Self = Self(0x52);

    /// Modifier keys (`0xE0..=0xE7`).
    pub const LEFT_CTRL: Self = Self(0xE0);
    #[allow(missing_docs)]
    pub const LEFT_SHIFT: Self = Self(0xE1);
    #[allow(missing_docs)]
    pub const LEFT_ALT: Self = Self(0xE2);
    #[allow(missing_docs)]
    pub const LEFT_GUI: Self = Self(0xE3);
    #[allow(missing_docs)]
    pub const RIGHT_CTRL: Self = Self(0xE4);
    #[allow(missing_docs)]
    pub const RIGHT_SHIFT: Self = Self(0xE5);
    #[allow(missing_docs)]
    pub const RIGHT_ALT: Self = Self(0xE6);
    #[allow(missing_docs)]
    pub const RIGHT_GUI: Self = Self(0xE7);

    /// Wrap a raw usage ID.
    pub const fn new(usage: u8) -> Self {
        Self(usage)
    }

    /// Raw usage ID.
    pub const fn usage(self) -> u8 {
        self.0
    }

    /// `true` for the absence sentinel.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// `true` for Caps Lock, which the emitter re-taps after a combo.
    pub const fn is_caps_lock(self) -> bool {
        self.0 == Self::CAPS_LOCK.0
    }

    /// `true` for the eight modifier usages `0xE0..=0xE7`.
    pub const fn is_modifier(self) -> bool {
        self.0 >= Self::LEFT_CTRL.0 && self.0 <= Self::RIGHT_GUI.0
    }

    /// Bit in the boot-report modifier byte, or `None` for ordinary keys.
    ///
    /// Left Ctrl is bit 0, Right GUI is bit 7.
    pub const fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            // Low three bits of 0xE0..=0xE7 are 0..=7: the shift never overflows.
            1u8.checked_shl((self.0 & 0x07) as u32)
        } else {
            None
        }
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<u8> for KeyCode {
    fn from(usage: u8) -> Self {
        Self(usage)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyCode;

    #[test]
    fn test_none_is_zero_usage() {
        assert!(KeyCode::NONE.is_none());
        assert_eq!(KeyCode::default(), KeyCode::NONE);
        assert!(!KeyCode::A.is_none());
    }

    #[test]
    fn test_modifier_bits_follow_usage_order() {
        assert_eq!(KeyCode::LEFT_CTRL.modifier_bit(), Some(0x01));
        assert_eq!(KeyCode::LEFT_SHIFT.modifier_bit(), Some(0x02));
        assert_eq!(KeyCode::LEFT_ALT.modifier_bit(), Some(0x04));
        assert_eq!(KeyCode::RIGHT_GUI.modifier_bit(), Some(0x80));
    }

    #[test]
    fn test_caps_lock_is_not_a_modifier_bit() {
        assert!(KeyCode::CAPS_LOCK.is_caps_lock());
        assert!(!KeyCode::CAPS_LOCK.is_modifier());
        assert_eq!(KeyCode::CAPS_LOCK.modifier_bit(), None);
    }

    #[test]
    fn test_letters_are_contiguous() {
        assert_eq!(KeyCode::Z.usage().checked_sub(KeyCode::A.usage()), Some(25));
    }
}
