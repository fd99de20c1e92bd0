//! Key-combo emission against a [`KeyboardSink`].
//!
//! [`emit`] is the only call the classification path makes: modifiers down,
//! key down, release everything. [`KeyCode::NONE`] entries are skipped so
//! the sentinel never reaches the host.
//!
//! Caps Lock is latched by the host on press rather than held like Shift,
//! so a combo that used it as a modifier taps it once more afterwards to
//! put the lock back where it was.
//!
//! A press the sink rejects stops the combo, but the release and the Caps
//! Lock re-tap still go out: nothing from a failed combo stays held into
//! the next one.

use platform::{KeyCode, KeyCombo, KeyboardSink};

/// Press and release `combo` as one keystroke.
///
/// Returns the first sink error after the cleanup has been attempted.
pub async fn emit<K: KeyboardSink>(sink: &mut K, combo: &KeyCombo) -> Result<(), K::Error> {
    let mut caps_latched = false;
    let mut pressed = Ok(());
    for modifier in combo.modifiers().iter() {
        pressed = sink.press(modifier).await;
        if pressed.is_err() {
            break;
        }
        caps_latched |= modifier.is_caps_lock();
    }
    if pressed.is_ok() && !combo.key().is_none() {
        pressed = sink.press(combo.key()).await;
    }

    let mut result = pressed.and(sink.release_all().await);

    // Only undo a toggle the host actually received.
    if caps_latched {
        let tapped = sink.press(KeyCode::CAPS_LOCK).await;
        result = result.and(tapped).and(sink.release_all().await);
    }
    result
}

/// Press the modifiers, then the key, leaving them held.
pub async fn press_combo<K: KeyboardSink>(sink: &mut K, combo: &KeyCombo) -> Result<(), K::Error> {
    for modifier in combo.modifiers().iter() {
        sink.press(modifier).await?;
    }
    if !combo.key().is_none() {
        sink.press(combo.key()).await?;
    }
    Ok(())
}

/// Release the key, then the modifiers in reverse press order.
pub async fn release_combo<K: KeyboardSink>(
    sink: &mut K,
    combo: &KeyCombo,
) -> Result<(), K::Error> {
    if !combo.key().is_none() {
        sink.release(combo.key()).await?;
    }
    for modifier in combo.modifiers().iter().rev() {
        sink.release(modifier).await?;
    }
    Ok(())
}
