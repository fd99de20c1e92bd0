//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests.

#![cfg(any(test, feature = "std"))]

use core::cell::Cell;

use crate::*;

/// Capacity of the [`MockKeyboard`] action log.
pub const MOCK_LOG_CAPACITY: usize = 128;

/// Mock keyboard that records every sink call in order.
pub struct MockKeyboard {
    actions: heapless::Vec<KeyAction, MOCK_LOG_CAPACITY>,
    reject: Option<HidError>,
    reject_once: Option<(usize, HidError)>,
    calls: usize,
}

impl MockKeyboard {
    /// Create new mock keyboard
    pub fn new() -> Self {
        Self {
            actions: heapless::Vec::new(),
            reject: None,
            reject_once: None,
            calls: 0,
        }
    }

    /// Make every subsequent call fail with `error` (nothing is recorded).
    pub fn reject_with(&mut self, error: HidError) {
        self.reject = Some(error);
    }

    /// Fail only the `call`-th sink call (counting from 0, rejected calls
    /// included) with `error`.
    pub fn reject_call(&mut self, call: usize, error: HidError) {
        self.reject_once = Some((call, error));
    }

    /// Accept calls again.
    pub fn accept(&mut self) {
        self.reject = None;
    }

    /// Recorded calls, oldest first.
    pub fn actions(&self) -> &[KeyAction] {
        &self.actions
    }

    fn record(&mut self, action: KeyAction) -> Result<(), HidError> {
        let call = self.calls;
        self.calls = self.calls.saturating_add(1);
        if let Some(error) = self.reject {
            return Err(error);
        }
        if let Some((_, error)) = self.reject_once.filter(|&(at, _)| at == call) {
            return Err(error);
        }
        // Log overflow is a test bug; surface it as a rejected call.
        self.actions.push(action).map_err(|_| HidError::RolloverFull)
    }
}

impl Default for MockKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSink for MockKeyboard {
    type Error = HidError;

    async fn press(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        self.record(KeyAction::Press(key))
    }

    async fn release(&mut self, key: KeyCode) -> Result<(), Self::Error> {
        self.record(KeyAction::Release(key))
    }

    async fn release_all(&mut self) -> Result<(), Self::Error> {
        self.record(KeyAction::ReleaseAll)
    }
}

/// Manually advanced clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `ms`, wrapping at the counter width.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Jump to an absolute reading.
    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

/// Encoder that replays a script of `(tick, push_time)` polls.
///
/// Once the script is exhausted every poll reports `(Idle, 0)`.
pub struct ScriptedEncoder {
    script: heapless::Deque<(RawTick, u32), 32>,
    pending_push: u32,
}

impl ScriptedEncoder {
    /// Create an encoder with an empty script.
    pub fn new() -> Self {
        Self {
            script: heapless::Deque::new(),
            pending_push: 0,
        }
    }

    /// Append one poll to the script.
    pub fn push(&mut self, tick: RawTick, push_time: u32) -> Result<(), (RawTick, u32)> {
        self.script.push_back((tick, push_time))
    }

    /// Polls left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Default for ScriptedEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RotaryEncoder for ScriptedEncoder {
    fn rotate(&mut self) -> RawTick {
        // rotate() is called first each poll; it dequeues the poll and
        // stashes the push time for the push_time() call that follows.
        let (tick, push) = self.script.pop_front().unwrap_or((RawTick::Idle, 0));
        self.pending_push = push;
        tick
    }

    fn push_time(&mut self, _now: Millis) -> u32 {
        core::mem::take(&mut self.pending_push)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_keyboard_records_in_order() {
        let mut kb = MockKeyboard::new();
        kb.press(KeyCode::LEFT_SHIFT).await.ok();
        kb.press(KeyCode::A).await.ok();
        kb.release_all().await.ok();
        assert_eq!(
            kb.actions(),
            &[
                KeyAction::Press(KeyCode::LEFT_SHIFT),
                KeyAction::Press(KeyCode::A),
                KeyAction::ReleaseAll,
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_keyboard_rejects() {
        let mut kb = MockKeyboard::new();
        kb.reject_with(HidError::Disabled);
        assert_eq!(kb.press(KeyCode::A).await, Err(HidError::Disabled));
        assert!(kb.actions().is_empty());
        kb.accept();
        assert_eq!(kb.press(KeyCode::A).await, Ok(()));
    }

    #[tokio::test]
    async fn test_mock_keyboard_rejects_one_call() {
        let mut kb = MockKeyboard::new();
        kb.reject_call(1, HidError::Overflow);
        assert_eq!(kb.press(KeyCode::A).await, Ok(()));
        assert_eq!(kb.press(KeyCode::B).await, Err(HidError::Overflow));
        assert_eq!(kb.release_all().await, Ok(()));
        assert_eq!(
            kb.actions(),
            &[KeyAction::Press(KeyCode::A), KeyAction::ReleaseAll]
        );
    }

    #[test]
    fn test_manual_clock_wraps() {
        let clock = ManualClock::new(Millis::new(u32::MAX));
        clock.advance(2);
        assert_eq!(clock.now(), Millis::new(1));
    }

    #[test]
    fn test_scripted_encoder_replays_then_idles() {
        let mut enc = ScriptedEncoder::new();
        enc.push(RawTick::Forward, 40).ok();
        assert_eq!(enc.rotate(), RawTick::Forward);
        assert_eq!(enc.push_time(Millis::ZERO), 40);
        assert_eq!(enc.rotate(), RawTick::Idle);
        assert_eq!(enc.push_time(Millis::ZERO), 0);
    }
}
