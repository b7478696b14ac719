//! Key-press debouncing state machine.
//!
//! A fingertip dwelling over a key is reported as touching it on every
//! frame, so a single physical tap would otherwise register dozens of
//! presses. The debouncer suppresses repeats while contact is held and
//! layers a double-tap-to-delete correction gesture on top: re-touching
//! the key committed less than a second ago removes the last character
//! instead of appending another one.

use crate::constants::DOUBLE_TAP_WINDOW_SECS;
use crate::layout::KeyId;
use std::time::{Duration, Instant};

/// A committed press event produced by the debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// Append a character to the text buffer
    Append(char),
    /// Remove the last character from the text buffer
    DeleteLast,
}

/// Debounces per-frame touch signals into discrete press events.
///
/// Two logical states: IDLE (no contact) and HELD (contact committed and
/// sustained). State is owned exclusively by the debouncer and mutated
/// once per frame.
#[derive(Debug)]
pub struct Debouncer {
    is_held: bool,
    held_key: Option<KeyId>,
    last_committed: Option<KeyId>,
    last_commit_time: Option<Instant>,
    double_tap_window: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    /// Create a debouncer with the default 1-second double-tap window
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(Duration::from_secs_f64(DOUBLE_TAP_WINDOW_SECS))
    }

    /// Create a debouncer with a custom double-tap window
    #[must_use]
    pub fn with_window(double_tap_window: Duration) -> Self {
        Self {
            is_held: false,
            held_key: None,
            last_committed: None,
            last_commit_time: None,
            double_tap_window,
        }
    }

    /// Advance one frame, sampling the monotonic clock
    pub fn update(&mut self, touch: Option<KeyId>) -> Option<KeyPress> {
        self.update_at(touch, Instant::now())
    }

    /// Advance one frame with an explicit timestamp.
    ///
    /// Transition rules:
    /// 1. No touch: release the hold, commit nothing.
    /// 2. Touch while held: suppress the repeat, commit nothing.
    /// 3. Fresh touch: commit. Re-touching the key committed within the
    ///    double-tap window commits a delete (correction gesture);
    ///    otherwise the key commits normally, with Backspace deleting.
    ///
    /// Every commit, deletes included, updates the committed key and
    /// timestamp, so rapid repeated taps on one key keep alternating
    /// between append and delete while each lands inside the window.
    pub fn update_at(&mut self, touch: Option<KeyId>, now: Instant) -> Option<KeyPress> {
        let Some(key) = touch else {
            self.is_held = false;
            self.held_key = None;
            return None;
        };

        if self.is_held {
            return None;
        }

        let press = if self.is_double_tap(key, now) {
            KeyPress::DeleteLast
        } else {
            match key {
                KeyId::Char(c) => KeyPress::Append(c),
                KeyId::Backspace => KeyPress::DeleteLast,
            }
        };

        self.is_held = true;
        self.held_key = Some(key);
        self.last_committed = Some(key);
        self.last_commit_time = Some(now);

        Some(press)
    }

    fn is_double_tap(&self, key: KeyId, now: Instant) -> bool {
        match (self.last_committed, self.last_commit_time) {
            (Some(last), Some(at)) => last == key && now.duration_since(at) < self.double_tap_window,
            _ => false,
        }
    }

    /// Key currently held down, for highlight rendering
    #[must_use]
    pub fn held_key(&self) -> Option<KeyId> {
        self.held_key
    }

    /// Reset to the session-start state
    pub fn reset(&mut self) {
        self.is_held = false;
        self.held_key = None;
        self.last_committed = None;
        self.last_commit_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn q() -> Option<KeyId> {
        Some(KeyId::Char('Q'))
    }

    #[test]
    fn test_fresh_touch_commits_once() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        assert_eq!(debouncer.update_at(q(), t0), Some(KeyPress::Append('Q')));

        // Held across many frames: no further commits
        for i in 1..30 {
            let t = t0 + Duration::from_millis(33 * i);
            assert_eq!(debouncer.update_at(q(), t), None);
        }
    }

    #[test]
    fn test_release_clears_hold() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.update_at(q(), t0);
        assert_eq!(debouncer.held_key(), Some(KeyId::Char('Q')));

        debouncer.update_at(None, t0 + Duration::from_millis(100));
        assert_eq!(debouncer.held_key(), None);
    }

    #[test]
    fn test_double_tap_deletes() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        assert_eq!(debouncer.update_at(q(), t0), Some(KeyPress::Append('Q')));
        debouncer.update_at(None, t0 + Duration::from_millis(100));

        // Second tap on the same key inside the window
        let press = debouncer.update_at(q(), t0 + Duration::from_millis(400));
        assert_eq!(press, Some(KeyPress::DeleteLast));
    }

    #[test]
    fn test_retap_after_window_appends() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.update_at(q(), t0);
        debouncer.update_at(None, t0 + Duration::from_millis(500));

        let press = debouncer.update_at(q(), t0 + Duration::from_millis(1500));
        assert_eq!(press, Some(KeyPress::Append('Q')));
    }

    #[test]
    fn test_different_key_never_double_taps() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.update_at(q(), t0);
        debouncer.update_at(None, t0 + Duration::from_millis(50));

        let press = debouncer.update_at(Some(KeyId::Char('W')), t0 + Duration::from_millis(100));
        assert_eq!(press, Some(KeyPress::Append('W')));
    }

    #[test]
    fn test_backspace_is_debounced_too() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        let press = debouncer.update_at(Some(KeyId::Backspace), t0);
        assert_eq!(press, Some(KeyPress::DeleteLast));

        // Holding over Backspace deletes exactly once
        for i in 1..10 {
            let t = t0 + Duration::from_millis(33 * i);
            assert_eq!(debouncer.update_at(Some(KeyId::Backspace), t), None);
        }
    }

    #[test]
    fn test_rapid_taps_keep_toggling_delete() {
        // Deletes also update the committed key and timestamp, so a burst
        // of taps on one key alternates append, delete, delete, ... while
        // each tap lands within the window of the previous commit.
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        assert_eq!(debouncer.update_at(q(), t0), Some(KeyPress::Append('Q')));
        debouncer.update_at(None, t0 + Duration::from_millis(100));

        let second = debouncer.update_at(q(), t0 + Duration::from_millis(200));
        assert_eq!(second, Some(KeyPress::DeleteLast));
        debouncer.update_at(None, t0 + Duration::from_millis(300));

        let third = debouncer.update_at(q(), t0 + Duration::from_millis(400));
        assert_eq!(third, Some(KeyPress::DeleteLast));
    }

    #[test]
    fn test_custom_window() {
        let mut debouncer = Debouncer::with_window(Duration::from_millis(200));
        let t0 = Instant::now();

        debouncer.update_at(q(), t0);
        debouncer.update_at(None, t0 + Duration::from_millis(50));

        // 300 ms later: outside the shortened window
        let press = debouncer.update_at(q(), t0 + Duration::from_millis(300));
        assert_eq!(press, Some(KeyPress::Append('Q')));
    }

    #[test]
    fn test_reset() {
        let mut debouncer = Debouncer::new();
        let t0 = Instant::now();

        debouncer.update_at(q(), t0);
        debouncer.reset();

        // After reset a tap inside what would have been the window appends
        let press = debouncer.update_at(q(), t0 + Duration::from_millis(100));
        assert_eq!(press, Some(KeyPress::Append('Q')));
    }
}
