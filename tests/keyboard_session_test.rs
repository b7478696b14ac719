//! Frame-sequence tests driving the pure keyboard core end to end:
//! fingertip positions -> hit test -> debouncer -> buffer and tally.

use proptest::prelude::*;
use std::time::{Duration, Instant};
use virtual_keyboard::{
    debounce::{Debouncer, KeyPress},
    hit_test::hit_test,
    layout::{KeyId, KeyLayout, PixelPoint},
    tally::PressTally,
    text_buffer::TextBuffer,
};

/// Drives one session over a sequence of (fingertip pair, timestamp) frames
struct Session {
    layout: KeyLayout,
    debouncer: Debouncer,
    buffer: TextBuffer,
    tally: PressTally,
    start: Instant,
}

impl Session {
    fn new(layout: KeyLayout) -> Self {
        Self {
            layout,
            debouncer: Debouncer::new(),
            buffer: TextBuffer::new(),
            tally: PressTally::new(),
            start: Instant::now(),
        }
    }

    /// Process one frame; returns the commit, if any
    fn frame(&mut self, fingertips: &[PixelPoint], at_ms: u64) -> Option<KeyPress> {
        let touched = hit_test(fingertips, &self.layout);
        let now = self.start + Duration::from_millis(at_ms);
        let press = self.debouncer.update_at(touched, now);

        if let Some(press) = press {
            self.buffer.apply(press);
            if let KeyPress::Append(c) = press {
                self.tally.record(KeyId::Char(c));
            }
        }

        press
    }
}

fn pair(x: i32, y: i32) -> [PixelPoint; 2] {
    [PixelPoint::new(x, y), PixelPoint::new(x + 5, y + 5)]
}

fn scenario_layout() -> KeyLayout {
    KeyLayout::new(
        &[(KeyId::Char('Q'), (0, 0)), (KeyId::Char('W'), (150, 100))],
        70,
    )
}

#[test]
fn test_double_tap_scenario() {
    // Frames within one second: inside Q, inside Q, none, inside Q.
    // First frame appends, second is suppressed by the hold, third
    // releases, fourth is a double-tap delete.
    let mut session = Session::new(scenario_layout());

    assert_eq!(session.frame(&pair(30, 30), 0), Some(KeyPress::Append('Q')));
    assert_eq!(session.buffer.as_str(), "Q");

    assert_eq!(session.frame(&pair(32, 31), 100), None);
    assert_eq!(session.buffer.as_str(), "Q");

    assert_eq!(session.frame(&[], 200), None);
    assert_eq!(session.buffer.as_str(), "Q");

    assert_eq!(session.frame(&pair(30, 30), 300), Some(KeyPress::DeleteLast));
    assert_eq!(session.buffer.as_str(), "");

    // Only the first commit counted
    assert_eq!(session.tally.count(KeyId::Char('Q')), 1);
}

#[test]
fn test_moving_between_keys_types_both() {
    let mut session = Session::new(scenario_layout());

    session.frame(&pair(30, 30), 0);
    session.frame(&[], 100);
    // Different key right away: never a double-tap
    session.frame(&pair(180, 130), 200);

    assert_eq!(session.buffer.as_str(), "QW");
    assert_eq!(session.tally.count(KeyId::Char('Q')), 1);
    assert_eq!(session.tally.count(KeyId::Char('W')), 1);
}

#[test]
fn test_split_fingertips_touch_nothing() {
    let mut session = Session::new(scenario_layout());

    // Index tip on Q, middle tip on W: no key has both inside
    let fingertips = [PixelPoint::new(30, 30), PixelPoint::new(180, 130)];
    assert_eq!(session.frame(&fingertips, 0), None);
    assert!(session.buffer.is_empty());
}

#[test]
fn test_typing_a_word_on_qwerty() {
    let mut session = Session::new(KeyLayout::qwerty());

    // Centers of H (550,200), I (750,100) on the QWERTY grid, with taps
    // spaced beyond the double-tap window
    let h = pair(580, 230);
    let i = pair(780, 130);

    session.frame(&h, 0);
    session.frame(&[], 500);
    session.frame(&i, 1500);
    session.frame(&[], 2000);

    assert_eq!(session.buffer.as_str(), "HI");
    assert_eq!(session.tally.total(), 2);
}

#[test]
fn test_backspace_key_on_qwerty() {
    let mut session = Session::new(KeyLayout::qwerty());

    // Type A, then hold over Backspace (at 950,200) for several frames
    session.frame(&pair(80, 230), 0);
    session.frame(&[], 500);
    for (n, ms) in [1500u64, 1533, 1566, 1600].iter().enumerate() {
        let press = session.frame(&pair(980, 230), *ms);
        if n == 0 {
            assert_eq!(press, Some(KeyPress::DeleteLast));
        } else {
            assert_eq!(press, None);
        }
    }

    // Exactly one character deleted despite the long dwell
    assert_eq!(session.buffer.as_str(), "");
    assert_eq!(session.tally.count(KeyId::Backspace), 0);
}

#[test]
fn test_triple_tap_alternates_append_delete_delete() {
    let mut session = Session::new(scenario_layout());

    let mut commits = Vec::new();
    for ms in [0u64, 100, 200, 300, 400] {
        commits.extend(session.frame(&pair(30, 30), ms));
        commits.extend(session.frame(&[], ms + 50));
    }
    assert_eq!(
        commits,
        vec![
            KeyPress::Append('Q'),
            KeyPress::DeleteLast,
            KeyPress::DeleteLast,
            KeyPress::DeleteLast,
            KeyPress::DeleteLast,
        ]
    );
    assert!(session.buffer.is_empty());
}

proptest! {
    #[test]
    fn prop_single_dwell_commits_once(
        frames in 1usize..200,
        x in 1i32..70,
        y in 1i32..70,
    ) {
        let mut session = Session::new(scenario_layout());
        let mut commits = 0;

        for i in 0..frames {
            let point = [PixelPoint::new(x, y)];
            if session.frame(&point, 33 * i as u64).is_some() {
                commits += 1;
            }
        }

        prop_assert_eq!(commits, 1);
        prop_assert_eq!(session.buffer.len(), 1);
    }

    #[test]
    fn prop_points_outside_all_keys_never_commit(
        x in 230i32..1000,
        y in 200i32..1000,
        frames in 1usize..50,
    ) {
        let mut session = Session::new(scenario_layout());

        for i in 0..frames {
            let point = [PixelPoint::new(x, y)];
            prop_assert_eq!(session.frame(&point, 33 * i as u64), None);
        }

        prop_assert!(session.buffer.is_empty());
        prop_assert!(session.tally.is_empty());
    }
}
