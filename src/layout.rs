//! Virtual keyboard layout.
//!
//! The layout is a fixed, ordered set of square keys defined once at
//! startup. Key rectangles are hit-tested with a strict interior check,
//! matching the open-interval containment used for fingertip contact.

use crate::constants::KEY_SIZE;
use std::fmt;

/// Identifier of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyId {
    /// A printable character key
    Char(char),
    /// The backspace key
    Backspace,
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyId::Char(c) => write!(f, "{c}"),
            KeyId::Backspace => write!(f, "Backspace"),
        }
    }
}

/// A 2D pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Square key rectangle with top-left origin and fixed edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRect {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl KeyRect {
    #[must_use]
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Strict interior containment: boundary points do not count
    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        self.x < point.x
            && point.x < self.x + self.size
            && self.y < point.y
            && point.y < self.y + self.size
    }
}

/// A key: identifier plus its on-screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub id: KeyId,
    pub rect: KeyRect,
}

/// Ordered, immutable set of keys for one session
#[derive(Debug, Clone)]
pub struct KeyLayout {
    keys: Vec<Key>,
}

impl KeyLayout {
    /// Build a layout from (identifier, top-left) pairs with a uniform key size
    #[must_use]
    pub fn new(positions: &[(KeyId, (i32, i32))], key_size: i32) -> Self {
        let keys = positions
            .iter()
            .map(|&(id, (x, y))| Key {
                id,
                rect: KeyRect::new(x, y, key_size),
            })
            .collect();
        Self { keys }
    }

    /// The fixed 27-key QWERTY layout: three letter rows plus Backspace
    #[must_use]
    pub fn qwerty() -> Self {
        let mut positions: Vec<(KeyId, (i32, i32))> = Vec::with_capacity(27);

        let rows: [(&str, i32); 3] = [("QWERTYUIOP", 100), ("ASDFGHJKL", 200), ("ZXCVBNM", 300)];
        for (letters, y) in rows {
            for (col, c) in letters.chars().enumerate() {
                positions.push((KeyId::Char(c), (50 + 100 * col as i32, y)));
            }
            // Backspace sits at the end of the home row
            if y == 200 {
                positions.push((KeyId::Backspace, (950, 200)));
            }
        }

        Self::new(&positions, KEY_SIZE)
    }

    /// Keys in definition order
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
