//! Session text buffer fed by committed key presses.

use crate::debounce::KeyPress;

/// Ordered sequence of committed characters
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one character
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Remove the last character. No-op on an empty buffer.
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Route a committed press into the buffer
    pub fn apply(&mut self, press: KeyPress) {
        match press {
            KeyPress::Append(c) => self.push(c),
            KeyPress::DeleteLast => self.delete_last(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
