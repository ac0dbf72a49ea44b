//! The 4×3 on-screen keypad.
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ← 0 ✔
//! ```
//!
//! The ✔ key is deliberately inert. Answers are submitted through the
//! separate Submit control, and wiring ✔ to it would need a product call.

use crate::quiz::session::QuizSession;

pub const KEYPAD_ROWS: usize = 4;
pub const KEYPAD_COLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Digit(char),
    Delete,
    Confirm,
}

pub const KEYPAD_LAYOUT: [[KeypadKey; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [
        KeypadKey::Digit('1'),
        KeypadKey::Digit('2'),
        KeypadKey::Digit('3'),
    ],
    [
        KeypadKey::Digit('4'),
        KeypadKey::Digit('5'),
        KeypadKey::Digit('6'),
    ],
    [
        KeypadKey::Digit('7'),
        KeypadKey::Digit('8'),
        KeypadKey::Digit('9'),
    ],
    [KeypadKey::Delete, KeypadKey::Digit('0'), KeypadKey::Confirm],
];

impl KeypadKey {
    pub fn label(&self) -> String {
        match self {
            KeypadKey::Digit(digit) => digit.to_string(),
            KeypadKey::Delete => "←".to_string(),
            KeypadKey::Confirm => "✔".to_string(),
        }
    }

    /// Applies the key to a session. Returns whether the key did anything.
    pub fn press(&self, session: &mut QuizSession) -> bool {
        match self {
            KeypadKey::Digit(digit) => {
                session.append_digit(*digit);
                true
            }
            KeypadKey::Delete => {
                session.delete_last_digit();
                true
            }
            KeypadKey::Confirm => {
                tracing::debug!("Confirm key pressed; submission goes through Submit");
                false
            }
        }
    }
}

/// Keypad with a highlighted key, navigated by arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keypad {
    row: usize,
    col: usize,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// (row, col) of the highlighted key.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn selected(&self) -> KeypadKey {
        KEYPAD_LAYOUT[self.row][self.col]
    }

    /// Moves the highlight, wrapping at the edges.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        self.row = wrap(self.row, d_row, KEYPAD_ROWS);
        self.col = wrap(self.col, d_col, KEYPAD_COLS);
    }

    /// Highlights the key carrying `digit`, if any.
    pub fn focus_digit(&mut self, digit: char) {
        for (row, keys) in KEYPAD_LAYOUT.iter().enumerate() {
            if let Some(col) = keys.iter().position(|key| *key == KeypadKey::Digit(digit)) {
                self.row = row;
                self.col = col;
                return;
            }
        }
    }
}

fn wrap(value: usize, delta: isize, len: usize) -> usize {
    (value as isize + delta).rem_euclid(len as isize) as usize
}
