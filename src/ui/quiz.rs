//! Quiz screen: owns the running session and the keypad highlight.

use crate::quiz::{Keypad, QuizSession, SessionConfig, SubmissionResult};

#[derive(Debug)]
pub struct QuizScreen {
    session: QuizSession,
    keypad: Keypad,
    final_score: Option<u32>,
}

impl QuizScreen {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            keypad: Keypad::new(),
            final_score: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Set once the last answer has been graded.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn config(&self) -> SessionConfig {
        *self.session.config()
    }

    /// A digit typed on the keyboard; also highlights the matching key.
    pub fn type_digit(&mut self, digit: char) {
        self.keypad.focus_digit(digit);
        self.session.append_digit(digit);
    }

    pub fn delete_digit(&mut self) {
        self.session.delete_last_digit();
    }

    pub fn move_keypad(&mut self, d_row: isize, d_col: isize) {
        self.keypad.move_cursor(d_row, d_col);
    }

    /// Presses the highlighted keypad key.
    pub fn press_keypad(&mut self) -> bool {
        self.keypad.selected().press(&mut self.session)
    }

    /// The Submit control.
    pub fn submit(&mut self) -> SubmissionResult {
        let result = self.session.submit_answer();
        if let SubmissionResult::Finished(score) = result {
            self.final_score = Some(score);
        }
        result
    }
}
