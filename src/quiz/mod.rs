//! Multiplication quiz core.
//!
//! Everything here is presentation-free: the terminal UI drives a
//! [`QuizSession`] through its input operations and re-reads a
//! [`SessionSnapshot`] after every call.

mod config;
mod keypad;
mod operands;
mod session;

pub use config::{
    SessionConfig, SessionConfigError, MAX_QUESTIONS, MAX_TABLE, MIN_QUESTIONS, QUESTION_STEP,
};
pub use keypad::{Keypad, KeypadKey, KEYPAD_COLS, KEYPAD_LAYOUT, KEYPAD_ROWS};
pub use operands::{OperandSource, RandomOperands, MAX_OPERAND};
pub use session::{QuizSession, SessionSnapshot, SubmissionResult};
