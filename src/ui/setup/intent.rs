use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupIntent {
    /// Move focus to the previous row, wrapping from the first to Start.
    FocusPrev,
    FocusNext,
    /// Stepper "+" on the focused row. No-op on the Start button.
    Increment,
    /// Stepper "-" on the focused row. No-op on the Start button.
    Decrement,
}

impl Intent for SetupIntent {}
