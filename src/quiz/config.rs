use thiserror::Error;

/// Highest multiplication table that can be practised.
pub const MAX_TABLE: u32 = 12;
/// Fewest questions in a session.
pub const MIN_QUESTIONS: u32 = 5;
/// Most questions in a session.
pub const MAX_QUESTIONS: u32 = 20;
/// Question counts move in steps of this size.
pub const QUESTION_STEP: u32 = 5;

/// Errors produced when building a [`SessionConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionConfigError {
    #[error("Table {table} is out of range (0-{max})", max = MAX_TABLE)]
    TableOutOfRange { table: u32 },

    #[error(
        "Question count {count} must be between {min} and {max} in steps of {step}",
        min = MIN_QUESTIONS,
        max = MAX_QUESTIONS,
        step = QUESTION_STEP
    )]
    InvalidQuestionCount { count: u32 },
}

/// Settings fixed for the lifetime of one quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    table: u32,
    question_count: u32,
}

impl SessionConfig {
    pub fn new(table: u32, question_count: u32) -> Result<Self, SessionConfigError> {
        if table > MAX_TABLE {
            return Err(SessionConfigError::TableOutOfRange { table });
        }
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&question_count)
            || question_count % QUESTION_STEP != 0
        {
            return Err(SessionConfigError::InvalidQuestionCount {
                count: question_count,
            });
        }
        Ok(Self {
            table,
            question_count,
        })
    }

    /// The fixed multiplicand of every question.
    pub fn table(&self) -> u32 {
        self.table
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            table: 2,
            question_count: 10,
        }
    }
}
