use crate::config::Defaults;
use crate::quiz::{SessionConfig, SessionConfigError};
use crate::ui::mvi::UiState;

/// Focusable rows of the setup screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Table,
    Questions,
    Start,
}

impl SetupField {
    pub const ALL: [SetupField; 3] = [SetupField::Table, SetupField::Questions, SetupField::Start];

    pub fn index(self) -> usize {
        match self {
            SetupField::Table => 0,
            SetupField::Questions => 1,
            SetupField::Start => 2,
        }
    }
}

/// Setup screen: owns the table and question count until a quiz starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupState {
    pub table: u32,
    pub question_count: u32,
    pub focused: SetupField,
}

impl Default for SetupState {
    fn default() -> Self {
        Self::from_config(SessionConfig::default())
    }
}

impl UiState for SetupState {}

impl SetupState {
    pub fn from_config(config: SessionConfig) -> Self {
        Self {
            table: config.table(),
            question_count: config.question_count(),
            focused: SetupField::default(),
        }
    }

    pub fn from_defaults(defaults: &Defaults) -> Self {
        Self {
            table: defaults.table,
            question_count: defaults.question_count,
            focused: SetupField::default(),
        }
    }

    /// The session these settings describe.
    pub fn session_config(&self) -> Result<SessionConfig, SessionConfigError> {
        SessionConfig::new(self.table, self.question_count)
    }
}
