use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::quiz::SessionConfig;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the setup screen opens with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Multiplication table (0-12, default: 2).
    #[serde(default = "default_table")]
    pub table: u32,
    /// Questions per session (5, 10, 15 or 20, default: 10).
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_table() -> u32 {
    SessionConfig::default().table()
}

fn default_question_count() -> u32 {
    SessionConfig::default().question_count()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            table: default_table(),
            question_count: default_question_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Defaults {
    pub fn session_config(&self) -> Result<SessionConfig, crate::quiz::SessionConfigError> {
        SessionConfig::new(self.table, self.question_count)
    }
}

impl LoggingConfig {
    /// Resolved log file location.
    ///
    /// Uses `~/.local/share/mathquizzler/mathquizzler.log` on Linux, or the
    /// equivalent from `dirs::data_local_dir()`.
    pub fn file_path(&self) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mathquizzler")
                .join("mathquizzler.log"),
        }
    }
}
