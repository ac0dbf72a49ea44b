//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "mathquizzler", version, about = "Multiplication table quiz in the terminal")]
pub struct Cli {
    /// Multiplication table to preselect (0-12).
    #[arg(short, long)]
    pub table: Option<u32>,

    /// Number of questions to preselect (5, 10, 15 or 20).
    #[arg(short, long)]
    pub questions: Option<u32>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to write to.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Reads config from `--config` or the default path, applies
    /// command-line overrides, then validates the result once.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(table) = self.table {
            config.defaults.table = table;
        }
        if let Some(questions) = self.questions {
            config.defaults.question_count = questions;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}
