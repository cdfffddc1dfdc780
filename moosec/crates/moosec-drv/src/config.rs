//! Configuration for the moosec driver.
//!
//! Settings come from a `moosec.toml` file; command-line flags are applied
//! on top of it by the binary.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "moosec.toml";

/// Fallback job count when the CPU count does not fit.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// What the driver prints for each lexed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitType {
    /// One token per line, `line:column  kind`.
    #[default]
    Tokens,
    /// One JSON array of tokens per file, one file per line.
    Json,
    /// Lex and report diagnostics only.
    None,
}

impl fmt::Display for EmitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EmitType::Tokens => "tokens",
            EmitType::Json => "json",
            EmitType::None => "none",
        };
        f.write_str(name)
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Default output format.
    #[serde(default)]
    pub emit: EmitType,

    /// Print phase timings after the run.
    #[serde(default)]
    pub time: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lex: LexConfig,
}

/// Lexing options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,

    /// Exit with failure when any file has a lexical error.
    #[serde(default = "default_true")]
    pub fail_on_error: bool,
}

fn default_true() -> bool {
    true
}

/// One job per CPU.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            emit: EmitType::default(),
            time: false,
            lex: LexConfig::default(),
        }
    }
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            fail_on_error: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/moosec/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("moosec").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("moosec").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
