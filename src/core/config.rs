//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.checklist/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChecklistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub database_path: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_ids: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATABASE_FILE: &str = "checklist.db";
pub const DEFAULT_LOG_FILE: &str = "checklist.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_SHOW_IDS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub database_path: PathBuf,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub show_ids: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Early Log
// ============================================================================

/// Log lines produced while loading config, before the logger exists.
/// `main` replays them once logging is set up.
#[derive(Debug, Default)]
pub struct EarlyLog {
    records: Vec<(Level, String)>,
}

impl EarlyLog {
    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.records.push((level, message.into()));
    }

    pub fn records(&self) -> &[(Level, String)] {
        &self.records
    }

    /// Sends every held line to the installed logger, oldest first.
    pub fn replay(self) {
        for (level, message) in self.records {
            log::log!(level, "{message}");
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.checklist`, the home of the config, database and log.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".checklist"))
}

/// Returns the path to `~/.checklist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `path`, or from `~/.checklist/config.toml` when `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChecklistConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(
    path: Option<&Path>,
    early: &mut EarlyLog,
) -> Result<ChecklistConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            early.push(Level::Warn, "Could not determine home directory, using default config");
            return Ok(ChecklistConfig::default());
        }
    };

    if !path.exists() {
        early.push(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        );
        generate_default_config(&path, early);
        return Ok(ChecklistConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ChecklistConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    early.push(Level::Info, format!("Loaded config from {}", path.display()));
    early.push(Level::Debug, format!("Config: {config:?}"));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, early: &mut EarlyLog) {
    let default_content = r#"# Checklist Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# database_path = "~/.checklist/checklist.db"   # Or set CHECKLIST_DB env var
# log_file = "~/.checklist/checklist.log"       # Or set CHECKLIST_LOG env var
# log_level = "info"                            # off, error, warn, info, debug, trace

# [display]
# show_ids = true                               # Prefix listed items with their id
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        early.push(Level::Warn, format!("Failed to create config directory: {e}"));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        early.push(Level::Warn, format!("Failed to write default config: {e}"));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_database` is the `--db` flag (None = not specified).
pub fn resolve(
    config: &ChecklistConfig,
    cli_database: Option<&Path>,
    early: &mut EarlyLog,
) -> ResolvedConfig {
    let base = data_dir().unwrap_or_else(|| PathBuf::from("."));

    // Database: CLI → env → config → default
    let database_path = cli_database
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("CHECKLIST_DB").ok().map(PathBuf::from))
        .or_else(|| config.general.database_path.as_deref().map(expand_home))
        .unwrap_or_else(|| base.join(DEFAULT_DATABASE_FILE));

    // Log file: env → config → default
    let log_file = std::env::var("CHECKLIST_LOG")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.general.log_file.as_deref().map(expand_home))
        .unwrap_or_else(|| base.join(DEFAULT_LOG_FILE));

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            early.push(
                Level::Warn,
                format!("Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"),
            );
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        database_path,
        log_file,
        log_level,
        show_ids: config.display.show_ids.unwrap_or(DEFAULT_SHOW_IDS),
    }
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
