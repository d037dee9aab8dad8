//! Scriptboard configuration.
//!
//! Loaded from `~/.scriptboard/config.toml`. A missing file means defaults.
//!
//! The display locale is resolved through a chain:
//!
//! 1. `--locale <code>` — explicit per-invocation override
//! 2. `SCRIPTBOARD_LOCALE` env var
//! 3. `locale` in the config file
//! 4. English

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::locale::{Locale, UnknownLocale};

/// Environment variable that overrides the configured locale.
pub const LOCALE_ENV: &str = "SCRIPTBOARD_LOCALE";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("SCRIPTBOARD_LOCALE: {0}")]
    Env(#[from] UnknownLocale),
}

/// Scriptboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Language for labels and durations.
    pub locale: Locale,

    pub logging: LoggingConfig,
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Filter level for scriptboard's own events (`RUST_LOG` wins).
    pub level: String,

    /// Directory for the board session log. Defaults to
    /// `~/.scriptboard/logs`.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Load config from `~/.scriptboard/config.toml`.
    ///
    /// Returns defaults when the home directory or the file is missing.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The config file path: `~/.scriptboard/config.toml`.
    pub fn path() -> Option<PathBuf> {
        base_dir().map(|d| d.join("config.toml"))
    }

    /// Resolve the display locale from the flag, environment, and file.
    pub fn resolve_locale(&self, explicit: Option<Locale>) -> Result<Locale, ConfigError> {
        self.resolve_locale_with(explicit, env::var(LOCALE_ENV).ok().as_deref())
    }

    fn resolve_locale_with(
        &self,
        explicit: Option<Locale>,
        env_code: Option<&str>,
    ) -> Result<Locale, ConfigError> {
        // 1. Explicit --locale flag.
        if let Some(locale) = explicit {
            return Ok(locale);
        }

        // 2. SCRIPTBOARD_LOCALE environment variable.
        if let Some(code) = env_code
            && !code.is_empty()
        {
            return Ok(code.parse()?);
        }

        // 3. Config file, which already defaults to English.
        Ok(self.locale)
    }

    /// Directory for the board session log.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.logging
            .directory
            .clone()
            .or_else(|| base_dir().map(|d| d.join("logs")))
    }
}

/// `~/.scriptboard`.
fn base_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scriptboard"))
}
