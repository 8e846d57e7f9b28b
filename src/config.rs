//! Configuration loading for the `rootroulette` binary.
//!
//! Configuration is loaded from a TOML file with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `~/.rootroulette/config.toml` (user)
//! 3. Built-in defaults
//!
//! ```toml
//! [paths]
//! word_dict = "data/word_dict.json"
//! cache_file = "etymology_cache.json"
//!
//! [fetcher]
//! timeout_secs = 5
//!
//! [game]
//! rounds = 10
//!
//! [cache]
//! transient_errors = "cooldown"
//! cooldown_secs = 600
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::{DEFAULT_API_URL, FetcherConfig};
use crate::service::{DEFAULT_OPTION_COUNT, EtymologyServiceBuilder, TransientPolicy};
use crate::{EtymologyError, Result};

/// Binary configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub fetcher: FetcherSection,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub cache: CacheSection,
}

/// File locations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Seed dictionary. Default: the embedded seed.
    #[serde(default)]
    pub word_dict: Option<PathBuf>,
    /// Etymology cache file. Default: platform cache dir.
    #[serde(default)]
    pub cache_file: Option<PathBuf>,
}

/// Remote lookup settings.
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSection {
    /// MediaWiki API endpoint (default: English Wiktionary).
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Override for the User-Agent header.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for FetcherSection {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

/// Quiz settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Words per round (default: 5).
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Answer options per question (default: 4).
    #[serde(default = "default_options")]
    pub options: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            options: default_options(),
        }
    }
}

fn default_rounds() -> usize {
    5
}

fn default_options() -> usize {
    DEFAULT_OPTION_COUNT
}

/// How transient lookup failures are cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransientErrors {
    /// Persist a placeholder, like a missing page.
    #[default]
    NegativeCache,
    /// Keep failures in memory only and retry after `cooldown_secs`.
    Cooldown,
}

/// Cache behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSection {
    #[serde(default)]
    pub transient_errors: TransientErrors,
    /// Cooldown window in seconds (default: 300). Only used with `"cooldown"`.
    #[serde(default = "default_cooldown")]
    pub cooldown_secs: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            transient_errors: TransientErrors::default(),
            cooldown_secs: default_cooldown(),
        }
    }
}

fn default_cooldown() -> u64 {
    300
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided; an error if it does not exist)
    /// 2. `~/.rootroulette/config.toml`
    /// 3. Built-in defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            EtymologyError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            EtymologyError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Location of the per-user config file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rootroulette").join("config.toml"))
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(EtymologyError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        Ok(Self::user_config_path().filter(|path| path.exists()))
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.game.rounds == 0 {
            return Err(EtymologyError::Configuration(
                "game.rounds must be at least 1".to_string(),
            ));
        }
        if self.game.options < 2 {
            return Err(EtymologyError::Configuration(
                "game.options must be at least 2".to_string(),
            ));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(EtymologyError::Configuration(
                "fetcher.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Wiktionary client settings.
    pub fn fetcher_config(&self) -> FetcherConfig {
        let mut config = FetcherConfig::new()
            .api_url(&self.fetcher.api_url)
            .timeout(Duration::from_secs(self.fetcher.timeout_secs));
        if let Some(ref user_agent) = self.fetcher.user_agent {
            config = config.user_agent(user_agent);
        }
        config
    }

    /// Transient-error policy for the service.
    pub fn transient_policy(&self) -> TransientPolicy {
        match self.cache.transient_errors {
            TransientErrors::NegativeCache => TransientPolicy::NegativeCache,
            TransientErrors::Cooldown => {
                TransientPolicy::Cooldown(Duration::from_secs(self.cache.cooldown_secs))
            }
        }
    }

    /// A service builder with every configured setting applied.
    pub fn service_builder(&self) -> EtymologyServiceBuilder {
        let mut builder = EtymologyServiceBuilder::new()
            .fetcher_config(self.fetcher_config())
            .transient_policy(self.transient_policy());
        if let Some(ref path) = self.paths.word_dict {
            builder = builder.word_dict(path);
        }
        if let Some(ref path) = self.paths.cache_file {
            builder = builder.cache_path(path);
        }
        builder
    }
}
