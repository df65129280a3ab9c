//! Configuration management for tronex
//!
//! The configuration lives at `$HOME/.tronex/config.toml` and is created with defaults on first
//! use. Environment variables, including those read from a `.env` file in the working directory,
//! take precedence over the file.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::{path::PathBuf, time::Duration};
use tracing::{debug, error, info};
use tronex_common::{
    constants::{DEFAULT_API_RATE_LIMIT_DELAY, DEFAULT_COINGECKO_API_BASE_URL},
    utils::{
        env::get_env,
        io::file::{delete_path, read_file, write_file},
    },
};

/// Explorer base URL, e.g. `https://apilist.tronscanapi.com/api`
pub const ENV_TRONSCAN_API_BASE_URL: &str = "TRONSCAN_API_BASE_URL";
/// Explorer API key, sent as a bearer token
pub const ENV_TRONSCAN_API_KEY: &str = "TRONSCAN_API_KEY";
/// Price provider base URL
pub const ENV_COINGECKO_API_BASE_URL: &str = "COINGECKO_API_BASE_URL";
/// Seconds to wait before each explorer request
pub const ENV_API_RATE_LIMIT_DELAY: &str = "API_RATE_LIMIT_DELAY";

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "tronex config [KEY] [VALUE]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Every value can be
/// overridden by the matching environment variable.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    /// The TronScan API base URL. Required for exports.
    pub tronscan_api_base_url: String,

    /// The API key for TronScan, if any
    pub tronscan_api_key: String,

    /// The CoinGecko API base URL
    pub coingecko_api_base_url: String,

    /// Seconds to wait before every TronScan request
    pub api_rate_limit_delay: f64,

    /// Where to mirror logs. Empty disables the log file.
    pub log_file: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            tronscan_api_base_url: "".to_string(),
            tronscan_api_key: "".to_string(),
            coingecko_api_base_url: DEFAULT_COINGECKO_API_BASE_URL.to_string(),
            api_rate_limit_delay: DEFAULT_API_RATE_LIMIT_DELAY,
            log_file: "tronscan_data.log".to_string(),
        }
    }
}

#[allow(deprecated)]
fn config_path() -> Result<PathBuf, Error> {
    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".tronex");
    home.push("config.toml");
    Ok(home)
}

fn path_str(path: &std::path::Path) -> Result<&str, Error> {
    path.to_str().ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

fn parse_delay(value: &str) -> Result<f64, Error> {
    match value.trim().parse::<f64>() {
        Ok(delay) if delay.is_finite() && delay >= 0.0 => Ok(delay),
        _ => Err(Error::ParseError(format!(
            "invalid rate limit delay '{value}', expected a non-negative number of seconds"
        ))),
    }
}

impl Configuration {
    /// Returns the current configuration: the config file, with `.env` and the process
    /// environment layered on top.
    pub fn load() -> Result<Self, Error> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("loaded environment from {}", path.display());
        }

        let mut config = Self::load_from(&config_path()?)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Reads the configuration file at `path`, creating it with defaults if it doesn't exist.
    /// The environment is not consulted.
    pub fn load_from(path: &std::path::Path) -> Result<Self, Error> {
        if !path.exists() {
            Configuration::default().save_to(path)?;
        }

        let contents = read_file(path_str(path)?)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))
    }

    /// Overrides values with any set, non-blank environment variables.
    pub fn apply_env_overrides(&mut self) -> Result<(), Error> {
        if let Some(url) = get_env(ENV_TRONSCAN_API_BASE_URL) {
            debug!("overriding tronscan_api_base_url from environment");
            self.tronscan_api_base_url = url;
        }
        if let Some(key) = get_env(ENV_TRONSCAN_API_KEY) {
            debug!("overriding tronscan_api_key from environment");
            self.tronscan_api_key = key;
        }
        if let Some(url) = get_env(ENV_COINGECKO_API_BASE_URL) {
            debug!("overriding coingecko_api_base_url from environment");
            self.coingecko_api_base_url = url;
        }
        if let Some(delay) = get_env(ENV_API_RATE_LIMIT_DELAY) {
            debug!("overriding api_rate_limit_delay from environment");
            self.api_rate_limit_delay = parse_delay(&delay)?;
        }

        Ok(())
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&config_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), Error> {
        write_file(
            path_str(path)?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))
    }

    /// Deletes the configuration file at `$HOME/.tronex/config.toml`.
    pub fn delete() -> Result<(), Error> {
        delete_path(path_str(&config_path()?)?);
        Ok(())
    }

    /// Update a single key/value pair in memory, checking the value's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "tronscan_api_base_url" => self.tronscan_api_base_url = value.to_string(),
            "tronscan_api_key" => self.tronscan_api_key = value.to_string(),
            "coingecko_api_base_url" => self.coingecko_api_base_url = value.to_string(),
            "api_rate_limit_delay" => self.api_rate_limit_delay = parse_delay(value)?,
            "log_file" => self.log_file = value.to_string(),
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        Ok(())
    }

    /// Update a single key/value pair and write the configuration to disk.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.set(key, value)?;
        self.save()
    }

    /// The explorer base URL, or an error when none is configured.
    pub fn require_tronscan_api_base_url(&self) -> Result<&str, Error> {
        match self.tronscan_api_base_url.trim() {
            "" => Err(Error::Generic(format!(
                "no TronScan API base URL configured. set {ENV_TRONSCAN_API_BASE_URL} or run `tronex config tronscan_api_base_url <URL>`"
            ))),
            url => Ok(url),
        }
    }

    /// The explorer API key, if one is configured.
    pub fn tronscan_api_key(&self) -> Option<&str> {
        Some(self.tronscan_api_key.trim()).filter(|key| !key.is_empty())
    }

    /// The pause before every explorer request.
    pub fn rate_limit_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.api_rate_limit_delay).unwrap_or_default()
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // only the file is updated, env overrides stay out of it
            let mut config = Configuration::load_from(&config_path()?)?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            error!("found key but no value to set. Please specify a value to set, use `tronex config --help` for more information.");
        }
    } else {
        println!("{:#?}", Configuration::load()?);
        info!("use `tronex config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
