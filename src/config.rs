//! Runtime configuration from environment variables (and an optional `.env`).

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::geocode::DEFAULT_GEOCODE_URL;

/// Overrides the reverse-geocoding endpoint.
pub const GEOCODE_URL_VAR: &str = "TRIPLOG_GEOCODE_URL";
/// Overrides where trips and the log file are kept.
pub const DATA_DIR_VAR: &str = "TRIPLOG_DATA_DIR";
/// Name shown in the user panel.
pub const USER_VAR: &str = "TRIPLOG_USER";
/// Request timeout for geocoding, in whole seconds.
pub const HTTP_TIMEOUT_VAR: &str = "TRIPLOG_HTTP_TIMEOUT_SECS";

const DEFAULT_USER: &str = "Traveller";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No data directory was configured and the platform does not provide one.
    #[error("could not determine XDG data directory; set {}", DATA_DIR_VAR)]
    NoDataDir,

    /// The geocoding URL is not an absolute URL.
    #[error("invalid {} {url:?}: {source}", GEOCODE_URL_VAR)]
    InvalidUrl { url: String, source: url::ParseError },

    /// The timeout is not a whole number of seconds.
    #[error("invalid {} {value:?}: expected whole seconds", HTTP_TIMEOUT_VAR)]
    InvalidTimeout { value: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub geocode_url: String,
    pub data_dir: PathBuf,
    pub user_name: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment and `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let geocode_url = get(GEOCODE_URL_VAR).unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string());
        if let Err(source) = Url::parse(&geocode_url) {
            return Err(ConfigError::InvalidUrl {
                url: geocode_url,
                source,
            });
        }

        let data_dir = match get(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("triplog"),
        };

        let user_name = get(USER_VAR)
            .or_else(|| get("USER"))
            .unwrap_or_else(|| DEFAULT_USER.to_string());

        let http_timeout = match get(HTTP_TIMEOUT_VAR) {
            Some(secs) => secs
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout { value: secs })?,
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            geocode_url,
            data_dir,
            user_name,
            http_timeout,
        })
    }

    /// Returns the path of the application log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("triplog.log")
    }
}
