use crate::config::ConfigError;
use crate::geocode::GeocodeError;
use crate::logging::LoggingError;
use crate::storage::StorageError;

/// Errors that can stop the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, runtime startup).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The trip store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The geocoding client could not be built.
    #[error("Geocoding setup error: {0}")]
    Geocode(#[from] GeocodeError),

    /// Logging could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
