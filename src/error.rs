//! Crate-level error types

use thiserror::Error;

/// Errors surfaced by configuration, simulation setup, and persistence
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for simular operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ConfigError("bad value".to_string());
        assert!(format!("{err}").contains("Configuration error"));
        assert!(format!("{err}").contains("bad value"));

        let err = Error::Serialization("broken record".to_string());
        assert!(format!("{err}").contains("Serialization error"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("missing"));
    }
}
