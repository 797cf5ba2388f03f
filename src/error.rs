//! Error types and result handling for kafka-log-keys.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.
//!
//! Deriving a partition key never fails. Every variant here belongs either to
//! configuration time (choosing and constructing a strategy) or to the
//! producer glue that ships records to the broker.
//!
//! # Example
//!
//! ```rust
//! use kafka_log_keys::keying::StrategyKind;
//! use kafka_log_keys::Error;
//!
//! match "round_robin".parse::<StrategyKind>() {
//!     Ok(kind) => println!("Using {}", kind),
//!     Err(Error::UnknownStrategy { name }) => eprintln!("No strategy named {}", name),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for kafka-log-keys operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration value, detected while validating the loaded config.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file or environment could not be read or deserialized.
    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    /// A keying strategy name that does not match any known strategy.
    ///
    /// Raised when the appender is configured, never while records are keyed.
    #[error("Unknown keying strategy: {name}")]
    UnknownStrategy {
        /// The name that failed to resolve
        name: String,
    },

    /// The system host name could not be resolved.
    #[error("Host identity error: {0}")]
    HostIdentity(#[source] std::io::Error),

    /// Kafka client or producer error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// JSON serialization error when encoding log records.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error, typically from reading log lines.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient Result type alias for kafka-log-keys operations.
///
/// This is equivalent to `std::result::Result<T, kafka_log_keys::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_strategy_message() {
        let err = Error::UnknownStrategy {
            name: "sticky".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown keying strategy: sticky");
    }

    #[test]
    fn test_host_identity_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "no hostname");
        let err = Error::HostIdentity(io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Host identity error: no hostname");
    }
}
