//! Deterministic Kafka partition keys for outbound log records.
//!
//! Brokers only order records within a partition. A [`keying::KeyingStrategy`]
//! decides which records share a partition by deriving their key: by host,
//! by topic, by message text, or not at all.

pub mod config;
pub mod error;
pub mod host;
pub mod kafka;
pub mod keying;
pub mod record;

pub use config::Config;
pub use error::{Error, Result};
pub use host::HostIdentity;
pub use keying::{KeyingStrategy, PartitionKey, StrategyKind};
pub use record::{Level, LogEvent, LogRecord};
