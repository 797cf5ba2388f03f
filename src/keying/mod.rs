//! Partition key derivation for log records.
//!
//! A [`KeyingStrategy`] maps a record to an optional [`PartitionKey`]. Records
//! that share a key land on the same broker partition and therefore keep their
//! relative order; `None` leaves the choice of partition to the broker.
//!
//! Strategies are built once per appender through [`StrategyKind::build`] and
//! then shared across every thread that logs.
//!
//! # Example
//!
//! ```rust
//! use kafka_log_keys::keying::{KeyingStrategy, StrategyContext, StrategyKind};
//! use kafka_log_keys::record::{Level, LogEvent};
//! use kafka_log_keys::HostIdentity;
//!
//! let context = StrategyContext::new(HostIdentity::new("localhost"), "app-logs");
//! let strategy = StrategyKind::HostName.build(&context);
//!
//! let event = LogEvent::new("com.example.Service", Level::Info, "started");
//! let key = strategy.derive_key(&event).unwrap();
//! assert_eq!(key.as_bytes(), &[0xb8, 0x33, 0x27, 0x93]);
//! ```

mod hash;
mod host_name;
mod message;
mod no_key;
mod record_field;
mod selector;
mod topic;


pub use hash::{hash_key, string_hash};
pub use host_name::HostNameKeyingStrategy;
pub use message::MessageHashKeyingStrategy;
pub use no_key::NoKeyKeyingStrategy;
pub use record_field::{
    ContextNameKeyingStrategy, LoggerNameKeyingStrategy, ThreadNameKeyingStrategy,
};
pub use selector::{StrategyContext, StrategyKind};
pub use topic::TopicKeyingStrategy;

use crate::record::LogRecord;
use bytes::Bytes;
use std::fmt;

/// Derives the partition key for a log record.
///
/// Implementations hold nothing but configuration fixed at construction, never
/// perform I/O and never log. The same input must produce the same bytes in
/// every process, since the broker partitions on `hash(key) mod partitions`.
pub trait KeyingStrategy: Send + Sync + fmt::Debug {
    /// Returns the key for `record`, or `None` to let the broker choose.
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey>;
}

impl<S: KeyingStrategy + ?Sized> KeyingStrategy for Box<S> {
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey> {
        (**self).derive_key(record)
    }
}

impl<S: KeyingStrategy + ?Sized> KeyingStrategy for std::sync::Arc<S> {
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey> {
        (**self).derive_key(record)
    }
}

/// Key bytes handed to the producer unchanged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey(Bytes);

impl PartitionKey {
    /// Encodes a 32-bit hash as 4 big-endian bytes.
    pub fn from_hash(hash: i32) -> Self {
        Self(Bytes::copy_from_slice(&hash.to_be_bytes()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl AsRef<[u8]> for PartitionKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for PartitionKey {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for PartitionKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&'static [u8]> for PartitionKey {
    fn from(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }
}

impl fmt::Debug for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartitionKey(0x")?;
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
