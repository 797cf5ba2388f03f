use super::{hash_key, KeyingStrategy, PartitionKey};
use crate::record::LogRecord;

/// Keys each record with the hash of its rendered message.
///
/// Identical message text always shares a partition, letting consumers
/// deduplicate or correlate repeats. Unrelated messages may collide; that is
/// accepted. An empty message still yields a key (the encoding of `0`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageHashKeyingStrategy;

impl KeyingStrategy for MessageHashKeyingStrategy {
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(hash_key(record.message()))
    }
}
