use super::{KeyingStrategy, PartitionKey};
use crate::record::LogRecord;

/// Never produces a key, leaving partition assignment to the broker's default
/// partitioner (round-robin or sticky batching).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKeyKeyingStrategy;

impl KeyingStrategy for NoKeyKeyingStrategy {
    fn derive_key(&self, _record: &dyn LogRecord) -> Option<PartitionKey> {
        None
    }
}
