use super::{hash_key, KeyingStrategy, PartitionKey};
use crate::host::HostIdentity;
use crate::record::LogRecord;

/// Keys every record with the hash of the process's host identity.
///
/// All records from one process share a partition, which preserves the order
/// in which that host emitted them. Different hosts spread across partitions.
/// An empty identity keys with the encoding of `0`.
#[derive(Debug, Clone)]
pub struct HostNameKeyingStrategy {
    host_identity: HostIdentity,
    key: PartitionKey,
}

impl HostNameKeyingStrategy {
    pub fn new(host_identity: HostIdentity) -> Self {
        let key = hash_key(host_identity.as_str());
        Self { host_identity, key }
    }

    pub fn host_identity(&self) -> &HostIdentity {
        &self.host_identity
    }
}

impl KeyingStrategy for HostNameKeyingStrategy {
    fn derive_key(&self, _record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(self.key.clone())
    }
}
