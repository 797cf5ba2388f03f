use super::{hash_key, KeyingStrategy, PartitionKey};
use crate::record::LogRecord;

/// Keys every record with the hash of the destination topic name.
///
/// The key is the same for every record, so the whole topic funnels into a
/// single partition: total order within the topic, no parallel consumption.
#[derive(Debug, Clone)]
pub struct TopicKeyingStrategy {
    topic: String,
    key: PartitionKey,
}

impl TopicKeyingStrategy {
    pub fn new(topic: impl Into<String>) -> Self {
        let topic = topic.into();
        let key = hash_key(&topic);
        Self { topic, key }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl KeyingStrategy for TopicKeyingStrategy {
    fn derive_key(&self, _record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(self.key.clone())
    }
}
