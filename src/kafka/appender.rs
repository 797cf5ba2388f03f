//! Publishes log events to Kafka, keyed by the configured strategy.

use super::{JsonSerializer, KafkaProducer};
use crate::config::Config;
use crate::host::HostIdentity;
use crate::keying::{KeyingStrategy, PartitionKey};
use crate::record::LogEvent;
use crate::Result;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, instrument};

/// Derives a key for each event and hands key and payload to the producer.
///
/// The strategy is built once when the appender is created and reused for
/// every event. Retries are the producer's concern.
pub struct KafkaAppender {
    topic: String,
    strategy: Arc<dyn KeyingStrategy>,
    producer: KafkaProducer,
    serializer: JsonSerializer,
}

impl KafkaAppender {
    pub fn new(
        topic: impl Into<String>,
        strategy: Arc<dyn KeyingStrategy>,
        producer: KafkaProducer,
        serializer: JsonSerializer,
    ) -> Self {
        Self {
            topic: topic.into(),
            strategy,
            producer,
            serializer,
        }
    }

    /// Builds the producer and the configured strategy.
    pub fn from_config(config: &Config, host_identity: &HostIdentity) -> Result<Self> {
        config.validate()?;

        let strategy = config
            .appender
            .keying_strategy
            .build(&config.strategy_context(host_identity));
        let producer = KafkaProducer::new(&config.kafka)?;

        Ok(Self::new(
            config.appender.topic.clone(),
            strategy,
            producer,
            JsonSerializer::default(),
        ))
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn key_for(&self, event: &LogEvent) -> Option<PartitionKey> {
        self.strategy.derive_key(event)
    }

    #[instrument(skip(self, event), fields(topic = %self.topic, logger = %event.logger))]
    pub async fn append(&self, event: &LogEvent) -> Result<(i32, i64)> {
        let key = self.key_for(event);
        let payload = self.serializer.serialize(event)?;

        self.producer
            .send(&self.topic, key.as_ref(), &payload)
            .await
            .map_err(|e| {
                error!("Failed to append log event: {}", e);
                e
            })
    }

    /// Sends all events concurrently, returning one result per event in input order.
    pub async fn append_batch(&self, events: &[LogEvent]) -> Vec<Result<(i32, i64)>> {
        join_all(events.iter().map(|event| self.append(event))).await
    }

    pub fn flush(&self, timeout: Duration) -> Result<()> {
        self.producer.flush(timeout)
    }
}
