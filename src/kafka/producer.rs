use crate::config::KafkaConfig;
use crate::keying::PartitionKey;
use crate::{Error, Result};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::{debug, info};

pub struct KafkaProducer {
    producer: FutureProducer,
    send_timeout: Duration,
}

impl KafkaProducer {
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        info!("Creating Kafka producer with brokers: {}", config.brokers.join(","));

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", config.brokers.join(","))
            .set("compression.type", &config.compression)
            .set("acks", &config.acks)
            .set("linger.ms", config.linger_ms.to_string())
            .set("batch.size", config.batch_size.to_string())
            .set("queue.buffering.max.kbytes", (config.buffer_memory / 1024).max(1).to_string())
            .set("message.timeout.ms", config.message_timeout_ms.to_string())
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self {
            producer,
            send_timeout: Duration::from_millis(config.message_timeout_ms),
        })
    }

    /// Sends `payload` with `key` passed through untouched. A missing key is
    /// sent as a null key, never as an empty one.
    pub async fn send(
        &self,
        topic: &str,
        key: Option<&PartitionKey>,
        payload: &[u8],
    ) -> Result<(i32, i64)> {
        let mut record: FutureRecord<'_, [u8], [u8]> = FutureRecord::to(topic).payload(payload);
        if let Some(key) = key {
            record = record.key(key.as_bytes());
        }

        let (partition, offset) = self
            .producer
            .send(record, self.send_timeout)
            .await
            .map_err(|(e, _)| Error::Kafka(e))?;

        debug!(
            topic = %topic,
            key = ?key,
            partition,
            offset,
            "Record delivered"
        );

        Ok((partition, offset))
    }

    pub fn flush(&self, timeout: Duration) -> Result<()> {
        self.producer.flush(timeout)?;
        Ok(())
    }
}
