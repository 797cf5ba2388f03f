use crate::host::HostIdentity;
use crate::keying::{StrategyContext, StrategyKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variables with this prefix override file settings,
/// e.g. `KAFKA_LOG_KEYS_APPENDER__TOPIC=audit-logs`. `kafka.brokers` takes a
/// comma-separated list.
pub const ENV_PREFIX: &str = "KAFKA_LOG_KEYS";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub kafka: KafkaConfig,
    pub appender: AppenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    pub brokers: Vec<String>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_acks")]
    pub acks: String,
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_buffer_memory")]
    pub buffer_memory: usize,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppenderConfig {
    pub topic: String,
    #[serde(default)]
    pub keying_strategy: StrategyKind,
    /// Overrides the system host name for host-keyed partitioning.
    #[serde(default)]
    pub host_identity: Option<String>,
    #[serde(default = "default_context_name")]
    pub context_name: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("kafka.brokers"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values the producer cannot work without.
    pub fn validate(&self) -> Result<()> {
        if self.kafka.brokers.iter().all(|b| b.trim().is_empty()) {
            return Err(Error::Config("kafka.brokers must not be empty".to_string()));
        }
        if self.appender.topic.trim().is_empty() {
            return Err(Error::Config("appender.topic must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn strategy_context(&self, host_identity: &HostIdentity) -> StrategyContext {
        StrategyContext::new(host_identity.clone(), self.appender.topic.clone())
            .with_context_name(self.appender.context_name.clone())
    }

    pub fn resolve_host_identity(&self) -> HostIdentity {
        HostIdentity::resolve(self.appender.host_identity.as_deref())
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}

fn default_acks() -> String {
    "all".to_string()
}

fn default_linger_ms() -> u32 {
    100
}

fn default_batch_size() -> usize {
    16384
}

fn default_buffer_memory() -> usize {
    33_554_432 // 32MB
}

fn default_message_timeout_ms() -> u64 {
    5000
}

fn default_context_name() -> String {
    "default".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            kafka: KafkaConfig {
                brokers: vec!["localhost:9092".to_string()],
                compression: "none".to_string(),
                acks: "1".to_string(),
                linger_ms: 0,
                batch_size: 1,
                buffer_memory: 1024,
                message_timeout_ms: 1000,
            },
            appender: AppenderConfig {
                topic: "app-logs".to_string(),
                keying_strategy: StrategyKind::Topic,
                host_identity: Some("web-01".to_string()),
                context_name: "default".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_brokers() {
        let mut config = test_config();
        config.kafka.brokers = vec![" ".to_string()];
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_topic() {
        let mut config = test_config();
        config.appender.topic = String::new();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_strategy_context() {
        let config = test_config();
        let host = config.resolve_host_identity();
        let context = config.strategy_context(&host);

        assert_eq!(context.host_identity.as_str(), "web-01");
        assert_eq!(context.topic, "app-logs");
        assert_eq!(context.context_name, "default");
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "kafka": { "brokers": ["localhost:9092"] },
            "appender": { "topic": "app-logs" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.kafka.compression, "snappy");
        assert_eq!(config.kafka.acks, "all");
        assert_eq!(config.kafka.message_timeout_ms, 5000);
        assert_eq!(config.appender.keying_strategy, StrategyKind::HostName);
        assert_eq!(config.appender.host_identity, None);
        assert_eq!(config.appender.context_name, "default");
    }

    #[test]
    fn test_deserialize_rejects_unknown_strategy() {
        let json = r#"{
            "kafka": { "brokers": ["localhost:9092"] },
            "appender": { "topic": "app-logs", "keying_strategy": "sticky" }
        }"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(err.to_string().contains("Unknown keying strategy: sticky"));
    }
}
