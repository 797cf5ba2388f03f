use kafka_log_keys::config::{AppenderConfig, Config, KafkaConfig};
use kafka_log_keys::record::{Level, LogEvent};
use kafka_log_keys::StrategyKind;
use std::env;

/// Get test configuration from environment variables
#[allow(dead_code)]
pub fn get_test_config(strategy: StrategyKind) -> Config {
    let kafka = KafkaConfig {
        brokers: env::var("TEST_KAFKA_BROKERS")
            .unwrap_or_else(|_| "localhost:9092".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect(),
        compression: "none".to_string(), // No compression for tests
        acks: "all".to_string(),
        linger_ms: 0,             // Immediate sending for tests
        batch_size: 1,            // Small batches for tests
        buffer_memory: 1_048_576, // 1MB for tests
        message_timeout_ms: 5000,
    };

    let appender = AppenderConfig {
        topic: format!("test_logs_{}", std::process::id()),
        keying_strategy: strategy,
        host_identity: Some("localhost".to_string()),
        context_name: "default".to_string(),
    };

    Config { kafka, appender }
}

/// Build an event with fixed timestamp and thread name
#[allow(dead_code)]
pub fn event(logger: &str, message: &str) -> LogEvent {
    LogEvent::new(logger, Level::Info, message)
        .with_timestamp(1_700_000_000_000)
        .with_thread_name("main")
}
