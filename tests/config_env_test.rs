//! Environment overrides live in their own test binary so the variables
//! cannot leak into the file-only config tests.

use kafka_log_keys::{Config, StrategyKind};
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_environment_overrides_file_settings() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(
        br#"
[kafka]
brokers = ["localhost:9092"]

[appender]
topic = "app-logs"
keying_strategy = "host_name"
"#,
    )
    .unwrap();

    std::env::set_var("KAFKA_LOG_KEYS_KAFKA__BROKERS", "kafka-1:9092,kafka-2:9092");
    std::env::set_var("KAFKA_LOG_KEYS_APPENDER__TOPIC", "audit-logs");
    std::env::set_var("KAFKA_LOG_KEYS_APPENDER__KEYING_STRATEGY", "message_hash");

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.kafka.brokers, vec!["kafka-1:9092", "kafka-2:9092"]);
    assert_eq!(config.appender.topic, "audit-logs");
    assert_eq!(config.appender.keying_strategy, StrategyKind::MessageHash);
    // Untouched settings keep their file or default values
    assert_eq!(config.kafka.acks, "all");

    std::env::set_var("KAFKA_LOG_KEYS_KAFKA__BROKERS", "k:9092");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.kafka.brokers, vec!["k:9092"]);
}
