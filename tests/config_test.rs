use kafka_log_keys::{Config, Error, StrategyKind};
use std::io::Write;
use tempfile::Builder;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_toml() {
    let file = write_config(
        r#"
[kafka]
brokers = ["kafka-1:9092", "kafka-2:9092"]
acks = "1"

[appender]
topic = "app-logs"
keying_strategy = "message_hash"
host_identity = "web-01"
"#,
    );

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.kafka.brokers, vec!["kafka-1:9092", "kafka-2:9092"]);
    assert_eq!(config.kafka.acks, "1");
    assert_eq!(config.kafka.compression, "snappy");
    assert_eq!(config.appender.topic, "app-logs");
    assert_eq!(config.appender.keying_strategy, StrategyKind::MessageHash);
    assert_eq!(config.resolve_host_identity().as_str(), "web-01");
}

#[test]
fn test_unknown_strategy_fails_at_load_time() {
    let file = write_config(
        r#"
[kafka]
brokers = ["localhost:9092"]

[appender]
topic = "app-logs"
keying_strategy = "sticky_round_robin"
"#,
    );

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::ConfigSource(_)));
    assert!(err.to_string().contains("sticky_round_robin"));
}

#[test]
fn test_empty_topic_fails_validation() {
    let file = write_config(
        r#"
[kafka]
brokers = ["localhost:9092"]

[appender]
topic = ""
"#,
    );

    assert!(matches!(Config::from_file(file.path()), Err(Error::Config(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(Error::ConfigSource(_))));
}
