//! Strategies keyed on a field of the record or of the logging context.

use super::{hash_key, KeyingStrategy, PartitionKey};
use crate::record::LogRecord;

/// Keys each record with the hash of its logger name, keeping every logger's
/// output in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggerNameKeyingStrategy;

impl KeyingStrategy for LoggerNameKeyingStrategy {
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(hash_key(record.logger_name()))
    }
}

/// Keys each record with the hash of the emitting thread's name.
///
/// Unnamed threads report an empty name and all share the key for `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadNameKeyingStrategy;

impl KeyingStrategy for ThreadNameKeyingStrategy {
    fn derive_key(&self, record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(hash_key(record.thread_name()))
    }
}

/// Keys every record with the hash of the logging context's name.
#[derive(Debug, Clone)]
pub struct ContextNameKeyingStrategy {
    context_name: String,
    key: PartitionKey,
}

impl ContextNameKeyingStrategy {
    pub fn new(context_name: impl Into<String>) -> Self {
        let context_name = context_name.into();
        let key = hash_key(&context_name);
        Self { context_name, key }
    }

    pub fn context_name(&self) -> &str {
        &self.context_name
    }
}

impl KeyingStrategy for ContextNameKeyingStrategy {
    fn derive_key(&self, _record: &dyn LogRecord) -> Option<PartitionKey> {
        Some(self.key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Level, LogEvent};

    #[test]
    fn test_logger_name_strategy() {
        let event = LogEvent::new("com.example.Service", Level::Info, "started");
        let key = LoggerNameKeyingStrategy.derive_key(&event).unwrap();

        assert_eq!(key.as_bytes(), &[0xd4, 0x7a, 0xb3, 0xa4]);
    }

    #[test]
    fn test_thread_name_strategy() {
        let main = LogEvent::new("logger", Level::Info, "a").with_thread_name("main");
        let unnamed = LogEvent::new("logger", Level::Info, "b").with_thread_name("");

        assert_eq!(
            ThreadNameKeyingStrategy.derive_key(&main).unwrap().as_bytes(),
            &[0x00, 0x33, 0x05, 0xb9]
        );
        assert_eq!(
            ThreadNameKeyingStrategy.derive_key(&unnamed).unwrap().as_bytes(),
            &[0, 0, 0, 0]
        );
    }

    #[test]
    fn test_context_name_strategy() {
        let strategy = ContextNameKeyingStrategy::new("default");
        let event = LogEvent::new("logger", Level::Info, "msg");

        assert_eq!(strategy.context_name(), "default");
        assert_eq!(
            strategy.derive_key(&event).unwrap().as_bytes(),
            &1544803905i32.to_be_bytes()
        );
    }
}
