use super::{
    ContextNameKeyingStrategy, HostNameKeyingStrategy, KeyingStrategy, LoggerNameKeyingStrategy,
    MessageHashKeyingStrategy, NoKeyKeyingStrategy, ThreadNameKeyingStrategy, TopicKeyingStrategy,
};
use crate::host::HostIdentity;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Names a keying strategy in appender configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StrategyKind {
    #[default]
    HostName,
    NoKey,
    Topic,
    MessageHash,
    LoggerName,
    ThreadName,
    ContextName,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::HostName,
        StrategyKind::NoKey,
        StrategyKind::Topic,
        StrategyKind::MessageHash,
        StrategyKind::LoggerName,
        StrategyKind::ThreadName,
        StrategyKind::ContextName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::HostName => "host_name",
            StrategyKind::NoKey => "no_key",
            StrategyKind::Topic => "topic",
            StrategyKind::MessageHash => "message_hash",
            StrategyKind::LoggerName => "logger_name",
            StrategyKind::ThreadName => "thread_name",
            StrategyKind::ContextName => "context_name",
        }
    }

    /// Constructs the strategy once; the returned instance is meant to be
    /// shared by every thread of the appender for its whole lifetime.
    pub fn build(&self, context: &StrategyContext) -> Arc<dyn KeyingStrategy> {
        info!(
            strategy = %self,
            host_identity = %context.host_identity,
            topic = %context.topic,
            "Configured keying strategy"
        );

        match self {
            StrategyKind::HostName => {
                Arc::new(HostNameKeyingStrategy::new(context.host_identity.clone()))
            }
            StrategyKind::NoKey => Arc::new(NoKeyKeyingStrategy),
            StrategyKind::Topic => Arc::new(TopicKeyingStrategy::new(context.topic.clone())),
            StrategyKind::MessageHash => Arc::new(MessageHashKeyingStrategy),
            StrategyKind::LoggerName => Arc::new(LoggerNameKeyingStrategy),
            StrategyKind::ThreadName => Arc::new(ThreadNameKeyingStrategy),
            StrategyKind::ContextName => {
                Arc::new(ContextNameKeyingStrategy::new(context.context_name.clone()))
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept class names, qualified or not, e.g. `HostNameKeyingStrategy`
        let simple = s.trim().rsplit('.').next().unwrap_or_default();
        let simple = simple
            .strip_suffix("KeyingStrategy")
            .or_else(|| simple.strip_suffix("PartitioningStrategy"))
            .unwrap_or(simple);

        let normalized: String = simple
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "hostname" | "host" => Ok(StrategyKind::HostName),
            "nokey" | "none" | "null" => Ok(StrategyKind::NoKey),
            "topic" | "topicname" => Ok(StrategyKind::Topic),
            "messagehash" | "message" => Ok(StrategyKind::MessageHash),
            "loggername" | "logger" => Ok(StrategyKind::LoggerName),
            "threadname" | "thread" => Ok(StrategyKind::ThreadName),
            "contextname" | "context" => Ok(StrategyKind::ContextName),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for StrategyKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Values resolved once at startup that strategies may capture.
#[derive(Debug, Clone, Default)]
pub struct StrategyContext {
    pub host_identity: HostIdentity,
    pub topic: String,
    pub context_name: String,
}

impl StrategyContext {
    pub fn new(host_identity: HostIdentity, topic: impl Into<String>) -> Self {
        Self {
            host_identity,
            topic: topic.into(),
            context_name: String::new(),
        }
    }

    pub fn with_context_name(mut self, context_name: impl Into<String>) -> Self {
        self.context_name = context_name.into();
        self
    }
}
