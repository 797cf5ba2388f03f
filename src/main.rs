use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use kafka_log_keys::kafka::KafkaAppender;
use kafka_log_keys::{
    Config, HostIdentity, KeyingStrategy, Level, LogEvent, PartitionKey, StrategyKind,
};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::SplitStream;
use tokio_stream::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "kafka-log-keys")]
#[command(about = "Publish log lines to Kafka with deterministic partition keys", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,

    #[arg(long, help = "Print derived keys to stdout instead of publishing")]
    dry_run: bool,

    #[arg(short, long, value_name = "NAME", help = "Override the configured keying strategy")]
    strategy: Option<StrategyKind>,

    #[arg(long, default_value = "stdin", help = "Logger name attached to each line")]
    logger: String,

    #[arg(long, default_value = "info", help = "Level attached to each line")]
    level: Level,
}

/// Logger name and level stamped on every line read from the input.
#[derive(Debug, Clone)]
struct LineSource {
    logger: String,
    level: Level,
}

impl LineSource {
    /// Builds an event from one raw line. Invalid UTF-8 is replaced rather
    /// than rejected so a stray byte never stops the stream.
    fn event(&self, mut line: Vec<u8>) -> LogEvent {
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let message = match String::from_utf8(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Log line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        LogEvent::new(self.logger.clone(), self.level, message)
    }
}

fn read_lines<R: AsyncBufRead + Unpin>(reader: R) -> SplitStream<R> {
    SplitStream::new(reader.split(b'\n'))
}

/// One dry-run output line: the message and its base64 key, or null.
fn key_line(event: &LogEvent, key: Option<&PartitionKey>) -> serde_json::Value {
    json!({
        "message": event.message,
        "key": key.map(|k| STANDARD.encode(k)),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Loading configuration from {:?}", args.config);

    let mut config = Config::from_file(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;
    if let Some(strategy) = args.strategy {
        config.appender.keying_strategy = strategy;
    }

    let host_identity = config.resolve_host_identity();

    info!(
        kafka_brokers = ?config.kafka.brokers,
        topic = %config.appender.topic,
        keying_strategy = %config.appender.keying_strategy,
        host_identity = %host_identity,
        "Configuration summary"
    );

    let source = LineSource {
        logger: args.logger.clone(),
        level: args.level,
    };
    let stdin = BufReader::new(tokio::io::stdin());

    if args.dry_run {
        let strategy = config
            .appender
            .keying_strategy
            .build(&config.strategy_context(&host_identity));
        print_keys(&source, &*strategy, stdin, &mut std::io::stdout().lock()).await
    } else {
        publish(&source, &config, &host_identity, stdin).await
    }
}

async fn print_keys<R, W>(
    source: &LineSource,
    strategy: &dyn KeyingStrategy,
    reader: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = read_lines(reader);

    while let Some(line) = lines.next().await {
        let event = source.event(line?);
        let key = strategy.derive_key(&event);
        writeln!(out, "{}", key_line(&event, key.as_ref()))?;
    }

    Ok(())
}

async fn publish<R: AsyncBufRead + Unpin>(
    source: &LineSource,
    config: &Config,
    host_identity: &HostIdentity,
    reader: R,
) -> anyhow::Result<()> {
    let appender = KafkaAppender::from_config(config, host_identity)
        .context("failed to create Kafka appender")?;

    info!("Publishing stdin to topic '{}'", appender.topic());

    let mut lines = read_lines(reader);
    let mut sent = 0u64;
    let mut failed = 0u64;

    while let Some(line) = lines.next().await {
        let event = source.event(line?);
        match appender.append(&event).await {
            Ok(_) => sent += 1,
            Err(e) => {
                failed += 1;
                warn!("Dropped log line: {}", e);
            }
        }
    }

    appender
        .flush(Duration::from_millis(config.kafka.message_timeout_ms))
        .context("failed to flush pending records")?;

    info!(sent, failed, "Finished publishing");

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("kafka_log_keys=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("kafka_log_keys=info,warn"))
    };

    // stdout carries dry-run output, so logs go to stderr
    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
