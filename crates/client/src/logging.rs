//! File logging and event tracing for the terminal client.
//!
//! The terminal is used for play, so everything goes to
//! `<log root>/<session>/client.log` and nothing to stderr.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use runtime::{EventBus, Topic};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Installs the global subscriber and returns the log file path.
pub fn setup_logging(config: &ClientConfig) -> Result<PathBuf> {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = config.log_root().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("failed to create log directory {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!(session = %session_id, file = %log_file.display(), "logging initialized");

    Ok(log_file)
}

/// Logs every runtime event as JSON at `debug` until the bus closes.
pub fn spawn_event_logger(bus: &EventBus) -> Vec<JoinHandle<()>> {
    Topic::ALL
        .iter()
        .map(|&topic| {
            let mut rx = bus.subscribe(topic);
            tokio::spawn(async move {
                loop {
                    match rx.recv().await {
                        Ok(event) => match serde_json::to_string(&event) {
                            Ok(json) => tracing::debug!(?topic, event = %json, "runtime event"),
                            Err(error) => tracing::warn!(?topic, %error, "unserializable event"),
                        },
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(?topic, skipped, "event logger lagged")
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            })
        })
        .collect()
}
