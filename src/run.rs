//! Application execution logic.
//!
//! This module contains the main async loop that reads newline-delimited
//! JSON events and forwards each one through the output.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

use slack_relay::config::ValidatedConfig;
use slack_relay::event::Event;
use slack_relay::output::{OutputGate, SlackOutput};
use slack_relay::webhook::{DryRunNotifier, HttpError, Notify, ReqwestClient, SlackNotifier};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to construct the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(#[source] HttpError),

    /// Failed to open the input file.
    #[error("Failed to open input '{}': {source}", path.display())]
    InputOpen {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read from the input.
    #[error("Failed to read input: {0}")]
    InputRead(#[source] std::io::Error),
}

/// Counters for one run, logged at exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayStats {
    /// Events handed to the output.
    pub forwarded: u64,
    /// Lines that were not valid event JSON.
    pub invalid: u64,
}

impl fmt::Display for RelayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relayed {} event(s), skipped {} invalid line(s)",
            self.forwarded, self.invalid
        )
    }
}

/// Executes the relay.
///
/// This function:
/// 1. Creates the notifier (dry-run or HTTPS, with optional proxy)
/// 2. Wraps it in an output with the configured template and gate
/// 3. Reads events from the input until end of input or shutdown signal
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created or the input
/// cannot be opened or read. Delivery failures are never returned.
///
/// Excluded from coverage - requires signal handling and stdin.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<RelayStats, RunError> {
    let input = config.input.clone();

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - payloads will be logged but not posted");
        let output = SlackOutput::new(config.template, DryRunNotifier).with_gate(config.filter);
        return run_from_input(input.as_deref(), &output).await;
    }

    let client =
        ReqwestClient::with_proxy(config.proxy.as_ref()).map_err(RunError::ClientCreation)?;
    if let Some(ref proxy) = config.proxy {
        tracing::info!("Posting through proxy {proxy}");
    }

    let notifier = SlackNotifier::new(client, config.url);
    let output = SlackOutput::new(config.template, notifier).with_gate(config.filter);
    run_from_input(input.as_deref(), &output).await
}

/// Opens the input (file or stdin) and relays it until done.
#[cfg(not(tarpaulin_include))]
async fn run_from_input<N: Notify, G: OutputGate>(
    input: Option<&Path>,
    output: &SlackOutput<N, G>,
) -> Result<RelayStats, RunError> {
    match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| RunError::InputOpen {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            tracing::info!("Reading events from {}", path.display());
            relay_events(BufReader::new(file), output, shutdown_signal()).await
        }
        None => {
            tracing::info!("Reading events from stdin");
            relay_events(BufReader::new(tokio::io::stdin()), output, shutdown_signal()).await
        }
    }
}

/// Feeds every line of `reader` to the output until end of input or `shutdown`.
///
/// Blank lines are ignored; lines that are not a JSON object are logged
/// and skipped.
async fn relay_events<R, N, G>(
    reader: R,
    output: &SlackOutput<N, G>,
    shutdown: impl Future<Output = ()>,
) -> Result<RelayStats, RunError>
where
    R: AsyncBufRead + Unpin,
    N: Notify,
    G: OutputGate,
{
    let mut lines = LinesStream::new(reader.lines());
    let mut stats = RelayStats::default();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(stats);
            }

            line = lines.next() => {
                match line {
                    Some(Ok(line)) => handle_line(&line, output, &mut stats).await,
                    Some(Err(e)) => return Err(RunError::InputRead(e)),
                    None => {
                        tracing::debug!("End of input");
                        return Ok(stats);
                    }
                }
            }
        }
    }
}

/// Handles one input line.
async fn handle_line<N: Notify, G: OutputGate>(
    line: &str,
    output: &SlackOutput<N, G>,
    stats: &mut RelayStats,
) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    match Event::parse(line) {
        Ok(event) => {
            output.receive(&event).await;
            stats.forwarded += 1;
        }
        Err(e) => {
            tracing::warn!("Skipping input line: {e}");
            stats.invalid += 1;
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
