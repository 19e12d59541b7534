//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// slack-relay: forward events to a chat webhook
///
/// Reads newline-delimited JSON events and posts each one as a message
/// to a Slack-compatible incoming webhook.
#[derive(Debug, Parser)]
#[command(name = "slack-relay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Incoming webhook URL (required for run mode)
    #[arg(long)]
    pub url: Option<String>,

    /// Message text template, e.g. '{host}: {message}'
    #[arg(long)]
    pub format: Option<String>,

    /// Channel override template
    #[arg(long)]
    pub channel: Option<String>,

    /// Username override template
    #[arg(long)]
    pub username: Option<String>,

    /// Emoji icon, e.g. ':fire:'
    #[arg(long = "icon-emoji")]
    pub icon_emoji: Option<String>,

    /// Icon URL
    #[arg(long = "icon-url")]
    pub icon_url: Option<String>,

    /// Default attachment as JSON (can be specified multiple times)
    #[arg(long = "attachment", value_name = "JSON")]
    pub attachments: Vec<String>,

    /// Forward proxy, 'host' or 'host:port'
    #[arg(long)]
    pub proxy: Option<String>,

    /// Proxy port used when --proxy has none
    #[arg(long = "proxy-port")]
    pub proxy_port: Option<u16>,

    /// Only forward events whose 'type' field equals this value
    #[arg(long = "type", value_name = "TYPE")]
    pub event_type: Option<String>,

    /// Only forward events carrying this tag (can be specified multiple times)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Never forward events carrying this tag (can be specified multiple times)
    #[arg(long = "exclude-tag", value_name = "TAG")]
    pub exclude_tags: Vec<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Read events from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Test mode - log payloads without posting them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slack-relay
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
