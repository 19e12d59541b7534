//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook endpoint section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message formatting section
    #[serde(default)]
    pub message: MessageSection,

    /// Forward proxy section
    #[serde(default)]
    pub proxy: ProxySection,

    /// Event filter section
    #[serde(default)]
    pub filter: FilterSection,
}

/// Webhook endpoint section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Incoming webhook URL
    pub url: Option<String>,
}

/// Message formatting section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Text template
    pub format: Option<String>,

    /// Channel override template
    pub channel: Option<String>,

    /// Username override template
    pub username: Option<String>,

    /// Emoji icon
    pub icon_emoji: Option<String>,

    /// Icon URL
    pub icon_url: Option<String>,

    /// Default attachments
    #[serde(default)]
    pub attachments: Vec<Value>,
}

/// Forward proxy section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySection {
    /// Proxy host, optionally with `:port`
    pub host: Option<String>,

    /// Proxy port used when `host` has none
    pub port: Option<u16>,
}

/// Event filter section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Required value of the event's `type` field
    #[serde(rename = "type")]
    pub event_type: Option<String>,

    /// Tags that must all be present
    #[serde(default)]
    pub tags: Vec<String>,

    /// Tags that must all be absent
    #[serde(default)]
    pub exclude_tags: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slack-relay configuration file

[webhook]
# Incoming webhook URL (required, must be https)
# url = "https://hooks.slack.com/services/T000/B000/XXXX"

[message]
# Message text. {field} is replaced by the event's field; nested fields use
# {[outer][inner]}. Missing fields become empty.
format = "{message}"

# Channel and username overrides (templates, optional)
# channel = "#ops"
# username = "{host} monitor"

# Icon (literal, optional)
# icon_emoji = ":rotating_light:"
# icon_url = "https://example.com/icon.png"

# Default attachments. An event's own non-empty "attachments" array replaces
# these; an empty array removes them.
# Note: --attachment on the command line REPLACES these entirely
# [[message.attachments]]
# color = "danger"
# text = "See the runbook"

[proxy]
# Forward proxy, "host" or "host:port" (optional)
# host = "proxy.internal"

# Port used when host has none (default: 8888)
# port = 8888

[filter]
# Only forward events whose "type" field equals this value
# type = "nginx"

# Only forward events carrying all of these tags
# Note: --tag on the command line REPLACES these entirely
# tags = ["alert"]

# Never forward events carrying any of these tags
# Note: --exclude-tag on the command line REPLACES these entirely
# exclude_tags = ["muted"]
"##
    .to_string()
}
