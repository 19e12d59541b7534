//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use url::Url;

use crate::output::EventFilter;
use crate::payload::PayloadTemplate;
use crate::webhook::ProxyConfig;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required, https)
    pub url: Url,

    /// Message formatting options
    pub template: PayloadTemplate,

    /// Forward proxy, if any
    pub proxy: Option<ProxyConfig>,

    /// Output gate conditions
    pub filter: EventFilter,

    /// Event input file. If `None`, events are read from stdin.
    pub input: Option<PathBuf>,

    /// Dry-run mode (log payloads without posting them)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proxy_str = self
            .proxy
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let input_str = self
            .input
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

        // The webhook path is a credential; only the host is shown.
        write!(
            f,
            "Config {{ url: {}://{}/***, format: {:?}, channel: {}, proxy: {}, filter: {}, \
             input: {}, dry_run: {} }}",
            self.url.scheme(),
            self.url.host_str().unwrap_or_default(),
            self.template.format(),
            self.template.channel().unwrap_or("default"),
            proxy_str,
            self.filter,
            input_str,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `url` is missing, invalid or not `https`
    /// - The proxy setting is invalid
    /// - An `--attachment` argument is not valid JSON
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let template = Self::build_template(cli, toml)?;
        let proxy = Self::resolve_proxy(cli, toml)?;
        let filter = Self::build_filter(cli, toml);

        Ok(Self {
            url,
            template,
            proxy,
            filter,
            input: cli.input.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = pick(cli.url.as_deref(), toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        let invalid = |reason: &str| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(url_str).map_err(|e| invalid(&e.to_string()))?;

        if url.scheme() != "https" {
            return Err(invalid("scheme must be https"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(url)
    }

    fn build_template(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<PayloadTemplate, ConfigError> {
        let message = toml.map(|t| &t.message);

        // Priority: CLI explicit > TOML > default
        let format = cli
            .format
            .clone()
            .or_else(|| message.and_then(|m| m.format.clone()))
            .unwrap_or_else(|| defaults::FORMAT.to_string());

        let mut template = PayloadTemplate::new(format);

        if let Some(channel) =
            pick(cli.channel.as_deref(), message.and_then(|m| m.channel.as_deref()))
        {
            template = template.with_channel(channel);
        }
        if let Some(username) =
            pick(cli.username.as_deref(), message.and_then(|m| m.username.as_deref()))
        {
            template = template.with_username(username);
        }
        if let Some(icon) =
            pick(cli.icon_emoji.as_deref(), message.and_then(|m| m.icon_emoji.as_deref()))
        {
            template = template.with_icon_emoji(icon);
        }
        if let Some(icon) =
            pick(cli.icon_url.as_deref(), message.and_then(|m| m.icon_url.as_deref()))
        {
            template = template.with_icon_url(icon);
        }

        // CLI attachments replace TOML attachments entirely
        let attachments = if cli.attachments.is_empty() {
            message.map(|m| m.attachments.clone()).unwrap_or_default()
        } else {
            cli.attachments
                .iter()
                .map(|raw| parse_attachment(raw))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(template.with_attachments(attachments))
    }

    fn resolve_proxy(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<ProxyConfig>, ConfigError> {
        let section = toml.map(|t| &t.proxy);

        let Some(raw) = pick(cli.proxy.as_deref(), section.and_then(|p| p.host.as_deref())) else {
            return Ok(None);
        };

        // Priority: port inside the value > CLI --proxy-port > TOML > default
        let fallback_port = cli
            .proxy_port
            .or_else(|| section.and_then(|p| p.port))
            .unwrap_or(defaults::PROXY_PORT);

        parse_proxy(raw, fallback_port).map(Some)
    }

    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> EventFilter {
        let section = toml.map(|t| &t.filter);
        let mut filter = EventFilter::new();

        if let Some(event_type) = pick(
            cli.event_type.as_deref(),
            section.and_then(|s| s.event_type.as_deref()),
        ) {
            filter = filter.with_type(event_type);
        }

        // CLI tag lists replace TOML lists (not merged)
        let tags = if cli.tags.is_empty() {
            section.map(|s| s.tags.clone()).unwrap_or_default()
        } else {
            cli.tags.clone()
        };
        let exclude_tags = if cli.exclude_tags.is_empty() {
            section.map(|s| s.exclude_tags.clone()).unwrap_or_default()
        } else {
            cli.exclude_tags.clone()
        };

        filter.with_tags(tags).with_exclude_tags(exclude_tags)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Picks the CLI value over the TOML value, treating empty strings as unset.
fn pick<'a>(cli: Option<&'a str>, toml: Option<&'a str>) -> Option<&'a str> {
    cli.or(toml).filter(|s| !s.is_empty())
}

fn parse_attachment(raw: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::InvalidAttachment {
        value: raw.to_string(),
        source: e,
    })
}

fn parse_proxy(raw: &str, fallback_port: u16) -> Result<ProxyConfig, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidProxy {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    if raw.contains("://") {
        return Err(invalid("expected 'host' or 'host:port' without a scheme"));
    }

    let parsed = Url::parse(&format!("http://{raw}")).map_err(|e| invalid(&e.to_string()))?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| invalid("missing host"))?;

    if parsed.path() != "/" || parsed.query().is_some() || !parsed.username().is_empty() {
        return Err(invalid("expected 'host' or 'host:port'"));
    }

    // `Url` hides the scheme's default port in any spelling (":80", ":080"),
    // so whether a port was written at all is read from the raw value.
    let has_port = raw
        .trim_end_matches('/')
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()));
    let port = has_port
        .then(|| parsed.port_or_known_default())
        .flatten()
        .unwrap_or(fallback_port);

    if port == 0 {
        return Err(invalid("port must be greater than 0"));
    }

    Ok(ProxyConfig::new(host, port))
}
