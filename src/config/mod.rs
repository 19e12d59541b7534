//! Configuration layer for slack-relay.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! List options (`--attachment`, `--tag`, `--exclude-tag`) **replace** the
//! corresponding TOML lists entirely when given on the command line; they
//! are never merged.
//!
//! # Empty Values
//!
//! An empty string for any optional text option (`channel`, `username`,
//! `icon_emoji`, `icon_url`, `proxy`) counts as "not configured", so the
//! matching payload key is left out.
//!
//! # Proxy Port
//!
//! The proxy may be given as `host` or `host:port`. A port inside the proxy
//! value wins; otherwise `proxy_port` applies, falling back to 8888.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
