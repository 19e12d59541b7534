//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::payload::PayloadTemplate;
use crate::webhook::ProxyConfig;

/// Default message text template.
pub const FORMAT: &str = PayloadTemplate::DEFAULT_FORMAT;

/// Default forward proxy port.
pub const PROXY_PORT: u16 = ProxyConfig::DEFAULT_PORT;

/// Default output path of the `init` subcommand.
pub const INIT_OUTPUT: &str = "slack-relay.toml";
