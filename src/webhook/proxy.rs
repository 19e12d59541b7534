//! Forward proxy settings.

use std::fmt;

/// A forward HTTP proxy that tunnels webhook requests.
///
/// HTTPS requests are tunnelled with `CONNECT`, so TLS is still negotiated
/// end to end with the webhook host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    host: String,
    port: u16,
}

impl ProxyConfig {
    /// Port used when the proxy setting does not name one.
    pub const DEFAULT_PORT: u16 = 8888;

    /// Creates a proxy setting for `host:port`.
    ///
    /// IPv6 hosts must be given in brackets (`[::1]`).
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Returns the proxy host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the proxy port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the proxy URL handed to the HTTP client.
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
