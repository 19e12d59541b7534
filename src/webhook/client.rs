//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse, ProxyConfig};

/// Production HTTP client using reqwest.
///
/// Only HTTPS requests are allowed and the peer certificate is always
/// verified; a failed handshake surfaces as [`HttpError::Connection`].
/// Requests go through the configured [`ProxyConfig`] if one is given,
/// otherwise directly to the host (proxy environment variables are ignored).
///
/// # Example
///
/// ```no_run
/// use slack_relay::webhook::{HttpClient, HttpRequest, ProxyConfig, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let proxy = ProxyConfig::new("proxy.internal", ProxyConfig::DEFAULT_PORT);
/// let client = ReqwestClient::with_proxy(Some(&proxy))?;
/// let url = Url::parse("https://hooks.example.com/services/X")?;
/// let response = client.request(HttpRequest::post(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a direct (proxy-less) HTTPS client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Setup`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_proxy(None)
    }

    /// Creates an HTTPS client, optionally routed through a forward proxy.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Setup`] if the proxy URL is rejected or the TLS
    /// backend cannot be initialized.
    pub fn with_proxy(proxy: Option<&ProxyConfig>) -> Result<Self, HttpError> {
        let builder = reqwest::Client::builder().https_only(true);

        let builder = match proxy {
            Some(proxy) => {
                let proxy =
                    reqwest::Proxy::all(proxy.url()).map_err(|e| HttpError::Setup(Box::new(e)))?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        let inner = builder.build().map_err(|e| HttpError::Setup(Box::new(e)))?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
