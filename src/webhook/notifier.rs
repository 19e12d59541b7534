//! Payload delivery to the webhook.

use http::HeaderValue;
use http::header::CONTENT_TYPE;

use crate::payload::Payload;

use super::{DeliveryResult, FailureReporter, HttpClient, HttpRequest, TracingReporter};

/// Name of the form field carrying the JSON payload.
pub const PAYLOAD_FIELD: &str = "payload";

/// Content type of the request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Trait for handing a built payload to its destination.
///
/// Delivery is best-effort: implementations deal with their own failures
/// and never report them to the caller.
pub trait Notify: Send + Sync {
    /// Delivers one payload.
    fn notify(&self, payload: &Payload) -> impl std::future::Future<Output = ()> + Send;
}

/// Posts payloads to a chat webhook, once each.
///
/// The payload JSON is sent as the single form field `payload` of an
/// `application/x-www-form-urlencoded` POST body. There is no retry: a
/// failed attempt is handed to the [`FailureReporter`] and dropped.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `R`: The failure reporter (defaults to [`TracingReporter`])
///
/// # Example
///
/// ```no_run
/// use slack_relay::payload::{PayloadTemplate, build_payload};
/// use slack_relay::event::Event;
/// use slack_relay::webhook::{Notify, ReqwestClient, SlackNotifier};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let notifier = SlackNotifier::new(
///     ReqwestClient::new()?,
///     Url::parse("https://hooks.example.com/services/X")?,
/// );
/// let event = Event::new().with_field("message", "disk full");
/// notifier.notify(&build_payload(&event, &PayloadTemplate::default())).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SlackNotifier<H, R = TracingReporter> {
    client: H,
    reporter: R,
    url: url::Url,
}

impl<H> SlackNotifier<H, TracingReporter> {
    /// Creates a notifier that reports failures through `tracing`.
    #[must_use]
    pub const fn new(client: H, url: url::Url) -> Self {
        Self {
            client,
            reporter: TracingReporter,
            url,
        }
    }
}

impl<H, R> SlackNotifier<H, R> {
    /// Sets a custom failure reporter.
    #[must_use]
    pub fn with_reporter<R2>(self, reporter: R2) -> SlackNotifier<H, R2> {
        SlackNotifier {
            client: self.client,
            reporter,
            url: self.url,
        }
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl<H: HttpClient, R: FailureReporter> SlackNotifier<H, R> {
    /// Builds the form-encoded POST request for a payload.
    fn build_request(&self, payload: &Payload) -> Result<HttpRequest, serde_json::Error> {
        let json = payload.to_json()?;
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair(PAYLOAD_FIELD, &json)
            .finish();

        Ok(HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .with_body(body.into_bytes()))
    }

    /// Makes one delivery attempt and returns its outcome.
    ///
    /// The response status is not checked; any response counts as delivered.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`](super::DeliveryError) if the payload cannot
    /// be serialized or the request does not complete.
    pub async fn try_deliver(&self, payload: &Payload) -> DeliveryResult {
        let request = self.build_request(payload)?;
        Ok(self.client.request(request).await?)
    }
}

impl<H: HttpClient, R: FailureReporter> Notify for SlackNotifier<H, R> {
    async fn notify(&self, payload: &Payload) {
        match self.try_deliver(payload).await {
            Ok(response) => {
                tracing::debug!(
                    status = %response.status,
                    body = response.body_text().unwrap_or("<binary>"),
                    "Webhook responded"
                );
            }
            Err(e) => self.reporter.report(&e),
        }
    }
}

/// Logs payloads instead of sending them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunNotifier;

impl Notify for DryRunNotifier {
    async fn notify(&self, payload: &Payload) {
        match payload.to_json() {
            Ok(json) => tracing::info!("Dry-run: would post {json}"),
            Err(e) => tracing::warn!("Dry-run: payload is not serializable: {e}"),
        }
    }
}
