//! Tests for `SlackOutput`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;

use super::{EventFilter, SlackOutput};
use crate::event::Event;
use crate::payload::{Payload, PayloadTemplate};
use crate::webhook::{
    DeliveryError, FailureReporter, HttpClient, HttpError, HttpRequest, HttpResponse, Notify,
    SlackNotifier,
};

/// Notifier that records every payload it is given.
#[derive(Debug, Default)]
struct RecordingNotifier {
    payloads: Mutex<Vec<Payload>>,
}

impl RecordingNotifier {
    fn payloads(&self) -> Vec<Payload> {
        self.payloads.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    async fn notify(&self, payload: &Payload) {
        self.payloads.lock().unwrap().push(payload.clone());
    }
}

/// Client that refuses the first request and accepts the rest.
#[derive(Debug, Default)]
struct FlakyClient {
    calls: AtomicUsize,
}

impl HttpClient for FlakyClient {
    async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
            return Err(HttpError::Connection(Box::new(refused)));
        }
        Ok(HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![],
        ))
    }
}

#[derive(Debug, Default)]
struct CountingReporter {
    count: AtomicUsize,
}

impl FailureReporter for Arc<CountingReporter> {
    fn report(&self, _error: &DeliveryError) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

fn message(text: &str) -> Event {
    Event::new().with_field("message", text)
}

mod receive {
    use super::*;

    #[tokio::test]
    async fn builds_payload_from_template() {
        let template = PayloadTemplate::new("{message}").with_channel("#ops");
        let output = SlackOutput::new(template, RecordingNotifier::default());

        output.receive(&message("disk full")).await;

        let payloads = output.notifier().payloads();
        assert_eq!(payloads.len(), 1);
        assert_eq!(
            serde_json::to_value(&payloads[0]).unwrap(),
            json!({"text": "disk full", "channel": "#ops"})
        );
    }

    #[tokio::test]
    async fn gate_rejection_skips_notification() {
        let output = SlackOutput::new(PayloadTemplate::default(), RecordingNotifier::default())
            .with_gate(EventFilter::new().with_tags(["alert"]));

        output.receive(&message("quiet")).await;
        output
            .receive(&message("loud").with_field("tags", json!(["alert"])))
            .await;

        let payloads = output.notifier().payloads();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].text, "loud");
    }

    #[tokio::test]
    async fn failed_delivery_does_not_stop_later_events() {
        let reporter = Arc::new(CountingReporter::default());
        let notifier = SlackNotifier::new(
            FlakyClient::default(),
            url::Url::parse("https://hooks.example.com/X").unwrap(),
        )
        .with_reporter(reporter.clone());
        let output = SlackOutput::new(PayloadTemplate::default(), notifier);

        output.receive(&message("first")).await;
        output.receive(&message("second")).await;
        output.receive(&message("third")).await;

        assert_eq!(reporter.count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn template_accessor_returns_template() {
        let output = SlackOutput::new(
            PayloadTemplate::new("{host}"),
            RecordingNotifier::default(),
        );
        assert_eq!(output.template().format(), "{host}");
    }
}
