//! The per-event receive step.

use crate::event::Event;
use crate::payload::{PayloadTemplate, build_payload};
use crate::webhook::Notify;

use super::{AlwaysEmit, OutputGate};

/// Forwards events to a chat webhook.
///
/// Each received event passes the gate, is turned into a payload and is
/// handed to the notifier. Nothing is returned and nothing propagates:
/// delivery failures are contained by the notifier.
///
/// # Type Parameters
///
/// - `N`: The notifier (usually [`SlackNotifier`](crate::webhook::SlackNotifier))
/// - `G`: The output gate (defaults to [`AlwaysEmit`])
#[derive(Debug)]
pub struct SlackOutput<N, G = AlwaysEmit> {
    template: PayloadTemplate,
    notifier: N,
    gate: G,
}

impl<N> SlackOutput<N, AlwaysEmit> {
    /// Creates an output that forwards every event.
    #[must_use]
    pub const fn new(template: PayloadTemplate, notifier: N) -> Self {
        Self {
            template,
            notifier,
            gate: AlwaysEmit,
        }
    }
}

impl<N, G> SlackOutput<N, G> {
    /// Sets the output gate.
    #[must_use]
    pub fn with_gate<G2>(self, gate: G2) -> SlackOutput<N, G2> {
        SlackOutput {
            template: self.template,
            notifier: self.notifier,
            gate,
        }
    }

    /// Returns the payload template.
    #[must_use]
    pub const fn template(&self) -> &PayloadTemplate {
        &self.template
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }
}

impl<N: Notify, G: OutputGate> SlackOutput<N, G> {
    /// Processes one event.
    pub async fn receive(&self, event: &Event) {
        if !self.gate.should_emit(event) {
            tracing::trace!("Event rejected by output gate");
            return;
        }

        let payload = build_payload(event, &self.template);
        self.notifier.notify(&payload).await;
    }
}
