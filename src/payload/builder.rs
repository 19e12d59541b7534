//! Event-to-payload transformation.

use serde::Serialize;
use serde_json::Value;

use crate::event::{AttachmentField, Event};

use super::PayloadTemplate;

/// A chat message ready to be posted to the webhook.
///
/// Optional keys are omitted from the serialized JSON when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload {
    /// Message text.
    pub text: String,

    /// Channel override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Display-name override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Emoji icon, e.g. `:fire:`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    /// Icon image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Structured attachment blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Value>>,
}

impl Payload {
    /// Serializes the payload to compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds the payload for one event.
///
/// Text, channel and username are interpolated against the event; icons
/// are copied as configured. Attachments come from the template unless the
/// event's own `attachments` array overrides them: a non-empty array
/// replaces them and an empty array removes them. A non-array `attachments`
/// field is ignored.
#[must_use]
pub fn build_payload(event: &Event, template: &PayloadTemplate) -> Payload {
    let configured = (!template.attachments().is_empty()).then(|| template.attachments().to_vec());

    let attachments = match event.attachments() {
        AttachmentField::NonEmptyArray(items) => Some(items),
        AttachmentField::EmptyArray => None,
        AttachmentField::Absent | AttachmentField::NonArray => configured,
    };

    Payload {
        text: event.sprintf(template.format()),
        channel: template.channel().map(|t| event.sprintf(t)),
        username: template.username().map(|t| event.sprintf(t)),
        icon_emoji: template.icon_emoji().map(ToString::to_string),
        icon_url: template.icon_url().map(ToString::to_string),
        attachments,
    }
}
