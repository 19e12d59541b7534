//! Output gate: the predicate deciding whether an event is forwarded.

use std::fmt;

use serde_json::Value;

use crate::event::Event;

/// Decides whether an event should be emitted.
///
/// # Example
///
/// ```
/// use slack_relay::event::Event;
/// use slack_relay::output::{EventFilter, OutputGate};
///
/// let gate = EventFilter::new().with_tags(["alert"]);
/// let event = Event::parse(r#"{"message": "x", "tags": ["alert"]}"#).unwrap();
/// assert!(gate.should_emit(&event));
/// ```
pub trait OutputGate: Send + Sync {
    /// Returns true if the event should be forwarded.
    fn should_emit(&self, event: &Event) -> bool;
}

/// A gate that emits every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEmit;

impl OutputGate for AlwaysEmit {
    fn should_emit(&self, _event: &Event) -> bool {
        true
    }
}

/// Filters events by their `type` field and `tags` array.
///
/// An event is emitted when all of these hold:
/// - no type is configured, or the event's `type` field equals it;
/// - the event carries every required tag;
/// - the event carries none of the excluded tags.
///
/// An unconfigured filter emits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    event_type: Option<String>,
    tags: Vec<String>,
    exclude_tags: Vec<String>,
}

impl EventFilter {
    /// Creates a filter that emits everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the event's `type` field to equal `event_type`.
    #[must_use]
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Requires every one of `tags` to be present.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Rejects events carrying any of `tags`.
    #[must_use]
    pub fn with_exclude_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if no condition is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_type.is_none() && self.tags.is_empty() && self.exclude_tags.is_empty()
    }

    fn type_matches(&self, event: &Event) -> bool {
        self.event_type.as_deref().is_none_or(|wanted| {
            matches!(event.get("type"), Some(Value::String(actual)) if actual == wanted)
        })
    }
}

impl OutputGate for EventFilter {
    fn should_emit(&self, event: &Event) -> bool {
        if !self.type_matches(event) {
            return false;
        }

        let event_tags = event.tags();
        self.tags.iter().all(|t| event_tags.contains(&t.as_str()))
            && !self
                .exclude_tags
                .iter()
                .any(|t| event_tags.contains(&t.as_str()))
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(
            f,
            "type={}, tags=[{}], exclude_tags=[{}]",
            self.event_type.as_deref().unwrap_or("*"),
            self.tags.join(","),
            self.exclude_tags.join(","),
        )
    }
}
