//! The event record and field-reference lookup.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EventError;

/// Name of the reserved field carrying per-event attachments.
const ATTACHMENTS_FIELD: &str = "attachments";

/// One unit of pipeline data: a JSON object with schema-less named fields.
///
/// Fields are addressed by a *field reference*, which is either a plain
/// top-level name (`message`) or a bracketed path walking into nested
/// objects and arrays (`[host][name]`, `[items][0]`).
///
/// # Example
///
/// ```
/// use slack_relay::event::Event;
///
/// let event = Event::parse(r#"{"message": "disk full", "host": {"name": "db1"}}"#).unwrap();
/// assert_eq!(event.sprintf("{[host][name]}: {message}"), "db1: disk full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event {
    fields: Map<String, Value>,
}

/// The reserved `attachments` field of an event, classified once.
///
/// Resolving the field's dynamic shape up front keeps the payload builder
/// free of inline type checks.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentField {
    /// The event has no `attachments` field.
    Absent,
    /// The field exists but is not an array; it is ignored.
    NonArray,
    /// The field is an empty array, which suppresses attachments entirely.
    EmptyArray,
    /// The field is a non-empty array of attachment values.
    NonEmptyArray(Vec<Value>),
}

impl Event {
    /// Creates an empty event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an event from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Parse`] if the text is not valid JSON or
    /// its top-level value is not an object.
    pub fn parse(json: &str) -> Result<Self, EventError> {
        let fields: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { fields })
    }

    /// Sets a top-level field, returning the event for chaining.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a top-level field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the value addressed by a field reference, if present.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&Value> {
        let Some(path) = parse_path(reference) else {
            return self.fields.get(reference);
        };

        let (first, rest) = path.split_first()?;
        let mut current = self.fields.get(*first)?;
        for segment in rest {
            current = match current {
                Value::Object(map) => map.get(*segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Returns true if the field reference resolves to a value.
    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.get(reference).is_some()
    }

    /// Renders a field as template text.
    ///
    /// Strings are returned verbatim, numbers and booleans in their JSON
    /// form, arrays as their rendered elements joined with `,`, and objects
    /// as compact JSON. A missing field or `null` yields `None`.
    #[must_use]
    pub fn field_text(&self, reference: &str) -> Option<String> {
        self.get(reference).and_then(render_value)
    }

    /// Interpolates `{field}` placeholders in `template` against this event.
    ///
    /// Unresolved placeholders become the empty string.
    #[must_use]
    pub fn sprintf(&self, template: &str) -> String {
        super::interpolate(template, |reference| self.field_text(reference))
    }

    /// Classifies the reserved `attachments` field.
    #[must_use]
    pub fn attachments(&self) -> AttachmentField {
        match self.fields.get(ATTACHMENTS_FIELD) {
            None => AttachmentField::Absent,
            Some(Value::Array(items)) if items.is_empty() => AttachmentField::EmptyArray,
            Some(Value::Array(items)) => AttachmentField::NonEmptyArray(items.clone()),
            Some(_) => AttachmentField::NonArray,
        }
    }

    /// Returns the string entries of the event's `tags` field.
    ///
    /// A missing or non-array `tags` field yields no tags; non-string
    /// entries are skipped.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        match self.fields.get("tags") {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the event has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for Event {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Splits a bracketed reference like `[a][b]` into its segments.
///
/// Returns `None` for plain names, which are looked up as-is.
fn parse_path(reference: &str) -> Option<Vec<&str>> {
    let mut rest = reference.strip_prefix('[')?;
    let mut segments = Vec::new();

    loop {
        let (segment, after) = rest.split_once(']')?;
        if segment.is_empty() || segment.contains('[') {
            return None;
        }
        segments.push(segment);

        if after.is_empty() {
            return Some(segments);
        }
        rest = after.strip_prefix('[')?;
    }
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| render_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}
