//! Formatting options applied to every event.

use serde_json::Value;

/// Message formatting options, fixed at startup.
///
/// `format`, `channel` and `username` are `{field}` templates resolved per
/// event; `icon_emoji` and `icon_url` are copied literally.
///
/// # Example
///
/// ```
/// use slack_relay::payload::PayloadTemplate;
///
/// let template = PayloadTemplate::default()
///     .with_channel("#ops")
///     .with_icon_emoji(":fire:");
/// assert_eq!(template.format(), "{message}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadTemplate {
    format: String,
    channel: Option<String>,
    username: Option<String>,
    icon_emoji: Option<String>,
    icon_url: Option<String>,
    attachments: Vec<Value>,
}

impl PayloadTemplate {
    /// Default message text template.
    pub const DEFAULT_FORMAT: &'static str = "{message}";

    /// Creates a template with the given text format and no overrides.
    #[must_use]
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            channel: None,
            username: None,
            icon_emoji: None,
            icon_url: None,
            attachments: Vec::new(),
        }
    }

    /// Sets the channel override template.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Sets the username override template.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the literal emoji icon.
    #[must_use]
    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self
    }

    /// Sets the literal icon URL.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Sets the default attachments.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Value>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Returns the text template.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Returns the channel template, if configured.
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Returns the username template, if configured.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the emoji icon, if configured.
    #[must_use]
    pub fn icon_emoji(&self) -> Option<&str> {
        self.icon_emoji.as_deref()
    }

    /// Returns the icon URL, if configured.
    #[must_use]
    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    /// Returns the default attachments.
    #[must_use]
    pub fn attachments(&self) -> &[Value] {
        &self.attachments
    }
}

impl Default for PayloadTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FORMAT)
    }
}
