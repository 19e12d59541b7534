//! Event layer: the schema-less records fed into the relay.
//!
//! This module provides:
//! - The event record and its field references ([`Event`])
//! - Classification of the reserved `attachments` field ([`AttachmentField`])
//! - `{field}` template interpolation ([`interpolate`], [`Event::sprintf`])

mod error;
mod interpolate;
mod record;

#[cfg(test)]
mod interpolate_tests;

pub use error::EventError;
pub use interpolate::interpolate;
pub use record::{AttachmentField, Event};
