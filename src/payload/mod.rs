//! Payload layer: turning an event into a chat message payload.
//!
//! This module provides:
//! - The message shape sent to the webhook ([`Payload`])
//! - The per-output formatting options ([`PayloadTemplate`])
//! - The pure event-to-payload transformation ([`build_payload`])

mod builder;
mod template;


pub use builder::{Payload, build_payload};
pub use template::PayloadTemplate;
