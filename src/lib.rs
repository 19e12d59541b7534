//! slack-relay: forward events to a chat webhook
//!
//! A library for turning schema-less events into Slack-style message
//! payloads and posting them to an incoming webhook, best-effort.

pub mod config;
pub mod event;
pub mod output;
pub mod payload;
pub mod webhook;
