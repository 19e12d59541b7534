//! Webhook layer for delivering payloads to the chat service.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client with proxy support ([`ReqwestClient`], [`ProxyConfig`])
//! - Single-shot payload delivery ([`Notify`], [`SlackNotifier`], [`DryRunNotifier`])
//! - Reporting contained delivery failures ([`FailureReporter`], [`TracingReporter`])

mod client;
mod error;
mod http;
mod notifier;
mod proxy;
mod reporter;

#[cfg(test)]
mod test_fixtures;

pub use client::ReqwestClient;
pub use error::{DeliveryError, DeliveryResult, HttpError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use notifier::{DryRunNotifier, FORM_CONTENT_TYPE, Notify, PAYLOAD_FIELD, SlackNotifier};
pub use proxy::ProxyConfig;
pub use reporter::{FailureReporter, TracingReporter, error_chain};
