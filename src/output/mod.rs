//! Output layer: deciding which events to forward and forwarding them.
//!
//! This module provides:
//! - The output gate seam ([`OutputGate`]) with a pass-through gate
//!   ([`AlwaysEmit`]) and a type/tag filter ([`EventFilter`])
//! - The per-event receive step ([`SlackOutput`])

mod gate;
mod relay;

#[cfg(test)]
mod gate_tests;
#[cfg(test)]
mod relay_tests;

pub use gate::{AlwaysEmit, EventFilter, OutputGate};
pub use relay::SlackOutput;
