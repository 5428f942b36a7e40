// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements the `Display` trait for human-readable
//! output and [`StructuredLog`] for emission through `tracing` with
//! structured fields.
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `registry` - family registration and lookup events
//! * `engine` - engine lifecycle and frame-advance events

use tracing::Span;

pub mod engine;
pub mod registry;

/// Common interface for emitting a message through `tracing`.
///
/// `log()` emits the message at its designated level with structured
/// fields attached; `span()` builds a span carrying the same fields for
/// callers that want to scope further work under the event.
pub trait StructuredLog {
    /// Emit the message at its designated level.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
