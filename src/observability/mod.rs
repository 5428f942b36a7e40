// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the motivator engine. Message types follow a
//! struct-based pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::registry` - family registration and lookup events
//! * `messages::engine` - engine lifecycle and frame-advance events
//!
//! # Usage
//!
//! ```rust
//! use motivator::observability::messages::engine::EngineReset;
//!
//! let msg = EngineReset { processor_count: 3 };
//!
//! tracing::debug!("{}", msg);
//! ```

pub mod messages;
