// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;    // runtime configuration
pub mod engine;    // per-application dispatcher
pub mod errors;    // error handling
pub mod families;  // built-in processor families
pub mod observability;
pub mod registry;  // process-wide family catalogue
pub mod time;      // fixed-tick simulation time
pub mod traits;    // unified abstractions
