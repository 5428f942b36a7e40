// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine lifecycle and frame-advance events.
//!
//! This module contains message types for logging events related to:
//! * Lazy processor construction
//! * Per-frame advance dispatch
//! * Engine reset

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::observability::messages::StructuredLog;
use crate::time::WorldTime;
use crate::traits::ProcessorType;

/// A processor instance was constructed on first request.
///
/// # Log Level
/// `debug!` - Lifecycle bookkeeping
///
/// # Example
/// ```
/// use motivator::observability::messages::engine::ProcessorSpawned;
/// use motivator::traits::ProcessorType;
///
/// let msg = ProcessorSpawned {
///     processor_type: ProcessorType(1),
///     name: "linear",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorSpawned<'a> {
    pub processor_type: ProcessorType,
    pub name: &'a str,
}

impl Display for ProcessorSpawned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Spawned processor '{}' for type {}",
            self.name, self.processor_type
        )
    }
}

impl StructuredLog for ProcessorSpawned<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_type = self.processor_type.0,
            processor = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_spawned",
            span_name = name,
            processor_type = self.processor_type.0,
            processor = self.name,
        )
    }
}

/// A frame advance was dispatched to every live processor.
///
/// # Log Level
/// `trace!` - Per-frame, high-volume
///
/// # Example
/// ```
/// use motivator::observability::messages::engine::FrameAdvanced;
///
/// let msg = FrameAdvanced {
///     delta_time: 1,
///     processor_count: 3,
/// };
///
/// tracing::trace!("{}", msg);
/// ```
pub struct FrameAdvanced {
    pub delta_time: WorldTime,
    pub processor_count: usize,
}

impl Display for FrameAdvanced {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Advancing {} processors by {} ticks",
            self.processor_count, self.delta_time
        )
    }
}

impl StructuredLog for FrameAdvanced {
    fn log(&self) {
        tracing::trace!(
            delta_time = self.delta_time,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "frame_advanced",
            span_name = name,
            delta_time = self.delta_time,
            processor_count = self.processor_count,
        )
    }
}

/// The engine destroyed all of its processors.
///
/// # Log Level
/// `debug!` - Lifecycle bookkeeping
///
/// # Example
/// ```
/// use motivator::observability::messages::engine::EngineReset;
///
/// let msg = EngineReset { processor_count: 3 };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EngineReset {
    pub processor_count: usize,
}

impl Display for EngineReset {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine reset: destroying {} processors", self.processor_count)
    }
}

impl StructuredLog for EngineReset {
    fn log(&self) {
        tracing::debug!(processor_count = self.processor_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "engine_reset",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}
