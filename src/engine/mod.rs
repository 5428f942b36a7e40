//! Per-application engine that owns and advances motion processors.
//!
//! An [`Engine`] holds at most one live processor per registered family.
//! Processors are constructed lazily on first request and owned by the
//! engine until [`reset`](Engine::reset) or drop, at which point they are
//! released by dropping their boxes. `advance_frame` is pure dispatch: the
//! engine performs no motion computation of its own.


use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::observability::messages::engine::{EngineReset, FrameAdvanced, ProcessorSpawned};
use crate::observability::messages::registry::UnknownFamilyRequested;
use crate::observability::messages::StructuredLog;
use crate::registry::ProcessorRegistry;
use crate::time::WorldTime;
use crate::traits::{Processor, ProcessorType};

/// Per-application owner of at most one processor instance per family,
/// dispatching per-tick advances.
///
/// # Update model
///
/// `advance_frame` makes a single pass over the live processors in
/// unspecified order. If a motivator in family A reads output produced by
/// family B during the same tick, it observes B's state from the
/// *previous* tick. That one-tick staleness is the documented contract;
/// resolving same-tick dependencies would need a multi-pass scheduler,
/// which this core deliberately does not have.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use motivator::engine::Engine;
/// use motivator::families::{LinearFamily, LinearProcessor};
/// use motivator::registry::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::new();
/// builder.register(Arc::new(LinearFamily)).unwrap();
/// let registry = Arc::new(builder.build());
///
/// let mut engine = Engine::new(registry);
/// let processor = engine.processor(LinearProcessor::PROCESSOR_TYPE).unwrap();
/// assert_eq!(processor.motivator_count(), 0);
///
/// engine.advance_frame(1);
/// engine.reset();
/// ```
pub struct Engine {
    registry: Arc<ProcessorRegistry>,
    processors: HashMap<ProcessorType, Box<dyn Processor>>,
}

impl Engine {
    /// Create an engine that resolves processor types against `registry`.
    pub fn new(registry: Arc<ProcessorRegistry>) -> Self {
        Self {
            registry,
            processors: HashMap::new(),
        }
    }

    /// Get the processor for `processor_type`, constructing it on first
    /// request.
    ///
    /// Repeat calls before a [`reset`](Self::reset) return the same
    /// instance. Returns `None` when no family is registered for the
    /// type; in that case nothing is constructed and no state changes.
    /// This is the only failure this call can report.
    pub fn processor(&mut self, processor_type: ProcessorType) -> Option<&mut dyn Processor> {
        match self.processors.entry(processor_type) {
            Entry::Occupied(entry) => Some(entry.into_mut().as_mut()),
            Entry::Vacant(slot) => match self.registry.lookup(processor_type) {
                Some(family) => {
                    let processor = family.spawn();
                    ProcessorSpawned {
                        processor_type,
                        name: processor.name(),
                    }
                    .log();

                    Some(slot.insert(processor).as_mut())
                }
                None => {
                    UnknownFamilyRequested { processor_type }.log();
                    None
                }
            },
        }
    }

    /// Get the processor for `processor_type` downcast to its concrete
    /// family type, constructing it on first request.
    ///
    /// Family-specific API (attaching motivators, reading values) lives
    /// on the concrete processor type; this is the typed counterpart of
    /// [`processor`](Self::processor). Returns `None` when the type is
    /// unregistered, or when `P` is not what the registered family
    /// spawns.
    pub fn processor_as<P: Processor + 'static>(
        &mut self,
        processor_type: ProcessorType,
    ) -> Option<&mut P> {
        self.processor(processor_type)?
            .as_any_mut()
            .downcast_mut::<P>()
    }

    /// Advance every live processor by `delta_time` ticks, exactly once
    /// each.
    ///
    /// Iteration order across families is unspecified and must not be
    /// relied upon. `delta_time` is passed through unmodified; zero and
    /// negative values are interpreted by each processor.
    pub fn advance_frame(&mut self, delta_time: WorldTime) {
        FrameAdvanced {
            delta_time,
            processor_count: self.processors.len(),
        }
        .log();

        for processor in self.processors.values_mut() {
            processor.advance_frame(delta_time);
        }
    }

    /// Destroy every live processor and return the engine to its empty
    /// state.
    ///
    /// Each processor is released by dropping the box its family spawned,
    /// atomically with its removal from the instance map. Safe to call on
    /// an empty engine. A later [`processor`](Self::processor) call for a
    /// previously-used type constructs a fresh instance.
    pub fn reset(&mut self) {
        EngineReset {
            processor_count: self.processors.len(),
        }
        .log();

        self.processors.clear();
    }

    /// Get the number of live processors
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Check if the engine currently owns no processors
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Get the registry this engine resolves against
    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("processor_count", &self.processors.len())
            .field("processor_types", &self.processors.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;

    fn empty_engine() -> Engine {
        Engine::new(Arc::new(RegistryBuilder::new().build()))
    }

    #[test]
    fn new_engine_owns_no_processors() {
        let engine = empty_engine();

        assert!(engine.is_empty());
        assert_eq!(engine.processor_count(), 0);
    }

    #[test]
    fn reset_on_empty_engine_is_a_noop() {
        let mut engine = empty_engine();

        engine.reset();

        assert!(engine.is_empty());
    }

    #[test]
    fn advance_frame_on_empty_engine_is_a_noop() {
        let mut engine = empty_engine();

        engine.advance_frame(1);
        engine.advance_frame(0);
        engine.advance_frame(-1);

        assert!(engine.is_empty());
    }

    #[test]
    fn debug_output_reports_processor_count() {
        let engine = empty_engine();

        let debug = format!("{:?}", engine);
        assert!(debug.contains("processor_count: 0"));
    }
}
