use std::any::Any;
use std::fmt;

use crate::time::WorldTime;

/// Identifier naming a motion-algorithm family (e.g. linear, spring).
///
/// Unique per registered family, stable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessorType(pub u32);

impl fmt::Display for ProcessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stateful component managing every motivator of one algorithm family.
///
/// An engine owns at most one processor per family and advances it exactly
/// once per simulation frame. Everything beyond the advance contract
/// (attaching motivators, reading values) is family-specific API on the
/// concrete type, reached by downcasting through
/// [`as_any_mut`](Processor::as_any_mut).
pub trait Processor {
    /// Advance every motivator owned by this processor by `delta_time`
    /// ticks.
    fn advance_frame(&mut self, delta_time: WorldTime);

    fn processor_type(&self) -> ProcessorType;

    fn name(&self) -> &'static str;

    /// Number of motivators currently managed by this processor.
    fn motivator_count(&self) -> usize;

    /// Downcast hook for family-specific access; implementations return
    /// `self`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Constructor capability for one processor family.
///
/// Families are registered once, before any engine use, and consulted by
/// engines to construct processor instances on first request. The engine
/// owns the spawned box; dropping it releases the instance, so a
/// processor can never outlive pairing with the family that built it.
pub trait ProcessorFamily: Send + Sync {
    fn processor_type(&self) -> ProcessorType;

    fn name(&self) -> &'static str;

    /// Construct a fresh processor instance for this family.
    fn spawn(&self) -> Box<dyn Processor>;
}
