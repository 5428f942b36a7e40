// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Constant-velocity motivators.
//!
//! The simplest motion family: each motivator moves a scalar value toward
//! its target at a fixed speed per tick and clamps on arrival. Useful on
//! its own for fades and sweeps, and as the reference implementation of
//! the processor capability contract.

use std::any::Any;

use crate::time::WorldTime;
use crate::traits::{Processor, ProcessorFamily, ProcessorType};

/// Handle to a motivator owned by a [`LinearProcessor`].
///
/// Valid only against the processor instance that issued it; a reset
/// destroys the processor and every id it handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotivatorId(usize);

#[derive(Debug, Clone, Copy)]
struct LinearMotivator {
    value: f32,
    target: f32,
    /// Units per tick, non-negative.
    speed: f32,
}

/// Processor managing every constant-velocity motivator of an engine.
pub struct LinearProcessor {
    // Slab with tombstones: removal leaves a hole that the next add reuses,
    // so ids stay stable without shifting live motivators.
    motivators: Vec<Option<LinearMotivator>>,
}

impl LinearProcessor {
    /// Type identifier under which this family registers.
    pub const PROCESSOR_TYPE: ProcessorType = ProcessorType(1);

    pub fn new() -> Self {
        Self {
            motivators: Vec::new(),
        }
    }

    /// Attach a motivator starting at `value`, moving toward `target` at
    /// `speed` units per tick.
    pub fn add_motivator(&mut self, value: f32, target: f32, speed: f32) -> MotivatorId {
        let motivator = LinearMotivator {
            value,
            target,
            speed: speed.max(0.0),
        };

        match self.motivators.iter().position(Option::is_none) {
            Some(index) => {
                self.motivators[index] = Some(motivator);
                MotivatorId(index)
            }
            None => {
                self.motivators.push(Some(motivator));
                MotivatorId(self.motivators.len() - 1)
            }
        }
    }

    /// Detach a motivator; its slot is reused by a later add.
    pub fn remove_motivator(&mut self, id: MotivatorId) {
        if let Some(slot) = self.motivators.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Current value, or `None` for a removed/unknown id.
    pub fn value(&self, id: MotivatorId) -> Option<f32> {
        self.motivators
            .get(id.0)
            .copied()
            .flatten()
            .map(|m| m.value)
    }

    /// Redirect a motivator toward a new target.
    pub fn set_target(&mut self, id: MotivatorId, target: f32) {
        if let Some(Some(motivator)) = self.motivators.get_mut(id.0) {
            motivator.target = target;
        }
    }
}

impl Default for LinearProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for LinearProcessor {
    fn advance_frame(&mut self, delta_time: WorldTime) {
        // Non-positive deltas mean no motion this tick.
        if delta_time <= 0 {
            return;
        }

        let ticks = delta_time as f32;
        for motivator in self.motivators.iter_mut().flatten() {
            let remaining = motivator.target - motivator.value;
            let step = motivator.speed * ticks;

            if remaining.abs() <= step {
                motivator.value = motivator.target;
            } else {
                motivator.value += step * remaining.signum();
            }
        }
    }

    fn processor_type(&self) -> ProcessorType {
        Self::PROCESSOR_TYPE
    }

    fn name(&self) -> &'static str {
        "linear"
    }

    fn motivator_count(&self) -> usize {
        self.motivators.iter().flatten().count()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Family constructing [`LinearProcessor`] instances.
pub struct LinearFamily;

impl ProcessorFamily for LinearFamily {
    fn processor_type(&self) -> ProcessorType {
        LinearProcessor::PROCESSOR_TYPE
    }

    fn name(&self) -> &'static str {
        "linear"
    }

    fn spawn(&self) -> Box<dyn Processor> {
        Box::new(LinearProcessor::new())
    }
}
