// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Process-wide catalogue of motion processor families.
//!
//! Registration is two-phase: a [`RegistryBuilder`] collects families
//! during application startup, then `build()` freezes the catalogue into
//! an immutable [`ProcessorRegistry`] that engines consult for the rest of
//! the process lifetime. The split makes the initialization phase explicit
//! instead of leaning on static-initialization ordering across compilation
//! units, and engines can never observe a half-populated registry.

mod builder;

pub use builder::RegistryBuilder;

use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::{ProcessorFamily, ProcessorType};

/// Frozen mapping from processor type to the family that constructs
/// processors of that type.
///
/// Created by [`RegistryBuilder::build`]; read-only afterwards. Shared
/// with engines as `Arc<ProcessorRegistry>` so independent engines resolve
/// against the same catalogue.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use motivator::families::LinearFamily;
/// use motivator::registry::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::new();
/// builder.register(Arc::new(LinearFamily)).unwrap();
///
/// let registry = builder.build();
/// assert_eq!(registry.len(), 1);
/// ```
pub struct ProcessorRegistry(HashMap<ProcessorType, Arc<dyn ProcessorFamily>>);

impl ProcessorRegistry {
    pub(crate) fn new(families: HashMap<ProcessorType, Arc<dyn ProcessorFamily>>) -> Self {
        Self(families)
    }

    /// Get the family registered for a processor type
    pub fn lookup(&self, processor_type: ProcessorType) -> Option<&Arc<dyn ProcessorFamily>> {
        self.0.get(&processor_type)
    }

    /// Check if a family is registered for a processor type
    pub fn contains(&self, processor_type: ProcessorType) -> bool {
        self.0.contains_key(&processor_type)
    }

    /// Get all registered processor types
    pub fn types(&self) -> impl Iterator<Item = ProcessorType> + '_ {
        self.0.keys().copied()
    }

    /// Get the number of registered families
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("family_count", &self.0.len())
            .field("processor_types", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::WorldTime;
    use crate::traits::Processor;

    struct NullProcessor(ProcessorType);

    impl Processor for NullProcessor {
        fn advance_frame(&mut self, _delta_time: WorldTime) {}

        fn processor_type(&self) -> ProcessorType {
            self.0
        }

        fn name(&self) -> &'static str {
            "null"
        }

        fn motivator_count(&self) -> usize {
            0
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    struct NullFamily(ProcessorType);

    impl ProcessorFamily for NullFamily {
        fn processor_type(&self) -> ProcessorType {
            self.0
        }

        fn name(&self) -> &'static str {
            "null"
        }

        fn spawn(&self) -> Box<dyn Processor> {
            Box::new(NullProcessor(self.0))
        }
    }

    fn registry_with_types(types: &[u32]) -> ProcessorRegistry {
        let mut builder = RegistryBuilder::new();
        for &ty in types {
            builder
                .register(Arc::new(NullFamily(ProcessorType(ty))))
                .unwrap();
        }
        builder.build()
    }

    #[test]
    fn lookup_returns_registered_family() {
        let registry = registry_with_types(&[1, 2]);

        let family = registry.lookup(ProcessorType(1));
        assert!(family.is_some());
        assert_eq!(family.unwrap().processor_type(), ProcessorType(1));
    }

    #[test]
    fn lookup_misses_unregistered_type() {
        let registry = registry_with_types(&[1]);

        assert!(registry.lookup(ProcessorType(9)).is_none());
        assert!(!registry.contains(ProcessorType(9)));
    }

    #[test]
    fn types_enumerates_every_registered_family() {
        let registry = registry_with_types(&[3, 5, 8]);

        let mut types: Vec<u32> = registry.types().map(|t| t.0).collect();
        types.sort_unstable();
        assert_eq!(types, vec![3, 5, 8]);
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = registry_with_types(&[]);

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
