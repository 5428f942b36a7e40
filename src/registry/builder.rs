// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::RegistryError;
use crate::observability::messages::registry::{
    DuplicateFamilyRejected, FamilyRegistered, RegistryFrozen,
};
use crate::observability::messages::StructuredLog;
use crate::registry::ProcessorRegistry;
use crate::traits::{ProcessorFamily, ProcessorType};

/// Collects processor-family registrations during application startup.
///
/// Every family calls [`register`](Self::register) exactly once before any
/// engine is created; [`build`](Self::build) then freezes the collection
/// into a read-only [`ProcessorRegistry`]. Registering two families under
/// the same [`ProcessorType`] is rejected loudly: silently overwriting
/// would leave any already-constructed processors paired with a family
/// that no longer owns their type.
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
/// // A second registration for the same type is rejected.
/// assert!(builder.register(Arc::new(LinearFamily)).is_err());
///
/// let registry = builder.build();
/// assert_eq!(registry.len(), 1);
/// ```
pub struct RegistryBuilder {
    families: HashMap<ProcessorType, Arc<dyn ProcessorFamily>>,
}

impl RegistryBuilder {
    /// Create a builder with no registered families
    pub fn new() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    /// Register a processor family under its own type identifier.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateFamily`] if a family is already
    /// registered for the same type; the first registration stays intact.
    pub fn register(&mut self, family: Arc<dyn ProcessorFamily>) -> Result<(), RegistryError> {
        let processor_type = family.processor_type();

        match self.families.entry(processor_type) {
            Entry::Occupied(occupied) => {
                let existing = occupied.get().name();
                DuplicateFamilyRejected {
                    processor_type,
                    rejected: family.name(),
                    existing,
                }
                .log();

                Err(RegistryError::DuplicateFamily {
                    processor_type,
                    rejected: family.name(),
                    existing,
                })
            }
            Entry::Vacant(slot) => {
                FamilyRegistered {
                    processor_type,
                    name: family.name(),
                }
                .log();

                slot.insert(family);
                Ok(())
            }
        }
    }

    /// Get the number of families registered so far
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Check if no families have been registered yet
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Freeze the collected registrations into a read-only registry.
    pub fn build(self) -> ProcessorRegistry {
        RegistryFrozen {
            family_count: self.families.len(),
        }
        .log();

        ProcessorRegistry::new(self.families)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
