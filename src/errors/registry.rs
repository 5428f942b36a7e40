// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::traits::ProcessorType;

/// Errors that can occur while populating the processor-family registry
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A family is already registered under this processor type
    DuplicateFamily {
        /// The contested processor type
        processor_type: ProcessorType,
        /// Name of the family whose registration was rejected
        rejected: &'static str,
        /// Name of the family already holding the slot
        existing: &'static str,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateFamily {
                processor_type,
                rejected,
                existing,
            } => {
                write!(
                    f,
                    "Processor type {} is already registered to family '{}'; rejected duplicate registration of '{}'",
                    processor_type, existing, rejected
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_family_display_names_both_families() {
        let err = RegistryError::DuplicateFamily {
            processor_type: ProcessorType(7),
            rejected: "spring_v2",
            existing: "spring",
        };

        let msg = err.to_string();
        assert!(msg.contains("type 7"));
        assert!(msg.contains("'spring'"));
        assert!(msg.contains("'spring_v2'"));
    }
}
