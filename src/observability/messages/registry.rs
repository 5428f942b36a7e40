// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for family registration and lookup events.
//!
//! This module contains message types for logging events related to:
//! * Processor-family registration during startup
//! * Duplicate-registration rejections
//! * Registry freezing
//! * Lookup requests for unknown families

use std::fmt::{Display, Formatter};
use tracing::Span;

use crate::observability::messages::StructuredLog;
use crate::traits::ProcessorType;

/// A processor family was registered.
///
/// # Log Level
/// `debug!` - Startup bookkeeping
///
/// # Example
/// ```
/// use motivator::observability::messages::registry::FamilyRegistered;
/// use motivator::traits::ProcessorType;
///
/// let msg = FamilyRegistered {
///     processor_type: ProcessorType(1),
///     name: "linear",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct FamilyRegistered<'a> {
    pub processor_type: ProcessorType,
    pub name: &'a str,
}

impl Display for FamilyRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered processor family '{}' as type {}",
            self.name, self.processor_type
        )
    }
}

impl StructuredLog for FamilyRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            processor_type = self.processor_type.0,
            family = self.name,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "family_registered",
            span_name = name,
            processor_type = self.processor_type.0,
            family = self.name,
        )
    }
}

/// A duplicate registration was rejected.
///
/// # Log Level
/// `warn!` - Misconfiguration that the caller must resolve
///
/// # Example
/// ```
/// use motivator::observability::messages::registry::DuplicateFamilyRejected;
/// use motivator::traits::ProcessorType;
///
/// let msg = DuplicateFamilyRejected {
///     processor_type: ProcessorType(1),
///     rejected: "linear_v2",
///     existing: "linear",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct DuplicateFamilyRejected<'a> {
    pub processor_type: ProcessorType,
    pub rejected: &'a str,
    pub existing: &'a str,
}

impl Display for DuplicateFamilyRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected registration of family '{}' for type {}: already registered to '{}'",
            self.rejected, self.processor_type, self.existing
        )
    }
}

impl StructuredLog for DuplicateFamilyRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            processor_type = self.processor_type.0,
            rejected = self.rejected,
            existing = self.existing,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_family_rejected",
            span_name = name,
            processor_type = self.processor_type.0,
            rejected = self.rejected,
            existing = self.existing,
        )
    }
}

/// The registry was frozen and is now read-only.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use motivator::observability::messages::registry::RegistryFrozen;
///
/// let msg = RegistryFrozen { family_count: 4 };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RegistryFrozen {
    pub family_count: usize,
}

impl Display for RegistryFrozen {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor-family registry frozen with {} families",
            self.family_count
        )
    }
}

impl StructuredLog for RegistryFrozen {
    fn log(&self) {
        tracing::info!(family_count = self.family_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "registry_frozen",
            span_name = name,
            family_count = self.family_count,
        )
    }
}

/// An engine requested a processor type with no registered family.
///
/// # Log Level
/// `warn!` - Recoverable caller error
///
/// # Example
/// ```
/// use motivator::observability::messages::registry::UnknownFamilyRequested;
/// use motivator::traits::ProcessorType;
///
/// let msg = UnknownFamilyRequested {
///     processor_type: ProcessorType(42),
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct UnknownFamilyRequested {
    pub processor_type: ProcessorType,
}

impl Display for UnknownFamilyRequested {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No processor family registered for type {}",
            self.processor_type
        )
    }
}

impl StructuredLog for UnknownFamilyRequested {
    fn log(&self) {
        tracing::warn!(processor_type = self.processor_type.0, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unknown_family_requested",
            span_name = name,
            processor_type = self.processor_type.0,
        )
    }
}
