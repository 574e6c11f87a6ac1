//! # Core Error Types
//!
//! Errors for the cold paths: registration and configuration.
//!
//! Hot-path store operations never construct errors - they return sentinel
//! values (`Option`, `bool`) so the caller decides what failure means.

use thiserror::Error;

/// Errors that can occur in the core kernel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Every slot in the registry's fixed type table is already assigned.
    #[error("component type limit reached: {limit} types already registered")]
    TypeLimitReached {
        /// Capacity of the type table.
        limit: usize,
    },

    /// A registry slot holds a store of a different component type.
    ///
    /// Unreachable through the public API - slot numbers are assigned per
    /// type and never reused - but surfaced as an error rather than a panic.
    #[error("registry slot {slot} does not hold the requested component type")]
    SlotTypeMismatch {
        /// The slot that failed to downcast.
        slot: u32,
    },

    /// Invalid configuration file or out-of-range capacity.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
