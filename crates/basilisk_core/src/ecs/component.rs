//! # Component Contract
//!
//! A component is a value owned by at most one entity at a time. Components
//! live in their own dedicated store; the kernel never inspects them beyond
//! moving and dropping.

use bytemuck::{Pod, Zeroable};

/// Marker trait for values that can be stored as components.
///
/// Components may own heap data - their destructors run exactly once, on
/// removal, overwrite, or store teardown. The bounds exist so stores can be
/// shared across threads behind external synchronization.
pub trait Component: Send + Sync + 'static {}

impl<T> Component for T where T: Send + Sync + 'static {}

/// Position component.
///
/// Plain integer coordinates, packed for dense storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Position {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Velocity component, in units per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Velocity {
    /// X velocity.
    pub x: i32,
    /// Y velocity.
    pub y: i32,
}

impl Velocity {
    /// Creates a new velocity.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
