//! # BASILISK Core Kernel
//!
//! Fixed-capacity Entity Component System core designed for:
//! - O(1) insert, lookup and removal with gap-free dense storage
//! - A bounded identifier universe chosen once, at startup
//! - Heterogeneous component types behind one type-erased registry
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in hot path** - every store pre-allocates
//! 2. **Data-oriented design** - component values are packed contiguously
//! 3. **Sentinels, not panics** - bad input fails locally with `None`
//!
//! ## Example
//!
//! ```rust,ignore
//! use basilisk_core::{ComponentRegistry, EntityAllocator, Position};
//!
//! let mut allocator = EntityAllocator::default();
//! let mut registry = ComponentRegistry::new();
//!
//! // Registration phase: single-threaded, once per type.
//! let positions = registry.register::<Position>()?;
//!
//! // Runtime phase: hot-path work goes straight to the store.
//! let entity = allocator.allocate().unwrap();
//! positions.insert(entity, Position::new(1, 2));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;
pub mod memory;

pub use config::{CoreConfig, DEFAULT_MAX_COMPONENT_TYPES, DEFAULT_MAX_ENTITIES};
pub use ecs::{
    AnyStorage, Component, ComponentRegistry, ComponentStorage, EntityAllocator, EntityId,
    Position, Velocity,
};
pub use error::{CoreError, CoreResult};
pub use memory::{HeapStoreAllocator, StoreAllocator};
