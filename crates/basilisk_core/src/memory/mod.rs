//! # Memory Management
//!
//! Pluggable backing memory for component stores.
//!
//! ## Design Philosophy
//!
//! A store is allocated exactly once, at registration, and freed exactly
//! once, when the registry drops. The registry never touches raw memory -
//! it goes through [`StoreAllocator`] and holds the owning handle that
//! comes back.

mod alloc;

pub use alloc::{HeapStoreAllocator, StoreAllocator};
