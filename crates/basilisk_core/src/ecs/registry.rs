//! # Component Registry
//!
//! Type-erased owner of one [`ComponentStorage`] per distinct component
//! type.
//!
//! The registry is consulted once per type: callers register (or look up)
//! a store at startup, then do all hot-path work directly against the
//! returned reference. Slot numbers are assigned the first time a type is
//! seen and never change or get reused.
//!
//! ## Two-phase lifecycle
//!
//! Registration mutates the slot table and takes `&mut self`, so the
//! single-threaded registration phase is enforced by the compiler rather
//! than by convention. Once registration is done,
//! [`ComponentRegistry::storage`] only reads the table and is safe from
//! any number of threads.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::config::{CoreConfig, DEFAULT_MAX_COMPONENT_TYPES, DEFAULT_MAX_ENTITIES};
use crate::error::{CoreError, CoreResult};
use crate::memory::{HeapStoreAllocator, StoreAllocator};

use super::component::Component;
use super::storage::ComponentStorage;

/// Uniform handle for stores of unrelated component types.
///
/// The single capability the registry needs beyond destruction is getting
/// the concrete store back out; destruction itself is the owning box's
/// `Drop`.
pub trait AnyStorage: Any + Send + Sync {
    /// The store as a dynamically typed reference, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutable form of [`AnyStorage::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Human-readable name of the component type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Number of live components in the store.
    fn len(&self) -> usize;

    /// Checks whether the store holds no components.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Component> AnyStorage for ComponentStorage<C> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<C>()
    }

    fn len(&self) -> usize {
        ComponentStorage::len(self)
    }
}

/// Owner of every component store, keyed by component type.
///
/// A fixed slot table holds at most `type_capacity()` stores; each
/// distinct type consumes one slot, permanently, the first time it is
/// registered. The registry exclusively owns its stores - dropping it
/// drops every store exactly once, in unspecified order.
pub struct ComponentRegistry {
    /// Fixed slot table of type-erased stores.
    slots: Box<[Option<Box<dyn AnyStorage>>]>,
    /// Slot number assigned to each registered type.
    type_slots: HashMap<TypeId, u32>,
    /// Next unassigned slot number.
    next_slot: u32,
    /// Identifier-universe size handed to every new store.
    store_capacity: usize,
}

impl ComponentRegistry {
    /// Creates a registry with the default capacities.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacities(DEFAULT_MAX_ENTITIES, DEFAULT_MAX_COMPONENT_TYPES)
    }

    /// Creates a registry sized from a validated [`CoreConfig`].
    #[must_use]
    pub fn with_config(config: &CoreConfig) -> Self {
        Self::with_capacities(config.max_entities, config.max_component_types)
    }

    /// Creates a registry with explicit capacities.
    ///
    /// # Panics
    ///
    /// Panics if either capacity is zero (construction-time contract, like
    /// the stores themselves).
    #[must_use]
    pub fn with_capacities(max_entities: usize, max_component_types: usize) -> Self {
        assert!(max_entities > 0, "max_entities must be greater than zero");
        assert!(
            max_component_types > 0,
            "max_component_types must be greater than zero"
        );

        let slots = (0..max_component_types)
            .map(|_| None)
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Self {
            slots,
            type_slots: HashMap::new(),
            next_slot: 0,
            store_capacity: max_entities,
        }
    }

    /// Registers component type `C`, creating its store on first call.
    ///
    /// Idempotent: registering a type again returns the existing store
    /// untouched and consumes no further slot. Must only be called during
    /// the single-threaded registration phase (enforced by `&mut self`).
    ///
    /// # Errors
    ///
    /// [`CoreError::TypeLimitReached`] once every slot is assigned.
    pub fn register<C: Component>(&mut self) -> CoreResult<&mut ComponentStorage<C>> {
        self.register_in::<C, _>(&HeapStoreAllocator)
    }

    /// Allocator-parameterized form of [`Self::register`].
    ///
    /// The store's backing memory is obtained through `allocator`; the
    /// registry keeps the owning handle.
    ///
    /// # Errors
    ///
    /// [`CoreError::TypeLimitReached`] once every slot is assigned.
    pub fn register_in<C, A>(&mut self, allocator: &A) -> CoreResult<&mut ComponentStorage<C>>
    where
        C: Component,
        A: StoreAllocator,
    {
        let slot = self.ensure_slot::<C>()?;
        let capacity = self.store_capacity;
        let entry = &mut self.slots[slot as usize];
        if entry.is_none() {
            tracing::debug!(
                "created component store {} in slot {}",
                std::any::type_name::<C>(),
                slot
            );
            let store: Box<dyn AnyStorage> =
                allocator.allocate_store(ComponentStorage::<C>::new(capacity));
            *entry = Some(store);
        }
        match entry {
            Some(store) => store
                .as_any_mut()
                .downcast_mut::<ComponentStorage<C>>()
                .ok_or(CoreError::SlotTypeMismatch { slot }),
            None => Err(CoreError::SlotTypeMismatch { slot }),
        }
    }

    /// Assigns a slot number to `C`, or returns the one it already has.
    fn ensure_slot<C: Component>(&mut self) -> CoreResult<u32> {
        if let Some(&slot) = self.type_slots.get(&TypeId::of::<C>()) {
            return Ok(slot);
        }
        let limit = self.slots.len();
        if self.next_slot as usize >= limit {
            tracing::warn!(
                "component type limit reached ({limit}), rejecting {}",
                std::any::type_name::<C>()
            );
            return Err(CoreError::TypeLimitReached { limit });
        }
        let slot = self.next_slot;
        self.next_slot += 1;
        self.type_slots.insert(TypeId::of::<C>(), slot);
        Ok(slot)
    }

    /// Looks up the store for `C`.
    ///
    /// Read-only: safe to call concurrently from multiple threads once
    /// registration has finished.
    ///
    /// # Returns
    ///
    /// The store, or `None` if `C` was never registered.
    #[must_use]
    pub fn storage<C: Component>(&self) -> Option<&ComponentStorage<C>> {
        let slot = *self.type_slots.get(&TypeId::of::<C>())?;
        let entry = self.slots.get(slot as usize)?.as_ref()?;
        entry.as_any().downcast_ref::<ComponentStorage<C>>()
    }

    /// Mutable form of [`Self::storage`].
    pub fn storage_mut<C: Component>(&mut self) -> Option<&mut ComponentStorage<C>> {
        let slot = *self.type_slots.get(&TypeId::of::<C>())?;
        let entry = self.slots.get_mut(slot as usize)?.as_mut()?;
        entry.as_any_mut().downcast_mut::<ComponentStorage<C>>()
    }

    /// Checks whether `C` has been registered.
    #[must_use]
    pub fn is_registered<C: Component>(&self) -> bool {
        self.type_slots.contains_key(&TypeId::of::<C>())
    }

    /// Number of distinct component types registered so far.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.next_slot as usize
    }

    /// Capacity of the type slot table.
    #[must_use]
    pub fn type_capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
