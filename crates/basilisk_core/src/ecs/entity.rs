//! # Entity Identifiers
//!
//! Entities are opaque 32-bit identifiers. They carry no structure beyond
//! equality and array-indexability; one reserved value marks "no entity".
//!
//! Identifiers are issued by [`EntityAllocator`] in strictly increasing
//! order and are never reused.

use crate::config::DEFAULT_MAX_ENTITIES;

/// Opaque identifier naming one logical object.
///
/// The all-ones value is reserved as the [`EntityId::INVALID`] sentinel;
/// every store operation treats it as a silent failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Invalid/none sentinel.
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates an identifier from its raw value.
    ///
    /// Validity against a particular universe is checked by the store the
    /// identifier is handed to, not here.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the identifier as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks whether this is the reserved sentinel.
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Issues entity identifiers in strictly increasing order, without reuse.
///
/// There is no free-list: a destroyed entity's identifier is gone for the
/// lifetime of the allocator. Exhausting the identifier space is an
/// explicit, defined failure - [`EntityAllocator::allocate`] fails closed
/// with `None` instead of wrapping.
#[derive(Debug)]
pub struct EntityAllocator {
    /// Next identifier to issue.
    next: u32,
    /// One past the largest identifier that may be issued.
    limit: u32,
}

impl EntityAllocator {
    /// Creates an allocator for the identifier universe `[0, limit)`.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero or not representable as a 32-bit
    /// identifier.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        assert!(limit > 0, "identifier limit must be greater than zero");
        assert!(
            limit <= u32::MAX as usize,
            "identifier limit cannot exceed u32::MAX"
        );
        Self {
            next: 0,
            limit: limit as u32,
        }
    }

    /// Issues the next unused identifier.
    ///
    /// # Returns
    ///
    /// The new identifier, or `None` once all `limit` identifiers have
    /// been issued. Every later call also returns `None`.
    #[inline]
    pub fn allocate(&mut self) -> Option<EntityId> {
        if self.next >= self.limit {
            tracing::warn!("entity identifier space exhausted at {}", self.limit);
            return None;
        }
        let id = EntityId::new(self.next);
        self.next += 1;
        Some(id)
    }

    /// Returns how many identifiers have been issued so far.
    #[inline]
    #[must_use]
    pub const fn issued(&self) -> u32 {
        self.next
    }

    /// Returns how many identifiers are still available.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.limit - self.next
    }

    /// Returns the size of the identifier universe.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel() {
        assert!(EntityId::INVALID.is_invalid());
        assert!(!EntityId::new(0).is_invalid());
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }

    #[test]
    fn test_strictly_increasing() {
        let mut allocator = EntityAllocator::new(16);
        let ids: Vec<_> = (0..4).map(|_| allocator.allocate().unwrap()).collect();
        assert_eq!(ids, vec![
            EntityId::new(0),
            EntityId::new(1),
            EntityId::new(2),
            EntityId::new(3),
        ]);
        assert_eq!(allocator.issued(), 4);
        assert_eq!(allocator.remaining(), 12);
    }

    #[test]
    fn test_exhaustion_fails_closed() {
        let mut allocator = EntityAllocator::new(2);
        assert!(allocator.allocate().is_some());
        assert!(allocator.allocate().is_some());
        assert!(allocator.allocate().is_none());
        // Stays exhausted - no wrapping, no reuse.
        assert!(allocator.allocate().is_none());
        assert_eq!(allocator.issued(), 2);
    }
}
