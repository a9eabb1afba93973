//! Actor and component identifiers

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

/// Identifies an actor on the stage
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    /// Create an actor id from a raw value
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Identifies a collision component attached to an actor
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ComponentId(u64);

impl ComponentId {
    /// Create a component id from a raw value
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Thread-safe allocator for actor and component ids
///
/// Ids are monotonic and never reused for the lifetime of the allocator.
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create a new allocator
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next actor id
    pub fn next_actor(&self) -> ActorId {
        ActorId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Allocate the next component id
    pub fn next_component(&self) -> ComponentId {
        ComponentId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let alloc = IdAllocator::new();
        let a = alloc.next_actor();
        let b = alloc.next_actor();
        assert_ne!(a, b);
    }

    #[test]
    fn test_actor_and_component_ids_share_counter() {
        let alloc = IdAllocator::new();
        let a = alloc.next_actor();
        let c = alloc.next_component();
        assert_ne!(a.raw(), c.raw());
    }

    #[test]
    fn test_raw_round_trip() {
        let id = ActorId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "actor#42");
    }
}
