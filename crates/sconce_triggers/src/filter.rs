//! Overlap filtering

use sconce_core::ActorId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Filter for which actors a region will observe
///
/// The region owner is excluded by default; beyond that, explicit allow
/// and block lists. An empty allow list means any actor passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapFilter {
    /// Specific actors that can overlap (empty = any)
    pub allowed: HashSet<ActorId>,
    /// Specific actors that cannot overlap
    pub blocked: HashSet<ActorId>,
    /// Whether the region owner can overlap itself
    pub allow_self: bool,
}

impl OverlapFilter {
    /// Create a filter that accepts everything except the owner
    pub fn new() -> Self {
        Self {
            allowed: HashSet::new(),
            blocked: HashSet::new(),
            allow_self: false,
        }
    }

    /// Allow only specific actors
    pub fn only<I: IntoIterator<Item = ActorId>>(mut self, actors: I) -> Self {
        self.allowed = actors.into_iter().collect();
        self
    }

    /// Block specific actors
    pub fn block<I: IntoIterator<Item = ActorId>>(mut self, actors: I) -> Self {
        for actor in actors {
            self.blocked.insert(actor);
        }
        self
    }

    /// Let the owner overlap its own region
    pub fn allow_self_overlap(mut self) -> Self {
        self.allow_self = true;
        self
    }

    /// Check if an actor passes this filter
    pub fn passes(&self, actor: ActorId, owner: ActorId) -> bool {
        if actor == owner && !self.allow_self {
            return false;
        }
        if self.blocked.contains(&actor) {
            return false;
        }
        if !self.allowed.is_empty() && !self.allowed.contains(&actor) {
            return false;
        }
        true
    }
}

impl Default for OverlapFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes_others() {
        let filter = OverlapFilter::new();
        let owner = ActorId::from_raw(1);

        assert!(filter.passes(ActorId::from_raw(2), owner));
    }

    #[test]
    fn test_self_excluded_by_default() {
        let filter = OverlapFilter::new();
        let owner = ActorId::from_raw(5);

        assert!(!filter.passes(owner, owner));
        assert!(OverlapFilter::new()
            .allow_self_overlap()
            .passes(owner, owner));
    }

    #[test]
    fn test_blocked_actors() {
        let bad = ActorId::from_raw(100);
        let filter = OverlapFilter::new().block([bad]);
        let owner = ActorId::from_raw(1);

        assert!(!filter.passes(bad, owner));
        assert!(filter.passes(ActorId::from_raw(2), owner));
    }

    #[test]
    fn test_allow_list() {
        let vip = ActorId::from_raw(7);
        let filter = OverlapFilter::new().only([vip]);
        let owner = ActorId::from_raw(1);

        assert!(filter.passes(vip, owner));
        assert!(!filter.passes(ActorId::from_raw(8), owner));
    }
}
