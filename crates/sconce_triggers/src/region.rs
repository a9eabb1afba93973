//! Trigger region: per-volume overlap bookkeeping

use crate::events::{OverlapEvent, OverlapSubscriptions};
use crate::filter::OverlapFilter;
use crate::volume::DetectionVolume;
use sconce_core::{ActorId, ComponentId};
use std::collections::HashSet;

/// A detection volume with overlap state and subscription points
///
/// The region is attached to a spatial anchor it does not own; `offset`
/// is its position relative to that anchor. Overlap transitions are
/// edge-detected: an actor reported inside twice in a row produces one
/// begin event, not two.
pub struct TriggerRegion {
    /// Volume shape
    pub volume: DetectionVolume,
    /// Position relative to the anchor the region is attached to
    pub offset: [f32; 3],
    /// Which actors this region observes
    pub filter: OverlapFilter,
    /// Whether the region is observing at all
    enabled: bool,
    /// Actors currently inside the volume
    overlapping: HashSet<ActorId>,
    /// The begin/end subscription points
    subscriptions: OverlapSubscriptions,
    /// Events queued since the last dispatch
    queue: Vec<OverlapEvent>,
}

impl TriggerRegion {
    /// Create a region with the given volume, attached at zero offset
    pub fn new(volume: DetectionVolume) -> Self {
        Self {
            volume,
            offset: [0.0, 0.0, 0.0],
            filter: OverlapFilter::new(),
            enabled: true,
            overlapping: HashSet::new(),
            subscriptions: OverlapSubscriptions::new(),
            queue: Vec::new(),
        }
    }

    /// Set the offset from the anchor
    pub fn with_offset(mut self, offset: [f32; 3]) -> Self {
        self.offset = offset;
        self
    }

    /// Set the overlap filter
    pub fn with_filter(mut self, filter: OverlapFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Register a callback on the begin-overlap subscription point
    pub fn on_begin<F>(mut self, callback: F) -> Self
    where
        F: Fn(&OverlapEvent) + Send + Sync + 'static,
    {
        self.subscriptions.subscribe_begin(callback);
        self
    }

    /// Register a callback on the end-overlap subscription point
    pub fn on_end<F>(mut self, callback: F) -> Self
    where
        F: Fn(&OverlapEvent) + Send + Sync + 'static,
    {
        self.subscriptions.subscribe_end(callback);
        self
    }

    /// World-space center of the volume for a given anchor position
    pub fn center_at(&self, anchor: [f32; 3]) -> [f32; 3] {
        [
            anchor[0] + self.offset[0],
            anchor[1] + self.offset[1],
            anchor[2] + self.offset[2],
        ]
    }

    /// Report one actor's containment for this step
    ///
    /// Queues a begin event on the outside-to-inside edge and an end event
    /// on the inside-to-outside edge. Disabled regions and filtered actors
    /// queue nothing.
    pub fn observe(
        &mut self,
        owner: ActorId,
        other: ActorId,
        component: Option<ComponentId>,
        inside: bool,
    ) {
        if !self.enabled {
            return;
        }
        if !self.filter.passes(other, owner) {
            return;
        }

        let was_inside = self.overlapping.contains(&other);

        if inside && !was_inside {
            self.overlapping.insert(other);
            self.queue
                .push(OverlapEvent::begin(owner, Some(other), component));
        } else if !inside && was_inside {
            self.overlapping.remove(&other);
            self.queue
                .push(OverlapEvent::end(owner, Some(other), component));
        }
    }

    /// Deliver queued events to the subscription points, in queue order
    pub fn dispatch_queued(&mut self) {
        let events: Vec<_> = self.queue.drain(..).collect();
        for event in &events {
            self.subscriptions.dispatch(event);
        }
    }

    /// Hand queued events out for external processing instead
    pub fn drain_events(&mut self) -> Vec<OverlapEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Number of events waiting for dispatch
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Check if an actor is currently inside
    pub fn is_overlapping(&self, actor: ActorId) -> bool {
        self.overlapping.contains(&actor)
    }

    /// Actors currently inside the volume
    pub fn overlapping(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.overlapping.iter().copied()
    }

    /// Number of actors currently inside
    pub fn overlap_count(&self) -> usize {
        self.overlapping.len()
    }

    /// Start observing
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop observing; overlap state is kept
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Check if the region is observing
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl core::fmt::Debug for TriggerRegion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TriggerRegion")
            .field("volume", &self.volume)
            .field("offset", &self.offset)
            .field("enabled", &self.enabled)
            .field("overlap_count", &self.overlapping.len())
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn ids() -> (ActorId, ActorId) {
        (ActorId::from_raw(1), ActorId::from_raw(2))
    }

    #[test]
    fn test_enter_and_exit_edges() {
        let (owner, other) = ids();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0));

        region.observe(owner, other, None, true);
        assert!(region.is_overlapping(other));
        assert_eq!(region.pending_events(), 1);

        region.observe(owner, other, None, false);
        assert!(!region.is_overlapping(other));
        assert_eq!(region.pending_events(), 2);

        let events = region.drain_events();
        assert!(events[0].is_begin());
        assert!(events[1].is_end());
    }

    #[test]
    fn test_staying_inside_fires_once() {
        let (owner, other) = ids();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0));

        region.observe(owner, other, None, true);
        region.observe(owner, other, None, true);
        region.observe(owner, other, None, true);

        assert_eq!(region.pending_events(), 1);
    }

    #[test]
    fn test_disabled_region_observes_nothing() {
        let (owner, other) = ids();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0));
        region.disable();

        region.observe(owner, other, None, true);
        assert!(!region.is_overlapping(other));
        assert_eq!(region.pending_events(), 0);
    }

    #[test]
    fn test_reenabled_region_observes_again() {
        let (owner, other) = ids();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0));

        region.disable();
        region.observe(owner, other, None, true);
        assert_eq!(region.pending_events(), 0);

        region.enable();
        region.observe(owner, other, None, true);
        assert_eq!(region.pending_events(), 1);
    }

    #[test]
    fn test_owner_filtered_out() {
        let (owner, _) = ids();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0));

        region.observe(owner, owner, None, true);
        assert_eq!(region.pending_events(), 0);
    }

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let (owner, other) = ids();
        let begins = Arc::new(AtomicU32::new(0));
        let ends = Arc::new(AtomicU32::new(0));

        let begins_clone = begins.clone();
        let ends_clone = ends.clone();
        let mut region = TriggerRegion::new(DetectionVolume::sphere(1.0))
            .on_begin(move |_| {
                begins_clone.fetch_add(1, Ordering::SeqCst);
            })
            .on_end(move |_| {
                ends_clone.fetch_add(1, Ordering::SeqCst);
            });

        region.observe(owner, other, None, true);
        region.observe(owner, other, None, false);
        region.dispatch_queued();

        assert_eq!(begins.load(Ordering::SeqCst), 1);
        assert_eq!(ends.load(Ordering::SeqCst), 1);
        assert_eq!(region.pending_events(), 0);
    }

    #[test]
    fn test_center_at_applies_offset() {
        let region =
            TriggerRegion::new(DetectionVolume::sphere(1.0)).with_offset([0.0, 2.0, 0.0]);

        assert_eq!(region.center_at([1.0, 1.0, 1.0]), [1.0, 3.0, 1.0]);
    }
}
