//! Overlap sweep: turning positions into begin/end events

use crate::region::TriggerRegion;
use sconce_core::{ActorId, ComponentId};
use std::collections::HashSet;

/// A body tested against a region during a sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepBody {
    /// The body's actor
    pub actor: ActorId,
    /// The body's collision component, if it has one
    pub component: Option<ComponentId>,
    /// World position
    pub position: [f32; 3],
}

impl SweepBody {
    /// Create a body without a collision component
    pub fn new(actor: ActorId, position: [f32; 3]) -> Self {
        Self {
            actor,
            component: None,
            position,
        }
    }

    /// Attach a collision component
    pub fn with_component(mut self, component: ComponentId) -> Self {
        self.component = Some(component);
        self
    }
}

/// Sweep every body against a region placed at `anchor + offset`
///
/// Bodies overlapping last sweep but absent from `bodies` are observed as
/// outside, so their exit events still fire; those events carry no
/// component, matching an engine delivering end-overlap for a destroyed
/// actor. Returns the number of events queued by this sweep.
pub fn sweep_region(
    region: &mut TriggerRegion,
    owner: ActorId,
    anchor: [f32; 3],
    bodies: &[SweepBody],
) -> usize {
    let before = region.pending_events();
    let center = region.center_at(anchor);

    let mut seen: HashSet<ActorId> = HashSet::with_capacity(bodies.len());
    for body in bodies {
        seen.insert(body.actor);
        let inside = region.volume.contains_point_at(body.position, center);
        region.observe(owner, body.actor, body.component, inside);
    }

    let vanished: Vec<ActorId> = region
        .overlapping()
        .filter(|actor| !seen.contains(actor))
        .collect();
    for actor in vanished {
        region.observe(owner, actor, None, false);
    }

    let queued = region.pending_events() - before;
    if queued > 0 {
        log::trace!("sweep for {owner} queued {queued} overlap event(s)");
    }
    queued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::DetectionVolume;

    fn switch_region() -> TriggerRegion {
        TriggerRegion::new(DetectionVolume::sphere(250.0))
    }

    #[test]
    fn test_walk_through() {
        let owner = ActorId::from_raw(1);
        let visitor = ActorId::from_raw(2);
        let collider = ComponentId::from_raw(3);
        let mut region = switch_region();

        // Far away: nothing
        let far = [SweepBody::new(visitor, [1000.0, 0.0, 0.0]).with_component(collider)];
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &far), 0);

        // Inside: begin
        let near = [SweepBody::new(visitor, [100.0, 0.0, 0.0]).with_component(collider)];
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &near), 1);
        assert!(region.is_overlapping(visitor));

        // Still inside: no new event
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &near), 0);

        // Out again: end
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &far), 1);
        assert!(!region.is_overlapping(visitor));

        let events = region.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events[0].is_begin());
        assert_eq!(events[0].other_component, Some(collider));
        assert!(events[1].is_end());
    }

    #[test]
    fn test_vanished_body_exits() {
        let owner = ActorId::from_raw(1);
        let visitor = ActorId::from_raw(2);
        let mut region = switch_region();

        let inside = [SweepBody::new(visitor, [0.0; 3]).with_component(ComponentId::from_raw(3))];
        sweep_region(&mut region, owner, [0.0; 3], &inside);
        assert!(region.is_overlapping(visitor));

        // Body disappears entirely from the next sweep
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &[]), 1);
        assert!(!region.is_overlapping(visitor));

        let events = region.drain_events();
        let exit = events.last().unwrap();
        assert!(exit.is_end());
        assert_eq!(exit.other_component, None);
    }

    #[test]
    fn test_anchor_moves_with_switch() {
        let owner = ActorId::from_raw(1);
        let visitor = ActorId::from_raw(2);
        let mut region = switch_region();

        let body = [SweepBody::new(visitor, [500.0, 0.0, 0.0]).with_component(ComponentId::from_raw(3))];

        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &body), 0);
        assert_eq!(sweep_region(&mut region, owner, [400.0, 0.0, 0.0], &body), 1);
    }

    #[test]
    fn test_bodies_without_collider_still_reported() {
        let owner = ActorId::from_raw(1);
        let ghost = ActorId::from_raw(2);
        let mut region = switch_region();

        let body = [SweepBody::new(ghost, [0.0; 3])];
        assert_eq!(sweep_region(&mut region, owner, [0.0; 3], &body), 1);

        let events = region.drain_events();
        assert_eq!(events[0].other_actor, Some(ghost));
        assert_eq!(events[0].other_component, None);
    }
}
