//! Overlap events and subscription points

use sconce_core::{ActorId, ComponentId};

/// Which edge of an overlap this event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapKind {
    /// Another actor entered the detection volume
    Begin,
    /// Another actor exited the detection volume
    End,
}

/// Hit payload from a sweep test
///
/// Carried on the event but consumed by nothing in this workspace; the
/// switch only looks at actor/component identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Hit point in world space
    pub point: [f32; 3],
    /// Surface normal at the hit point
    pub normal: [f32; 3],
    /// Distance along the sweep
    pub distance: f32,
}

/// A begin- or end-overlap notification
///
/// `other_actor` and `other_component` are optional: an event can arrive
/// without a resolvable actor or without a collision component, and
/// handlers are expected to guard on both.
#[derive(Debug, Clone)]
pub struct OverlapEvent {
    /// Begin or end
    pub kind: OverlapKind,
    /// The actor that owns the detection volume
    pub owner: ActorId,
    /// The actor that triggered the event, if resolvable
    pub other_actor: Option<ActorId>,
    /// The triggering actor's collision component, if it has one
    pub other_component: Option<ComponentId>,
    /// Whether this event came from a sweep test
    pub from_sweep: bool,
    /// Hit payload for sweep events
    pub hit: Option<SweepHit>,
}

impl OverlapEvent {
    /// Create a begin-overlap event
    pub fn begin(owner: ActorId, other: Option<ActorId>, component: Option<ComponentId>) -> Self {
        Self {
            kind: OverlapKind::Begin,
            owner,
            other_actor: other,
            other_component: component,
            from_sweep: false,
            hit: None,
        }
    }

    /// Create an end-overlap event
    pub fn end(owner: ActorId, other: Option<ActorId>, component: Option<ComponentId>) -> Self {
        Self {
            kind: OverlapKind::End,
            owner,
            other_actor: other,
            other_component: component,
            from_sweep: false,
            hit: None,
        }
    }

    /// Attach a sweep hit payload
    pub fn with_hit(mut self, hit: SweepHit) -> Self {
        self.from_sweep = true;
        self.hit = Some(hit);
        self
    }

    /// Check if this is a begin event
    pub fn is_begin(&self) -> bool {
        self.kind == OverlapKind::Begin
    }

    /// Check if this is an end event
    pub fn is_end(&self) -> bool {
        self.kind == OverlapKind::End
    }
}

/// Callback type for overlap events
pub type OverlapCallback = Box<dyn Fn(&OverlapEvent) + Send + Sync>;

/// The two named event-subscription points of a detection volume
///
/// Callbacks registered on a point run in registration order when an
/// event of the matching kind is dispatched.
#[derive(Default)]
pub struct OverlapSubscriptions {
    on_begin: Vec<OverlapCallback>,
    on_end: Vec<OverlapCallback>,
}

impl OverlapSubscriptions {
    /// Create empty subscription points
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback on the begin-overlap point
    pub fn subscribe_begin<F>(&mut self, callback: F)
    where
        F: Fn(&OverlapEvent) + Send + Sync + 'static,
    {
        self.on_begin.push(Box::new(callback));
    }

    /// Register a callback on the end-overlap point
    pub fn subscribe_end<F>(&mut self, callback: F)
    where
        F: Fn(&OverlapEvent) + Send + Sync + 'static,
    {
        self.on_end.push(Box::new(callback));
    }

    /// Route an event to the matching point's callbacks
    pub fn dispatch(&self, event: &OverlapEvent) {
        let callbacks = match event.kind {
            OverlapKind::Begin => &self.on_begin,
            OverlapKind::End => &self.on_end,
        };
        for callback in callbacks {
            callback(event);
        }
    }

    /// Number of registered callbacks across both points
    pub fn len(&self) -> usize {
        self.on_begin.len() + self.on_end.len()
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.on_begin.is_empty() && self.on_end.is_empty()
    }
}

impl core::fmt::Debug for OverlapSubscriptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverlapSubscriptions")
            .field("on_begin", &self.on_begin.len())
            .field("on_end", &self.on_end.len())
            .finish()
    }
}
