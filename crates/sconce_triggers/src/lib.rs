//! # sconce_triggers - Detection Volumes
//!
//! Overlap detection for game-world actors: a volume shape, the overlap
//! begin/end events it reports, and the bookkeeping that edge-detects
//! entries and exits from per-step containment tests.
//!
//! A [`TriggerRegion`] exposes two named subscription points, `on_begin`
//! and `on_end`; interested actors register plain callbacks on either (or
//! both) at construction.
//!
//! # Example
//!
//! ```
//! use sconce_triggers::prelude::*;
//! use sconce_core::ActorId;
//!
//! let owner = ActorId::from_raw(1);
//! let mut region = TriggerRegion::new(DetectionVolume::sphere(250.0))
//!     .on_begin(|event| println!("{} entered", event.other_actor.unwrap()));
//!
//! let visitor = ActorId::from_raw(2);
//! region.observe(owner, visitor, None, true);
//! region.dispatch_queued();
//! ```

pub mod events;
pub mod filter;
pub mod region;
pub mod sweep;
pub mod volume;

pub mod prelude {
    pub use crate::events::{OverlapEvent, OverlapKind, OverlapSubscriptions, SweepHit};
    pub use crate::filter::OverlapFilter;
    pub use crate::region::TriggerRegion;
    pub use crate::sweep::{sweep_region, SweepBody};
    pub use crate::volume::DetectionVolume;
}

pub use prelude::*;
