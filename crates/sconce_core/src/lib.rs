//! # sconce_core - Sconce Core
//!
//! Identity primitives shared by every Sconce crate. Actors and their
//! collision components are referred to by small copyable ids; the stage
//! hands them out through a thread-safe allocator.

pub mod id;

pub use id::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::id::{ActorId, ComponentId, IdAllocator};
}
