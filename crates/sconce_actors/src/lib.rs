//! # sconce_actors - The Light Switch
//!
//! The actor this workspace exists for: a point light and a detection
//! volume composed on one actor, with both overlap subscription points
//! wired to the same visibility toggle. A [`Stage`] owns actors and
//! drives the overlap sweeps that feed the switch.
//!
//! # Example
//!
//! ```
//! use sconce_actors::prelude::*;
//!
//! let mut stage = Stage::new();
//! let switch = stage
//!     .spawn_switch(LightSwitchConfig::default(), [0.0, 0.0, 0.0])
//!     .unwrap();
//! let visitor = stage.spawn_body([600.0, 0.0, 0.0]);
//!
//! stage.move_body(visitor, [100.0, 0.0, 0.0]).unwrap();
//! stage.step();
//! assert!(!stage.is_lit(switch).unwrap()); // entering toggled it off
//! ```

pub mod config;
pub mod error;
pub mod stage;
pub mod switch;

pub mod prelude {
    pub use crate::config::{ConfigError, LightSwitchConfig};
    pub use crate::error::StageError;
    pub use crate::stage::Stage;
    pub use crate::switch::LightSwitch;
}

pub use prelude::*;
