//! The stage: actor registry and sweep driver

use crate::config::{ConfigError, LightSwitchConfig};
use crate::error::{Result, StageError};
use crate::switch::LightSwitch;
use sconce_core::{ActorId, ComponentId, IdAllocator};
use sconce_triggers::{sweep_region, SweepBody};
use std::collections::HashMap;

struct StagedSwitch {
    switch: LightSwitch,
    /// Position of the light element, the switch's root spatial anchor
    position: [f32; 3],
}

struct RoamingBody {
    component: Option<ComponentId>,
    position: [f32; 3],
}

/// Owns the actors and steps the world
///
/// Each `step` sweeps every switch's detection volume against every
/// roaming body and delivers the resulting events synchronously; every
/// handler runs to completion before `step` returns.
pub struct Stage {
    ids: IdAllocator,
    switches: HashMap<ActorId, StagedSwitch>,
    bodies: HashMap<ActorId, RoamingBody>,
}

impl Stage {
    /// Create an empty stage
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            switches: HashMap::new(),
            bodies: HashMap::new(),
        }
    }

    /// Spawn a light switch at a position
    pub fn spawn_switch(
        &mut self,
        config: LightSwitchConfig,
        position: [f32; 3],
    ) -> std::result::Result<ActorId, ConfigError> {
        let id = self.ids.next_actor();
        let switch = LightSwitch::new(id, config)?;
        self.switches.insert(id, StagedSwitch { switch, position });
        log::debug!("spawned light switch {id} at {position:?}");
        Ok(id)
    }

    /// Spawn a roaming body with a collision component
    pub fn spawn_body(&mut self, position: [f32; 3]) -> ActorId {
        let id = self.ids.next_actor();
        let component = Some(self.ids.next_component());
        self.bodies.insert(id, RoamingBody { component, position });
        log::debug!("spawned body {id} at {position:?}");
        id
    }

    /// Spawn a roaming body without a collision component
    ///
    /// Its overlaps are reported with no component and a switch's handler
    /// guard ignores them.
    pub fn spawn_intangible(&mut self, position: [f32; 3]) -> ActorId {
        let id = self.ids.next_actor();
        self.bodies.insert(
            id,
            RoamingBody {
                component: None,
                position,
            },
        );
        log::debug!("spawned intangible body {id} at {position:?}");
        id
    }

    /// Move a roaming body
    pub fn move_body(&mut self, id: ActorId, position: [f32; 3]) -> Result<()> {
        match self.bodies.get_mut(&id) {
            Some(body) => {
                body.position = position;
                Ok(())
            }
            None if self.switches.contains_key(&id) => Err(StageError::NotABody(id)),
            None => Err(StageError::ActorNotFound(id)),
        }
    }

    /// Remove a roaming body
    ///
    /// If it was inside a switch's volume, the next sweep still fires its
    /// exit event.
    pub fn remove_body(&mut self, id: ActorId) -> Result<()> {
        if self.bodies.remove(&id).is_none() {
            return Err(StageError::ActorNotFound(id));
        }
        log::debug!("removed body {id}");
        Ok(())
    }

    /// Remove a light switch, dropping its light element and volume
    pub fn remove_switch(&mut self, id: ActorId) -> Result<()> {
        if self.switches.remove(&id).is_none() {
            return Err(StageError::ActorNotFound(id));
        }
        log::debug!("removed light switch {id}");
        Ok(())
    }

    /// Sweep every switch against every body and deliver the events
    pub fn step(&mut self) {
        let bodies: Vec<SweepBody> = self
            .bodies
            .iter()
            .map(|(&id, body)| SweepBody {
                actor: id,
                component: body.component,
                position: body.position,
            })
            .collect();

        for staged in self.switches.values_mut() {
            let owner = staged.switch.id();
            let anchor = staged.position;
            sweep_region(staged.switch.region_mut(), owner, anchor, &bodies);
            staged.switch.region_mut().dispatch_queued();
        }
    }

    /// Look up a switch
    pub fn switch(&self, id: ActorId) -> Option<&LightSwitch> {
        self.switches.get(&id).map(|staged| &staged.switch)
    }

    /// Check whether a switch's light is visible
    pub fn is_lit(&self, id: ActorId) -> Result<bool> {
        match self.switches.get(&id) {
            Some(staged) => Ok(staged.switch.is_lit()),
            None if self.bodies.contains_key(&id) => Err(StageError::NotASwitch(id)),
            None => Err(StageError::ActorNotFound(id)),
        }
    }

    /// Number of switches on stage
    pub fn switch_count(&self) -> usize {
        self.switches.len()
    }

    /// Number of roaming bodies on stage
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
