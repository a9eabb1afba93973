//! The light switch actor

use crate::config::{ConfigError, LightSwitchConfig};
use parking_lot::Mutex;
use sconce_core::ActorId;
use sconce_lighting::PointLight;
use sconce_triggers::{DetectionVolume, OverlapEvent, TriggerRegion};
use std::sync::Arc;

/// An actor that toggles its point light when overlapped
///
/// Owns a light element and a detection volume. The light element is the
/// root spatial anchor; the volume is attached to it at zero offset. Both
/// overlap subscription points are wired to the same toggle handler at
/// construction, so an exit flips the light exactly like an entry.
pub struct LightSwitch {
    id: ActorId,
    config: LightSwitchConfig,
    // Shared only with the two callbacks registered below; never escapes.
    light: Arc<Mutex<PointLight>>,
    region: TriggerRegion,
}

impl LightSwitch {
    /// Create a switch: light visible at the desired intensity, detection
    /// sphere of the configured radius, toggle handler on both points
    pub fn new(id: ActorId, config: LightSwitchConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let light = Arc::new(Mutex::new(PointLight::new(config.desired_intensity)));

        let begin_light = Arc::clone(&light);
        let end_light = Arc::clone(&light);
        let region = TriggerRegion::new(DetectionVolume::sphere(config.detection_radius))
            .on_begin(move |event| apply_overlap(&begin_light, id, event))
            .on_end(move |event| apply_overlap(&end_light, id, event));

        Ok(Self {
            id,
            config,
            light,
            region,
        })
    }

    /// This switch's actor id
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// The configuration the switch was built from
    pub fn config(&self) -> &LightSwitchConfig {
        &self.config
    }

    /// Begin-overlap handler: qualifying events toggle the light
    ///
    /// Qualifying means the other actor is present, is not this switch,
    /// and carries a collision component. Anything else is ignored.
    pub fn on_overlap_begin(&self, event: &OverlapEvent) {
        apply_overlap(&self.light, self.id, event);
    }

    /// End-overlap handler: same guard, same action as begin
    pub fn on_overlap_end(&self, event: &OverlapEvent) {
        apply_overlap(&self.light, self.id, event);
    }

    /// Flip the light's visibility
    pub fn toggle_light(&self) {
        self.light.lock().toggle_visibility();
    }

    /// Check whether the light is currently visible
    pub fn is_lit(&self) -> bool {
        self.light.lock().is_visible()
    }

    /// Current light intensity
    pub fn intensity(&self) -> f32 {
        self.light.lock().intensity
    }

    /// Snapshot of the light element
    pub fn light(&self) -> PointLight {
        self.light.lock().clone()
    }

    /// The detection volume region
    pub fn region(&self) -> &TriggerRegion {
        &self.region
    }

    /// Mutable access for whoever drives the sweeps
    pub fn region_mut(&mut self) -> &mut TriggerRegion {
        &mut self.region
    }
}

impl core::fmt::Debug for LightSwitch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightSwitch")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("lit", &self.is_lit())
            .field("region", &self.region)
            .finish()
    }
}

/// The toggle action shared by both handlers
fn apply_overlap(light: &Mutex<PointLight>, switch_id: ActorId, event: &OverlapEvent) {
    let other = match event.other_actor {
        Some(other) if other != switch_id => other,
        _ => return,
    };
    if event.other_component.is_none() {
        return;
    }

    let mut light = light.lock();
    light.toggle_visibility();
    log::debug!(
        "{switch_id}: {:?} overlap from {other} toggled light -> {}",
        event.kind,
        light.is_visible()
    );
}
