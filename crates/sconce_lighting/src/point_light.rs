//! Point light element

use serde::{Deserialize, Serialize};

/// Distance falloff curve for a point light
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Attenuation {
    /// Physically-based inverse square falloff
    InverseSquare,
    /// Linear falloff to zero at range
    Linear,
    /// Custom curve (constant, linear, quadratic coefficients)
    Custom {
        constant: f32,
        linear: f32,
        quadratic: f32,
    },
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::InverseSquare
    }
}

impl Attenuation {
    /// Get attenuation coefficients as [constant, linear, quadratic]
    pub fn coefficients(&self, range: f32) -> [f32; 3] {
        match self {
            Self::InverseSquare => [1.0, 0.0, 1.0],
            Self::Linear => [1.0, 1.0 / range.max(0.001), 0.0],
            Self::Custom {
                constant,
                linear,
                quadratic,
            } => [*constant, *linear, *quadratic],
        }
    }
}

/// Omni-directional point light
///
/// Pure state: a renderer is expected to consume it, none is provided.
/// Visibility is a plain binary flag; `toggle_visibility` flips it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointLight {
    /// Light color (linear RGB, not sRGB)
    pub color: [f32; 3],
    /// Intensity in lumens
    pub intensity: f32,
    /// Maximum range in world units
    pub range: f32,
    /// Attenuation curve
    pub attenuation: Attenuation,
    /// Whether the light is currently emitting
    visible: bool,
}

impl PointLight {
    /// Create a white point light with the given intensity, visible
    pub fn new(intensity: f32) -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity,
            range: 10.0,
            attenuation: Attenuation::InverseSquare,
            visible: true,
        }
    }

    /// Set color
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set range
    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }

    /// Set attenuation curve
    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Start hidden instead of visible
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Check whether the light is emitting
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the visibility flag directly
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip the visibility flag to its complement
    ///
    /// Always succeeds; there is no failure mode.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Get attenuation coefficients for this light
    pub fn attenuation_coefficients(&self) -> [f32; 3] {
        self.attenuation.coefficients(self.range)
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(1000.0)
    }
}
