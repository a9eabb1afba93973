//! Detection volume shapes

use serde::{Deserialize, Serialize};

/// Shape of a detection volume
///
/// Containment tests are in the volume's local space; `contains_point_at`
/// places the volume at a world-space center first. Volumes do not rotate
/// or scale; nothing on a stage does either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetectionVolume {
    /// Sphere centered on the anchor
    Sphere {
        /// Radius in world units
        radius: f32,
    },
    /// Axis-aligned box centered on the anchor
    Box {
        /// Half-extents (width/2, height/2, depth/2)
        half_extents: [f32; 3],
    },
}

impl DetectionVolume {
    /// Create a sphere detection volume
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Create a box detection volume
    pub fn box_shape(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            half_extents: [width / 2.0, height / 2.0, depth / 2.0],
        }
    }

    /// Check if a point is inside this volume (volume at origin)
    pub fn contains_point(&self, point: [f32; 3]) -> bool {
        match self {
            Self::Sphere { radius } => {
                let dist_sq = point[0] * point[0] + point[1] * point[1] + point[2] * point[2];
                dist_sq <= radius * radius
            }
            Self::Box { half_extents } => {
                point[0].abs() <= half_extents[0]
                    && point[1].abs() <= half_extents[1]
                    && point[2].abs() <= half_extents[2]
            }
        }
    }

    /// Check if a point is inside this volume placed at `center`
    pub fn contains_point_at(&self, point: [f32; 3], center: [f32; 3]) -> bool {
        self.contains_point([
            point[0] - center[0],
            point[1] - center[1],
            point[2] - center[2],
        ])
    }
}

impl Default for DetectionVolume {
    fn default() -> Self {
        Self::sphere(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains() {
        let volume = DetectionVolume::sphere(1.0);

        assert!(volume.contains_point([0.0, 0.0, 0.0]));
        assert!(volume.contains_point([0.5, 0.5, 0.5]));
        assert!(!volume.contains_point([1.0, 1.0, 0.0]));
    }

    #[test]
    fn test_sphere_boundary_is_inside() {
        let volume = DetectionVolume::sphere(2.0);
        assert!(volume.contains_point([2.0, 0.0, 0.0]));
    }

    #[test]
    fn test_box_contains() {
        let volume = DetectionVolume::box_shape(2.0, 2.0, 2.0);

        assert!(volume.contains_point([0.0, 0.0, 0.0]));
        assert!(volume.contains_point([0.9, 0.9, 0.9]));
        assert!(!volume.contains_point([1.5, 0.0, 0.0]));
    }

    #[test]
    fn test_contains_point_at() {
        let volume = DetectionVolume::sphere(1.0);

        assert!(volume.contains_point_at([10.0, 0.0, 0.0], [10.0, 0.0, 0.0]));
        assert!(!volume.contains_point_at([10.0, 0.0, 0.0], [0.0, 0.0, 0.0]));
    }
}
