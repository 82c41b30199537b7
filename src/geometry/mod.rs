mod aabb;

pub use aabb::AxisAlignedBoundingBox;

use nalgebra::Vector4;

pub type FloatType = f64;

/// Threshold below which a ray direction component counts as parallel to a slab.
pub const EPSILON: FloatType = 1e-6;

/// Distance reported by [`BoundingVolume::intersect`] when the ray does not hit.
pub const MISS: FloatType = -1.0;

/// Homogeneous point, `w = 1`.
pub type WorldPoint = Vector4<FloatType>;

/// Homogeneous direction, `w = 0`.
pub type WorldVector = Vector4<FloatType>;

pub fn point(x: FloatType, y: FloatType, z: FloatType) -> WorldPoint {
    WorldPoint::new(x, y, z, 1.0)
}

pub fn vector(x: FloatType, y: FloatType, z: FloatType) -> WorldVector {
    WorldVector::new(x, y, z, 0.0)
}

/// Parametric ray for visibility and picking queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    pub direction: WorldVector,
}

impl Ray {
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray { origin, direction }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction * distance
    }
}

impl Default for Ray {
    /// Degenerate ray sitting at the origin with no direction.
    fn default() -> Ray {
        Ray {
            origin: point(0.0, 0.0, 0.0),
            direction: vector(0.0, 0.0, 0.0),
        }
    }
}

/// Shape that can report where a ray first meets its surface.
pub trait BoundingVolume {
    /// Distance along `ray` to the nearest boundary crossing, or [`MISS`].
    ///
    /// Never fails; non-intersection is the sentinel value.
    fn intersect(&self, ray: &Ray) -> FloatType;
}
