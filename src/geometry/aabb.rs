use std::mem;

use crate::error::Error;

use super::{BoundingVolume, EPSILON, FloatType, MISS, Ray, WorldPoint};

/// Axis-aligned box given by its minimum and maximum corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisAlignedBoundingBox {
    min: WorldPoint,
    max: WorldPoint,
}

impl AxisAlignedBoundingBox {
    /// Creates a box from two corners.
    ///
    /// Each of the three spatial axes must satisfy `min <= max`; a degenerate
    /// (planar or point) box is accepted.
    pub fn new(min: WorldPoint, max: WorldPoint) -> Result<AxisAlignedBoundingBox, Error> {
        for axis in 0..3 {
            if min[axis] > max[axis] {
                return Err(Error::InvalidArgument(format!(
                    "bounding box minimum exceeds maximum on axis {axis}"
                )));
            }
        }
        Ok(AxisAlignedBoundingBox { min, max })
    }

    pub fn min(&self) -> WorldPoint {
        self.min
    }

    pub fn max(&self) -> WorldPoint {
        self.max
    }
}

impl BoundingVolume for AxisAlignedBoundingBox {
    /// Slab-method intersection.
    ///
    /// Narrows the parametric interval `[t_min, t_max]` axis by axis. A ray
    /// parallel to an axis's slab faces must already lie between them on that
    /// axis or it cannot hit at all. The entry distance is returned when it is
    /// ahead of the origin; otherwise the origin is inside or past the box and
    /// the exit distance is returned instead.
    fn intersect(&self, ray: &Ray) -> FloatType {
        let mut t_min = FloatType::NEG_INFINITY;
        let mut t_max = FloatType::INFINITY;
        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            if d.abs() > EPSILON {
                let mut t1 = (self.min[axis] - o) / d;
                let mut t2 = (self.max[axis] - o) / d;
                if t1 > t2 {
                    mem::swap(&mut t1, &mut t2);
                }
                t_min = t_min.max(t1);
                t_max = t_max.min(t2);
                if t_min > t_max {
                    return MISS;
                }
            } else if o < self.min[axis] || o > self.max[axis] {
                return MISS;
            }
        }
        if t_min > 0.0 { t_min } else { t_max }
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;
    use crate::geometry::{point, vector};

    const TOLERANCE: FloatType = 1e-6;

    fn the_box() -> AxisAlignedBoundingBox {
        AxisAlignedBoundingBox::new(point(4.0, 6.0, -1.5), point(7.0, 9.0, 1.5)).unwrap()
    }

    #[test_case(0 ; "x")]
    #[test_case(1 ; "y")]
    #[test_case(2 ; "z")]
    fn construction_rejects_swapped_corners(axis: usize) {
        let mut min = point(0.0, 0.0, 0.0);
        let mut max = point(0.0, 0.0, 0.0);
        min[axis] = 1.0;
        max[axis] = -1.0;
        let result = AxisAlignedBoundingBox::new(min, max);
        assert!(let Err(Error::InvalidArgument(_)) = result);
    }

    #[test]
    fn construction_accepts_equal_corners() {
        let corner = point(2.0, -3.0, 4.0);
        assert!(AxisAlignedBoundingBox::new(corner, corner).is_ok());
    }

    #[test]
    fn hit_with_increasing_direction() {
        let ray = Ray::new(point(3.0, 2.0, 0.0), vector(1.0, 2.0, 0.0));
        assert!((the_box().intersect(&ray) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn hit_with_decreasing_direction() {
        let ray = Ray::new(point(10.0, 12.0, 0.0), vector(-1.0, -2.0, 0.0));
        assert!((the_box().intersect(&ray) - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn hit_against_planar_box() {
        let aabb = AxisAlignedBoundingBox::new(point(4.0, 6.0, 0.0), point(7.0, 9.0, 0.0)).unwrap();
        let ray = Ray::new(point(3.0, 2.0, 0.0), vector(1.0, 2.0, 0.0));
        assert!((aabb.intersect(&ray) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn miss_reports_the_sentinel() {
        let ray = Ray::new(point(3.0, 2.0, 0.0), vector(2.0, 1.0, 0.0));
        assert!(the_box().intersect(&ray) == MISS);
    }

    #[test]
    fn origin_inside_reports_the_exit_distance() {
        let ray = Ray::new(point(5.5, 7.5, 0.0), vector(2.0, 1.0, 0.0));
        assert!((the_box().intersect(&ray) - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn origin_on_a_face_reports_the_exit_distance() {
        let ray = Ray::new(point(4.0, 7.5, 0.0), vector(1.0, 0.0, 0.0));
        assert!((the_box().intersect(&ray) - 3.0).abs() < TOLERANCE);
    }

    /// Rays parallel to one axis and outside that axis's slab must miss no
    /// matter what the other two axes do.
    #[test_case( 3.0,  7.5,  0.0,   0.0, 1.0, 0.0 ; "low x")]
    #[test_case( 8.0,  7.5,  0.0,   0.0, 1.0, 0.0 ; "high x")]
    #[test_case( 5.5,  5.0,  0.0,   1.0, 0.0, 0.0 ; "low y")]
    #[test_case( 5.5, 10.0,  0.0,   1.0, 0.0, 0.0 ; "high y")]
    #[test_case( 5.5,  7.5, -2.0,   1.0, 1.0, 0.0 ; "low z")]
    #[test_case( 5.5,  7.5,  2.0,   1.0, 1.0, 0.0 ; "high z")]
    fn parallel_outside_the_slab_misses(
        px: FloatType,
        py: FloatType,
        pz: FloatType,
        dx: FloatType,
        dy: FloatType,
        dz: FloatType,
    ) {
        let ray = Ray::new(point(px, py, pz), vector(dx, dy, dz));
        assert!(the_box().intersect(&ray) == MISS);
    }

    #[test]
    fn parallel_inside_the_slab_can_hit() {
        let ray = Ray::new(point(5.5, 7.5, -10.0), vector(0.0, 0.0, 1.0));
        assert!((the_box().intersect(&ray) - 8.5).abs() < TOLERANCE);
    }

    #[test]
    fn box_behind_the_origin_reports_a_negative_distance() {
        let ray = Ray::new(point(20.0, 7.5, 0.0), vector(1.0, 0.0, 0.0));
        assert!(the_box().intersect(&ray) < 0.0);
    }

    fn coord() -> impl Strategy<Value = FloatType> {
        (-10_000i32..10_000).prop_map(|n| FloatType::from(n) / 100.0)
    }

    fn extent() -> impl Strategy<Value = FloatType> {
        (0i32..10_000).prop_map(|n| FloatType::from(n) / 100.0)
    }

    fn arbitrary_box() -> impl Strategy<Value = AxisAlignedBoundingBox> {
        ((coord(), coord(), coord()), (extent(), extent(), extent())).prop_map(|(c, e)| {
            let min = point(c.0, c.1, c.2);
            let max = point(c.0 + e.0, c.1 + e.1, c.2 + e.2);
            AxisAlignedBoundingBox::new(min, max).unwrap()
        })
    }

    fn arbitrary_ray() -> impl Strategy<Value = Ray> {
        ((coord(), coord(), coord()), (coord(), coord(), coord()))
            .prop_filter("direction is zero", |(_, d)| {
                d.0 != 0.0 || d.1 != 0.0 || d.2 != 0.0
            })
            .prop_map(|(o, d)| Ray::new(point(o.0, o.1, o.2), vector(d.0, d.1, d.2)))
    }

    fn on_surface(p: &WorldPoint, aabb: &AxisAlignedBoundingBox) -> bool {
        const SLACK: FloatType = 1e-6;
        let inside = (0..3).all(|i| p[i] >= aabb.min()[i] - SLACK && p[i] <= aabb.max()[i] + SLACK);
        let on_face = (0..3).any(|i| {
            (p[i] - aabb.min()[i]).abs() <= SLACK || (p[i] - aabb.max()[i]).abs() <= SLACK
        });
        inside && on_face
    }

    proptest! {
        /// Any reported distance parameterizes a point on the box boundary.
        #[test]
        fn reported_distances_lie_on_the_boundary(
            aabb in arbitrary_box(),
            ray in arbitrary_ray(),
        ) {
            let t = aabb.intersect(&ray);
            if t != MISS {
                let p = ray.point_at(t);
                prop_assert!(on_surface(&p, &aabb), "{p:?} not on {aabb:?}");
            }
        }

        /// A ray starting strictly inside always exits through the boundary ahead.
        #[test]
        fn origin_inside_yields_a_positive_distance(
            corner in (coord(), coord(), coord()),
            size in ((1i32..10_000), (1i32..10_000), (1i32..10_000)),
            frac in ((1i32..100), (1i32..100), (1i32..100)),
            dir in (coord(), coord(), coord()),
        ) {
            prop_assume!(dir.0 != 0.0 || dir.1 != 0.0 || dir.2 != 0.0);
            let size = (
                FloatType::from(size.0) / 100.0,
                FloatType::from(size.1) / 100.0,
                FloatType::from(size.2) / 100.0,
            );
            let min = point(corner.0, corner.1, corner.2);
            let max = point(corner.0 + size.0, corner.1 + size.1, corner.2 + size.2);
            let origin = point(
                corner.0 + size.0 * FloatType::from(frac.0) / 100.0,
                corner.1 + size.1 * FloatType::from(frac.1) / 100.0,
                corner.2 + size.2 * FloatType::from(frac.2) / 100.0,
            );
            let aabb = AxisAlignedBoundingBox::new(min, max).unwrap();
            let ray = Ray::new(origin, vector(dir.0, dir.1, dir.2));
            prop_assert!(aabb.intersect(&ray) > 0.0);
        }
    }
}
