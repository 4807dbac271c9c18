mod ray_triangle_intersection;
mod triangle;

use nalgebra::{Point2, Point3, Unit, Vector2, Vector3};

use crate::scene::PrimitiveRef;

pub use triangle::Triangle;

pub type FloatType = f32;

/// Smallest distance along a ray at which a hit is accepted.
/// Also the shortest vector length that still counts as having a direction.
pub const EPSILON: FloatType = 1e-4;

pub type ScreenPoint = Point2<u32>;
pub type ScreenSize = Vector2<u32>;
/// Continuous position on the camera film, in pixel units.
pub type FilmPoint = Point2<FloatType>;

pub type WorldPoint = Point3<FloatType>;
pub type WorldVector = Vector3<FloatType>;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Direction of the ray, not normalized.
    /// Distances along the ray are measured in multiples of its length.
    pub direction: WorldVector,

    /// Distance to the closest hit found so far, `Ray::NO_HIT` if there is none.
    pub t: FloatType,
    /// Primitive hit at distance `t`.
    pub hit: Option<PrimitiveRef>,
}

impl Ray {
    /// Distance of a ray that didn't hit anything.
    /// Larger than any distance a primitive can report.
    pub const NO_HIT: FloatType = FloatType::INFINITY;

    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Self::with_distance(origin, direction, Self::NO_HIT)
    }

    /// Creates a ray that only accepts hits closer than `t`.
    pub fn with_distance(origin: WorldPoint, direction: WorldVector, t: FloatType) -> Ray {
        Ray {
            origin,
            direction,
            t,
            hit: None,
        }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction * distance
    }

    /// Point at the current closest hit distance.
    pub fn hit_point(&self) -> WorldPoint {
        self.point_at(self.t)
    }

    /// Records `t` as the new closest hit if it lies in `[EPSILON, self.t)`.
    /// Returns whether the distance was accepted. NaN is never accepted.
    pub fn try_update(&mut self, t: FloatType) -> bool {
        if (EPSILON..self.t).contains(&t) {
            self.t = t;
            true
        } else {
            false
        }
    }
}

/// Cosine of the angle between two vectors.
/// Returns `None` if either of them is zero, or so short that its length underflows.
pub fn cos_angle(a: &WorldVector, b: &WorldVector) -> Option<FloatType> {
    let a = Unit::try_new(*a, FloatType::MIN_POSITIVE)?;
    let b = Unit::try_new(*b, FloatType::MIN_POSITIVE)?;
    Some(a.dot(b.as_ref()).clamp(-1.0, 1.0))
}

#[cfg(test)]
pub mod test {
    use super::*;
    use assert2::assert;
    use proptest::prelude::*;
    use test_strategy::proptest;

    /// Helper macro that creates a wrapper arnound a type that implemetns Deref and Arbitary
    macro_rules! arbitrary_wrapper {
        ( $wrapper_name:ident ( $type:ty ) -> $block:block ) => {
            #[derive(Copy, Clone, Debug)]
            pub struct $wrapper_name(pub $type);

            impl std::ops::Deref for $wrapper_name {
                type Target = $type;
                fn deref(&self) -> &$type {
                    &self.0
                }
            }

            impl Arbitrary for $wrapper_name {
                type Parameters = ();
                type Strategy = proptest::strategy::BoxedStrategy<Self>;
                fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
                    $block.prop_map(|x| $wrapper_name(x)).boxed()
                }
            }
        };
    }

    fn simple_float() -> BoxedStrategy<f32> {
        (-1_000_000i32..1_000_000i32)
            .prop_map(|n| n as f32 * 1e-3)
            .boxed()
    }

    arbitrary_wrapper! {
        NonzeroWorldVectorWrapper(WorldVector) -> {
            (simple_float(), simple_float(), simple_float())
                .prop_filter_map(
                    "vector is zero",
                    |coords| {
                        let vector = WorldVector::new(coords.0, coords.1, coords.2);
                        if vector.norm() < 10.0 * EPSILON {
                            None
                        } else {
                            Some(vector)
                        }
                    })

        }
    }

    arbitrary_wrapper! {
        WorldPointWrapper(WorldPoint) -> {
            (simple_float(), simple_float(), simple_float())
                .prop_map(|coords| {
                    WorldPoint::new(coords.0, coords.1, coords.2)
                })
        }
    }

    #[test]
    fn new_ray_has_no_hit() {
        let ray = Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, 1.0));
        assert!(ray.t == Ray::NO_HIT);
        assert!(ray.hit.is_none());
    }

    #[test]
    fn point_at_scales_unnormalized_direction() {
        let ray = Ray::new(WorldPoint::new(1.0, 2.0, 3.0), WorldVector::new(0.0, 2.0, 0.0));
        assert!(ray.point_at(1.5) == WorldPoint::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn try_update_accepts_only_closer_hits() {
        let mut ray = Ray::new(WorldPoint::origin(), WorldVector::new(1.0, 0.0, 0.0));
        assert!(ray.try_update(7.0));
        assert!(ray.try_update(3.0));
        assert!(!ray.try_update(5.0));
        assert!(!ray.try_update(3.0));
        assert!(ray.t == 3.0);
    }

    #[test]
    fn try_update_rejects_hits_behind_origin_and_nan() {
        let mut ray = Ray::new(WorldPoint::origin(), WorldVector::new(1.0, 0.0, 0.0));
        assert!(!ray.try_update(-1.0));
        assert!(!ray.try_update(0.0));
        assert!(!ray.try_update(EPSILON / 2.0));
        assert!(!ray.try_update(FloatType::NAN));
        assert!(ray.t == Ray::NO_HIT);
    }

    #[test]
    fn cos_angle_degenerate() {
        let v = WorldVector::new(1.0, 0.0, 0.0);
        assert!(cos_angle(&WorldVector::zeros(), &v).is_none());
        assert!(cos_angle(&v, &WorldVector::zeros()).is_none());
        assert!(cos_angle(&WorldVector::new(1e-30, 0.0, 0.0), &v).is_none());
    }

    #[test]
    fn cos_angle_short_vectors() {
        let short = WorldVector::new(0.0, 1e-6, 1e-6);
        let cos = cos_angle(&short, &WorldVector::new(0.0, 0.0, 2.0)).unwrap();
        assert!((cos - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[proptest]
    fn cos_angle_is_bounded(a: NonzeroWorldVectorWrapper, b: NonzeroWorldVectorWrapper) {
        let cos = cos_angle(&a, &b).unwrap();
        assert!(cos >= -1.0);
        assert!(cos <= 1.0);
    }

    #[proptest]
    fn cos_angle_ignores_length(a: NonzeroWorldVectorWrapper, #[strategy(0.5f32..100.0)] scale: f32) {
        let cos = cos_angle(&a, &(*a * scale)).unwrap();
        assert!((cos - 1.0).abs() < 1e-4);
    }

    #[proptest]
    fn point_at_zero_is_origin(origin: WorldPointWrapper, direction: NonzeroWorldVectorWrapper) {
        let ray = Ray::new(*origin, *direction);
        assert!(ray.point_at(0.0) == *origin);
    }
}
