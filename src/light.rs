use std::{fmt::Debug, sync::Arc};

use crate::{
    geometry::{EPSILON, Ray, WorldPoint},
    util::Rgb,
};

/// Light arriving at a point from a single light source.
#[derive(Clone, Debug)]
pub struct Illumination {
    /// Ray from the illuminated point towards the light, with unit direction and
    /// `t` set to the distance of the light. Suitable for `Scene::occluded`.
    pub shadow_ray: Ray,
    /// Light intensity at the point, before any occlusion.
    pub intensity: Rgb,
}

pub trait Light: Debug + Send + Sync {
    /// Computes light falling on `point`, or None if the light doesn't reach it.
    fn illuminate(&self, point: &WorldPoint) -> Option<Illumination>;
}

pub type LightRef = Arc<dyn Light>;

/// Isotropic point light with inverse square falloff
#[derive(Clone, Debug)]
pub struct PointLight {
    pub position: WorldPoint,
    pub intensity: Rgb,
}

impl PointLight {
    pub fn new(position: WorldPoint, intensity: Rgb) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}

impl Light for PointLight {
    fn illuminate(&self, point: &WorldPoint) -> Option<Illumination> {
        let to_light = self.position - point;
        let distance = to_light.norm();
        if distance < EPSILON {
            return None;
        }

        Some(Illumination {
            shadow_ray: Ray::with_distance(*point, to_light / distance, distance),
            intensity: self.intensity * (1.0 / (distance * distance)),
        })
    }
}
