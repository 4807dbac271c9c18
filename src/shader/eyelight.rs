use crate::{
    geometry::{Ray, cos_angle},
    scene::Scene,
    util::Rgb,
};

use super::{FlatShader, Shader};

/// Shades by the angle between the surface normal and the viewing ray, ignoring scene lights.
/// Both sides of a surface are lit the same. Mostly useful for inspecting geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyelightShader {
    base: FlatShader,
}

impl EyelightShader {
    pub fn new(color: Rgb) -> Self {
        EyelightShader {
            base: FlatShader::new(color),
        }
    }

    pub fn color(&self) -> Rgb {
        self.base.color()
    }
}

impl Default for EyelightShader {
    fn default() -> Self {
        Self::new(Rgb::new(0.5, 0.5, 0.5))
    }
}

impl Shader for EyelightShader {
    fn shade(&self, _scene: &Scene, ray: &Ray) -> Rgb {
        let Some(hit) = &ray.hit else {
            return Rgb::default();
        };
        let normal = hit.get_normal(ray);

        // Zero length normal or direction has no angle, shade it black.
        let cos_theta = cos_angle(&normal, &ray.direction).unwrap_or(0.0);
        self.color() * cos_theta.abs()
    }
}
