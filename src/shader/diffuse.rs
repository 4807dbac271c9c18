use crate::{
    geometry::{FloatType, Ray},
    scene::Scene,
    util::{Rgb, component_mul},
};

use super::{FlatShader, Shader};

/// Lambertian surface lit directly by the scene lights, with hard shadows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffuseShader {
    base: FlatShader,
    /// Fraction of the base color visible without any light
    ambient: FloatType,
    /// Fraction of the light reflected diffusely
    diffuse: FloatType,
}

impl DiffuseShader {
    pub fn new(color: Rgb, ambient: FloatType, diffuse: FloatType) -> Self {
        DiffuseShader {
            base: FlatShader::new(color),
            ambient,
            diffuse,
        }
    }
}

impl Shader for DiffuseShader {
    fn shade(&self, scene: &Scene, ray: &Ray) -> Rgb {
        let Some(hit) = &ray.hit else {
            return Rgb::default();
        };
        let color = self.base.color();

        // Shade the side facing the viewer
        let mut normal = hit.get_normal(ray);
        if normal.dot(&ray.direction) > 0.0 {
            normal = -normal;
        }

        let point = ray.hit_point();
        let mut result = color * self.ambient;
        for light in scene.get_lights() {
            let Some(illumination) = light.illuminate(&point) else {
                continue;
            };
            let cos_theta = normal.dot(&illumination.shadow_ray.direction);
            if cos_theta <= 0.0 || scene.occluded(&illumination.shadow_ray) {
                continue;
            }
            result = result + component_mul(color, illumination.intensity) * (self.diffuse * cos_theta);
        }

        result
    }
}
