use crate::{geometry::Ray, scene::Scene, util::Rgb};

use super::Shader;

/// Constant color, no lighting
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlatShader {
    color: Rgb,
}

impl FlatShader {
    pub fn new(color: Rgb) -> Self {
        FlatShader { color }
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl Shader for FlatShader {
    fn shade(&self, _scene: &Scene, ray: &Ray) -> Rgb {
        if ray.hit.is_some() {
            self.color
        } else {
            Rgb::default()
        }
    }
}
