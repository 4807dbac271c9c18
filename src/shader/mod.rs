mod diffuse;
mod eyelight;
mod flat;

use std::{fmt::Debug, sync::Arc};

use crate::{geometry::Ray, scene::Scene, util::Rgb};

pub use diffuse::DiffuseShader;
pub use eyelight::EyelightShader;
pub use flat::FlatShader;

/// Computes the color of a ray hit.
pub trait Shader: Debug + Send + Sync {
    /// Color of the surface at the ray's closest hit.
    /// Expects `ray.hit` to be set, rays that didn't hit anything shade to black.
    fn shade(&self, scene: &Scene, ray: &Ray) -> Rgb;
}

pub type ShaderRef = Arc<dyn Shader>;
