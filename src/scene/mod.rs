mod mesh;
pub mod primitives;

use std::{fmt::Debug, sync::Arc};

use thiserror::Error;

use crate::{
    camera::CameraRef,
    geometry::{Ray, WorldVector},
    light::LightRef,
    shader::ShaderRef,
    util::Rgb,
};

pub use mesh::{ObjOpenError, load_obj, parse_obj};

/// Renderable object
pub trait Primitive: Debug + Send + Sync {
    /// Tests the ray against this primitive.
    /// Must only overwrite `ray.t` when the new hit is closer than the current one,
    /// returns true exactly when it did.
    fn intersect(&self, ray: &mut Ray) -> bool;

    /// Unit surface normal at the ray's current hit point.
    fn get_normal(&self, ray: &Ray) -> WorldVector;

    fn get_shader(&self) -> ShaderRef;
}

pub type PrimitiveRef = Arc<dyn Primitive>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("Camera index {index} is out of range, the scene has {count} cameras")]
    CameraIndexOutOfRange { index: usize, count: usize },
}

/// Primitives, lights and cameras of a rendered image.
///
/// All entities are shared handles, the scene never owns them exclusively.
/// Everything is scanned linearly in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    background: Rgb,
    primitives: Vec<PrimitiveRef>,
    lights: Vec<LightRef>,
    cameras: Vec<CameraRef>,
    active_camera: usize,
}

impl Scene {
    pub fn new(background: Rgb) -> Self {
        Scene {
            background,
            ..Default::default()
        }
    }

    pub fn add_primitive(&mut self, primitive: PrimitiveRef) {
        log::trace!("Adding primitive {primitive:?}");
        self.primitives.push(primitive);
    }

    pub fn add_light(&mut self, light: LightRef) {
        log::debug!("Adding light {light:?}");
        self.lights.push(light);
    }

    /// Adds a camera. The active camera stays the same, the first camera added is active
    /// until `set_active_camera` is called.
    pub fn add_camera(&mut self, camera: CameraRef) {
        log::debug!("Adding camera #{}: {camera:?}", self.cameras.len());
        self.cameras.push(camera);
    }

    pub fn set_active_camera(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.cameras.len() {
            return Err(SceneError::CameraIndexOutOfRange {
                index,
                count: self.cameras.len(),
            });
        }
        self.active_camera = index;
        Ok(())
    }

    pub fn get_background(&self) -> Rgb {
        self.background
    }

    pub fn get_lights(&self) -> &[LightRef] {
        &self.lights
    }

    /// Returns the active camera, or None if no camera was added yet.
    pub fn get_active_camera(&self) -> Option<&CameraRef> {
        self.cameras.get(self.active_camera)
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Tests the ray against all primitives.
    /// Leaves the ray's `t` and `hit` at the closest intersection, returns true if anything was hit.
    pub fn intersect(&self, ray: &mut Ray) -> bool {
        let mut hit = false;
        for primitive in &self.primitives {
            if primitive.intersect(ray) {
                ray.hit = Some(Arc::clone(primitive));
                hit = true;
            }
        }
        hit
    }

    /// Checks whether there is an object between the ray's origin and the distance `ray.t`.
    pub fn occluded(&self, ray: &Ray) -> bool {
        let mut probe = Ray::new(ray.origin, ray.direction);
        self.intersect(&mut probe);
        ray.t > probe.t
    }

    /// Traces the ray and returns its shaded color, or the background if it doesn't hit anything.
    pub fn ray_trace(&self, ray: &mut Ray) -> Rgb {
        if !self.intersect(ray) {
            return self.background;
        }
        match &ray.hit {
            Some(primitive) => primitive.get_shader().shade(self, ray),
            None => self.background,
        }
    }
}
