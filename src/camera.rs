use std::{fmt::Debug, sync::Arc};

use bon::bon;
use nalgebra::Unit;
use thiserror::Error;

use crate::geometry::{EPSILON, FilmPoint, FloatType, Ray, ScreenPoint, ScreenSize, WorldPoint, WorldVector};

pub trait Camera: Debug + Send + Sync {
    fn get_resolution(&self) -> ScreenSize;

    /// Primary ray through a point on the film.
    /// Pixel (x, y) covers film coordinates [x, x + 1) × [y, y + 1), x goes right, y goes down.
    fn generate_ray(&self, film_point: &FilmPoint) -> Ray;
}

pub type CameraRef = Arc<dyn Camera>;

/// Film coordinates of the center of a pixel
pub fn pixel_center(point: &ScreenPoint) -> FilmPoint {
    FilmPoint::new(point.x as FloatType + 0.5, point.y as FloatType + 0.5)
}

#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("`{0}` vector must be non-zero")]
    ZeroVector(&'static str),
    #[error("`up` and `forward` must be linearly independent")]
    ParallelUp,
    #[error("Resolution must be non-zero, got {0}x{1}")]
    EmptyResolution(u32, u32),
    #[error("Vertical field of view must be between 0 and 180 degrees, got {0}")]
    FieldOfView(FloatType),
}

/// Pinhole camera
#[derive(Copy, Clone, Debug)]
pub struct PerspectiveCamera {
    center: WorldPoint,

    resolution: ScreenSize,

    forward: Unit<WorldVector>,
    up: Unit<WorldVector>,
    right: Unit<WorldVector>,

    /// Half of the film extent at unit distance from the center
    half_width: FloatType,
    half_height: FloatType,
}

#[bon]
impl PerspectiveCamera {
    #[builder]
    pub fn new(
        center: WorldPoint,
        forward: WorldVector,
        up: WorldVector,
        resolution: ScreenSize,
        vertical_fov: FloatType, // degrees
    ) -> Result<Self, CameraError> {
        let forward = Unit::try_new(forward, EPSILON).ok_or(CameraError::ZeroVector("forward"))?;
        let up = Unit::try_new(up, EPSILON).ok_or(CameraError::ZeroVector("up"))?;
        let right =
            Unit::try_new(forward.cross(up.as_ref()), EPSILON).ok_or(CameraError::ParallelUp)?;
        let up = Unit::new_normalize(right.cross(forward.as_ref()));

        if resolution.x == 0 || resolution.y == 0 {
            return Err(CameraError::EmptyResolution(resolution.x, resolution.y));
        }
        if !(vertical_fov > 0.0 && vertical_fov < 180.0) {
            return Err(CameraError::FieldOfView(vertical_fov));
        }

        let half_height = (vertical_fov.to_radians() / 2.0).tan();
        let half_width = half_height * resolution.x as FloatType / resolution.y as FloatType;

        Ok(PerspectiveCamera {
            center,
            resolution,
            forward,
            up,
            right,
            half_width,
            half_height,
        })
    }
}

impl Camera for PerspectiveCamera {
    fn get_resolution(&self) -> ScreenSize {
        self.resolution
    }

    fn generate_ray(&self, film_point: &FilmPoint) -> Ray {
        let u = 2.0 * film_point.x / self.resolution.x as FloatType - 1.0;
        let v = 1.0 - 2.0 * film_point.y / self.resolution.y as FloatType;

        let direction = self.forward.as_ref()
            + self.right.as_ref() * (u * self.half_width)
            + self.up.as_ref() * (v * self.half_height);

        Ray::new(self.center, direction)
    }
}
