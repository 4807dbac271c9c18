use std::num::NonZeroU32;

use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

use crate::{
    camera::{Camera, pixel_center},
    geometry::{FilmPoint, ScreenPoint},
    scene::Scene,
    util::{Rgb, color_to_image},
};

#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    /// Rays traced per pixel. With a single sample the ray goes through the pixel center,
    /// otherwise positions are jittered uniformly over the pixel.
    pub sample_count: NonZeroU32,
    /// Seed for the jitter, a random seed is used if None.
    pub seed: Option<u64>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            sample_count: NonZeroU32::MIN,
            seed: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("The scene has no camera")]
    NoCamera,
}

/// Renders the scene from its active camera.
/// `row_finished` is called with the number of finished rows and the total row count
/// after every image row.
pub fn render<F: FnMut(u32, u32)>(
    scene: &Scene,
    settings: &RenderSettings,
    mut row_finished: F,
) -> Result<RgbImage, RenderError> {
    let camera = scene.get_active_camera().ok_or(RenderError::NoCamera)?;
    let resolution = camera.get_resolution();
    let mut rng = match settings.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    log::info!(
        "Rendering {}x{} pixels, {} samples per pixel, {} primitives, {} lights",
        resolution.x,
        resolution.y,
        settings.sample_count,
        scene.primitive_count(),
        scene.get_lights().len()
    );

    let mut buffer = RgbImage::new(resolution.x, resolution.y);
    for y in 0..resolution.y {
        for x in 0..resolution.x {
            let point = ScreenPoint::new(x, y);
            let pixel = render_pixel(scene, camera.as_ref(), settings, &mut rng, &point);
            buffer.put_pixel(x, y, color_to_image(pixel));
        }
        row_finished(y + 1, resolution.y);
    }

    log::info!("Rendering finished");
    Ok(buffer)
}

fn render_pixel(
    scene: &Scene,
    camera: &dyn Camera,
    settings: &RenderSettings,
    rng: &mut impl Rng,
    point: &ScreenPoint,
) -> Rgb {
    let sample_count = settings.sample_count.get();
    if sample_count == 1 {
        return scene.ray_trace(&mut camera.generate_ray(&pixel_center(point)));
    }

    let mut pixel_sum = Rgb::new(0.0, 0.0, 0.0);
    for _i in 0..sample_count {
        let film_point = FilmPoint::new(
            point.x as f32 + rng.random_range(0.0..1.0),
            point.y as f32 + rng.random_range(0.0..1.0),
        );
        pixel_sum = pixel_sum + scene.ray_trace(&mut camera.generate_ray(&film_point));
    }
    pixel_sum * (1.0 / sample_count as f32)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        camera::PerspectiveCamera,
        geometry::{ScreenSize, WorldPoint, WorldVector},
        scene::primitives::Sphere,
        shader::FlatShader,
    };
    use assert2::{assert, let_assert};

    fn scene() -> Scene {
        let mut scene = Scene::new(Rgb::new(0.0, 0.0, 1.0));
        scene.add_camera(Arc::new(
            PerspectiveCamera::builder()
                .center(WorldPoint::origin())
                .forward(WorldVector::new(0.0, 0.0, -1.0))
                .up(WorldVector::new(0.0, 1.0, 0.0))
                .resolution(ScreenSize::new(9, 7))
                .vertical_fov(60.0)
                .build()
                .unwrap(),
        ));
        scene.add_primitive(Arc::new(Sphere::new(
            WorldPoint::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(FlatShader::new(Rgb::new(1.0, 0.0, 0.0))),
        )));
        scene
    }

    #[test]
    fn no_camera() {
        let_assert!(
            Err(RenderError::NoCamera) =
                render(&Scene::default(), &RenderSettings::default(), |_, _| {})
        );
    }

    #[test]
    fn sphere_in_the_middle() {
        let_assert!(Ok(rendered) = render(&scene(), &RenderSettings::default(), |_, _| {}));

        assert!(rendered.width() == 9);
        assert!(rendered.height() == 7);
        assert!(*rendered.get_pixel(4, 3) == image::Rgb([255, 0, 0]));
        assert!(*rendered.get_pixel(0, 0) == image::Rgb([0, 0, 255]));
        assert!(*rendered.get_pixel(8, 6) == image::Rgb([0, 0, 255]));
    }

    #[test]
    fn reports_every_row() {
        let mut rows = Vec::new();
        render(&scene(), &RenderSettings::default(), |finished, total| {
            rows.push((finished, total))
        })
        .unwrap();
        assert!(rows == (1..=7).map(|y| (y, 7)).collect::<Vec<_>>());
    }

    #[test]
    fn seeded_render_is_deterministic() {
        let settings = RenderSettings {
            sample_count: 16.try_into().unwrap(),
            seed: Some(42),
        };
        let a = render(&scene(), &settings, |_, _| {}).unwrap();
        let b = render(&scene(), &settings, |_, _| {}).unwrap();
        assert!(a == b);

        // Pixels fully inside or outside the sphere don't depend on the jitter
        assert!(*a.get_pixel(4, 3) == image::Rgb([255, 0, 0]));
        assert!(*a.get_pixel(0, 0) == image::Rgb([0, 0, 255]));
    }

    #[test]
    fn empty_scene_is_background() {
        let mut scene = Scene::new(Rgb::new(0.0, 1.0, 0.0));
        scene.add_camera(Arc::new(
            PerspectiveCamera::builder()
                .center(WorldPoint::origin())
                .forward(WorldVector::new(0.0, 0.0, -1.0))
                .up(WorldVector::new(0.0, 1.0, 0.0))
                .resolution(ScreenSize::new(3, 2))
                .vertical_fov(60.0)
                .build()
                .unwrap(),
        ));
        let rendered = render(&scene, &RenderSettings::default(), |_, _| {}).unwrap();
        assert!(rendered.pixels().all(|p| *p == image::Rgb([0, 255, 0])));
    }
}
