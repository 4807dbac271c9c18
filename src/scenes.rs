//! Built-in scenes for the command line tool and benchmarks.

use std::sync::Arc;

use crate::{
    camera::{CameraError, PerspectiveCamera},
    geometry::{ScreenSize, WorldPoint, WorldVector},
    light::PointLight,
    scene::{
        Scene,
        primitives::{Plane, Sphere},
    },
    shader::ShaderRef,
    util::Rgb,
};

/// Three spheres on a ground plane, lit by a single point light.
/// `make_shader` creates a shader for each object from its base color.
pub fn spheres(
    resolution: ScreenSize,
    background: Rgb,
    make_shader: impl Fn(Rgb) -> ShaderRef,
) -> Result<Scene, CameraError> {
    let mut scene = Scene::new(background);

    scene.add_camera(Arc::new(
        PerspectiveCamera::builder()
            .center(WorldPoint::new(0.0, 1.5, 6.0))
            .forward(WorldVector::new(0.0, -0.2, -1.0))
            .up(WorldVector::new(0.0, 1.0, 0.0))
            .resolution(resolution)
            .vertical_fov(45.0)
            .build()?,
    ));

    scene.add_light(Arc::new(PointLight::new(
        WorldPoint::new(-3.0, 6.0, 4.0),
        Rgb::new(60.0, 60.0, 60.0),
    )));

    scene.add_primitive(Arc::new(Plane::new(
        WorldVector::new(0.0, 1.0, 0.0),
        WorldPoint::new(0.0, -1.0, 0.0),
        make_shader(Rgb::new(0.73, 0.73, 0.73)),
    )));

    let spheres = [
        (WorldPoint::new(-2.2, 0.0, -1.0), 1.0, Rgb::new(0.65, 0.05, 0.05)),
        (WorldPoint::new(0.0, 0.0, -2.0), 1.0, Rgb::new(0.12, 0.45, 0.15)),
        (WorldPoint::new(2.2, 0.0, -1.0), 1.0, Rgb::new(0.2, 0.2, 0.8)),
    ];
    for (center, radius, color) in spheres {
        scene.add_primitive(Arc::new(Sphere::new(center, radius, make_shader(color))));
    }

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::pixel_center,
        geometry::ScreenPoint,
        shader::{EyelightShader, FlatShader},
    };
    use assert2::{assert, let_assert};

    #[test]
    fn spheres_scene_contents() {
        let_assert!(
            Ok(scene) = spheres(ScreenSize::new(64, 48), Rgb::default(), |c| {
                Arc::new(EyelightShader::new(c))
            })
        );
        assert!(scene.primitive_count() == 4);
        assert!(scene.get_lights().len() == 1);
        let_assert!(Some(camera) = scene.get_active_camera());
        assert!(camera.get_resolution() == ScreenSize::new(64, 48));
    }

    #[test]
    fn center_pixel_sees_middle_sphere() {
        let green = Rgb::new(0.12, 0.45, 0.15);
        let scene = spheres(ScreenSize::new(64, 48), Rgb::default(), |c| {
            Arc::new(FlatShader::new(c))
        })
        .unwrap();

        let camera = scene.get_active_camera().unwrap();
        let mut ray = camera.generate_ray(&pixel_center(&ScreenPoint::new(32, 24)));
        assert!(scene.ray_trace(&mut ray) == green);
    }

    #[test]
    fn invalid_resolution() {
        let_assert!(
            Err(CameraError::EmptyResolution(0, 0)) =
                spheres(ScreenSize::new(0, 0), Rgb::default(), |c| Arc::new(FlatShader::new(c)))
        );
    }
}
