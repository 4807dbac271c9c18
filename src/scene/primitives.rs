use crate::{
    geometry::{FloatType, Ray, Triangle, WorldPoint, WorldVector},
    shader::ShaderRef,
};

use super::Primitive;

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
    pub shader: ShaderRef,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType, shader: ShaderRef) -> Self {
        Sphere {
            center,
            radius,
            shader,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &mut Ray) -> bool {
        let oc = ray.origin - self.center;
        let a = ray.direction.norm_squared();
        let half_b = oc.dot(&ray.direction);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;

        if discriminant < 0.0 {
            return false;
        }

        // Nearer root first, the farther one is only relevant from inside the sphere.
        let sqrt_disc = discriminant.sqrt();
        ray.try_update((-half_b - sqrt_disc) / a) || ray.try_update((-half_b + sqrt_disc) / a)
    }

    fn get_normal(&self, ray: &Ray) -> WorldVector {
        (ray.hit_point() - self.center).normalize()
    }

    fn get_shader(&self) -> ShaderRef {
        self.shader.clone()
    }
}

/// Infinite plane through `origin`
#[derive(Clone, Debug)]
pub struct Plane {
    pub normal: WorldVector,
    pub origin: WorldPoint,
    pub shader: ShaderRef,
}

impl Plane {
    pub fn new(normal: WorldVector, origin: WorldPoint, shader: ShaderRef) -> Self {
        Plane {
            normal: normal.normalize(),
            origin,
            shader,
        }
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &mut Ray) -> bool {
        // Parallel rays divide by zero, try_update rejects the resulting inf or NaN.
        let t = (self.origin - ray.origin).dot(&self.normal) / ray.direction.dot(&self.normal);
        ray.try_update(t)
    }

    fn get_normal(&self, _ray: &Ray) -> WorldVector {
        self.normal
    }

    fn get_shader(&self) -> ShaderRef {
        self.shader.clone()
    }
}

#[derive(Clone, Debug)]
pub struct TrianglePrimitive {
    pub vertices: Triangle<WorldPoint>,
    pub shader: ShaderRef,
}

impl TrianglePrimitive {
    pub fn new(vertices: Triangle<WorldPoint>, shader: ShaderRef) -> Self {
        TrianglePrimitive { vertices, shader }
    }
}

impl Primitive for TrianglePrimitive {
    fn intersect(&self, ray: &mut Ray) -> bool {
        match self.vertices.intersect(ray) {
            Some(t) => ray.try_update(t),
            None => false,
        }
    }

    fn get_normal(&self, _ray: &Ray) -> WorldVector {
        self.vertices.normal().normalize()
    }

    fn get_shader(&self) -> ShaderRef {
        self.shader.clone()
    }
}
