use std::{fs, path::Path, sync::Arc};

use thiserror::Error;

use crate::{
    geometry::{Triangle, WorldPoint},
    shader::ShaderRef,
};

use super::{PrimitiveRef, primitives::TrianglePrimitive};

/// Loads all triangles of a Wavefront OBJ file as separate primitives sharing one shader.
pub fn load_obj(p: impl AsRef<Path>, shader: ShaderRef) -> Result<Vec<PrimitiveRef>, ObjOpenError> {
    let p = p.as_ref();
    let content = fs::read_to_string(p)?;
    let primitives = parse_obj(content, shader)?;
    log::info!("Loaded {} triangles from {}", primitives.len(), p.display());
    Ok(primitives)
}

/// Parses OBJ source text into triangle primitives.
/// Shapes other than triangles (points, lines) are skipped.
pub fn parse_obj(content: String, shader: ShaderRef) -> Result<Vec<PrimitiveRef>, ObjOpenError> {
    let parsed = wavefront_obj::obj::parse(content)?;
    let mut primitives: Vec<PrimitiveRef> = Vec::new();

    for o in parsed.objects.into_iter() {
        let vertex = |vtindex: (usize, Option<usize>, Option<usize>)| {
            let v = &o.vertices[vtindex.0];
            WorldPoint::new(v.x as f32, v.y as f32, v.z as f32)
        };

        for geometry in &o.geometry {
            for shape in &geometry.shapes {
                let wavefront_obj::obj::Primitive::Triangle(a, b, c) = shape.primitive else {
                    log::warn!("Skipping non-triangle primitive in object {}", o.name);
                    continue;
                };

                let vertices = Triangle::new(vertex(a), vertex(b), vertex(c));
                primitives.push(Arc::new(TrianglePrimitive::new(vertices, shader.clone())));
            }
        }
    }

    Ok(primitives)
}

#[derive(Error, Debug)]
pub enum ObjOpenError {
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    ParseError(#[from] wavefront_obj::ParseError),
}
