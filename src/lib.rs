pub mod camera;
pub mod geometry;
pub mod light;
mod renderer;
pub mod scene;
pub mod scenes;
pub mod shader;
pub mod util;

pub use crate::renderer::{RenderError, RenderSettings, render};
pub use camera::{Camera, PerspectiveCamera};
pub use scene::Scene;
