use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use minirt::{
    RenderSettings,
    geometry::ScreenSize,
    render,
    scene::load_obj,
    scenes,
    shader::{DiffuseShader, EyelightShader, FlatShader, ShaderRef},
    util::Rgb,
};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShaderKind {
    Eyelight,
    Flat,
    Diffuse,
}

impl ShaderKind {
    fn make(self, color: Rgb) -> ShaderRef {
        match self {
            ShaderKind::Eyelight => Arc::new(EyelightShader::new(color)),
            ShaderKind::Flat => Arc::new(FlatShader::new(color)),
            ShaderKind::Diffuse => Arc::new(DiffuseShader::new(color, 0.1, 0.9)),
        }
    }
}

/// Renders the built-in demo scene to a PNG file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Rays per pixel
    #[arg(short, long, default_value_t = 1)]
    samples: u32,

    /// Seed for the pixel jitter
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = ShaderKind::Eyelight)]
    shader: ShaderKind,

    /// Background color as r,g,b
    #[arg(long, value_delimiter = ',', default_values_t = [0.0, 0.0, 0.0])]
    background: Vec<f32>,

    /// Wavefront OBJ mesh to add to the scene
    #[arg(long)]
    obj: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let shader = args.shader;
    let background = match args.background[..] {
        [r, g, b] => Rgb::new(r, g, b),
        _ => anyhow::bail!("Background needs exactly three components"),
    };

    let mut scene = scenes::spheres(ScreenSize::new(args.width, args.height), background, |c| {
        shader.make(c)
    })
    .context("Invalid camera settings")?;

    if let Some(path) = &args.obj {
        let mesh = load_obj(path, shader.make(Rgb::new(0.8, 0.8, 0.8)))
            .with_context(|| format!("Failed to load {}", path.display()))?;
        for primitive in mesh {
            scene.add_primitive(primitive);
        }
    }

    let settings = RenderSettings {
        sample_count: args
            .samples
            .try_into()
            .context("Sample count must be positive")?,
        seed: args.seed,
    };

    let bar = ProgressBar::no_length();
    let image = render(&scene, &settings, |finished, total| {
        bar.set_length(total as u64);
        bar.set_position(finished as u64);
    })?;
    bar.finish();

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
