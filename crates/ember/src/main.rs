mod cli;
mod logger;
mod output;
mod scene;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use ember_renderer::{render, Camera, RenderConfig};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene::{build_scene, Lighting, RoomLayout};
use std::path::PathBuf;
use std::time::Instant;

fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };
    args.apply_overrides(&mut config);
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    info!("Starting Ember");

    let config = load_config(&args)?;
    config.validate().context("invalid render settings")?;

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let lighting = match args.ring_lights {
        Some(count) => Lighting::Ring(count),
        None => Lighting::CeilingLamp,
    };
    let scene = build_scene(&RoomLayout::default(), lighting);
    let camera = Camera::new(config.aspect_ratio);

    let start = Instant::now();
    let image = render(&camera, &scene, &config, &mut rng)?;
    let rgb = image.to_rgb8(config.gamma_correction);

    let path = match &args.output {
        Some(path) => path.clone(),
        None => PathBuf::from(output::generate_filename(&config, output::unix_timestamp())),
    };
    output::save_png(&path, image.width, image.height, rgb)?;

    info!("Done in {:.2?}", start.elapsed());
    Ok(())
}
