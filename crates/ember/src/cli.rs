use clap::{Parser, ValueEnum};
use ember_renderer::RenderConfig;
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ember")]
#[command(about = "Render the demo room with a CPU Monte Carlo path tracer")]
pub struct Args {
    /// JSON file with render settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Width divided by height
    #[arg(long)]
    pub aspect_ratio: Option<f32>,

    /// Number of samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long, short = 'd')]
    pub max_depth: Option<u32>,

    /// Write linear values instead of gamma 2 encoded ones
    #[arg(long)]
    pub no_gamma: bool,

    /// Seed for the random generator; a fresh seed is drawn when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replace the ceiling lamp with N lights on a ring above an open room
    #[arg(long, value_name = "N")]
    pub ring_lights: Option<u32>,

    /// Output PNG path; generated from the settings when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply the command line overrides to `config`.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            config.aspect_ratio = aspect_ratio;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.no_gamma {
            config.gamma_correction = false;
        }
    }
}
