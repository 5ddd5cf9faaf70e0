//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::Config;

/// Sun key held down for every simulated frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SunKey {
    /// Move the sun up.
    Raise,
    /// Move the sun down.
    Lower,
}

/// Nimbus command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "nimbus", about = "Render a single-scattering sky to PNG")]
pub struct CliArgs {
    /// Image width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Camera pitch in radians.
    #[arg(long, allow_negative_numbers = true)]
    pub pitch: Option<f32>,

    /// Camera yaw in radians.
    #[arg(long, allow_negative_numbers = true)]
    pub yaw: Option<f32>,

    /// Starting sun angle in radians.
    #[arg(long, allow_negative_numbers = true)]
    pub sun_angle: Option<f32>,

    /// Integration steps per ray segment.
    #[arg(long)]
    pub steps: Option<u32>,

    /// Tone-mapping exposure.
    #[arg(long)]
    pub exposure: Option<f32>,

    /// Number of frames to simulate and render.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Simulated seconds per frame.
    #[arg(long)]
    pub frame_dt: Option<f32>,

    /// Hold a sun key for every frame.
    #[arg(long, value_enum)]
    pub hold: Option<SunKey>,

    /// Pointer drag applied every frame, in pixels: `DX,DY`.
    #[arg(long, value_parser = parse_drag, allow_hyphen_values = true)]
    pub drag: Option<(f32, f32)>,

    /// Output directory for rendered frames.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_drag(value: &str) -> Result<(f32, f32), String> {
    let (dx, dy) = value
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{value}'"))?;
    let dx = dx.trim().parse::<f32>().map_err(|e| format!("bad DX '{dx}': {e}"))?;
    let dy = dy.trim().parse::<f32>().map_err(|e| format!("bad DY '{dy}': {e}"))?;
    Ok((dx, dy))
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.render.width = w;
        }
        if let Some(h) = args.height {
            self.render.height = h;
        }
        if let Some(pitch) = args.pitch {
            self.camera.pitch = pitch;
        }
        if let Some(yaw) = args.yaw {
            self.camera.yaw = yaw;
        }
        if let Some(angle) = args.sun_angle {
            self.sun.angle = angle;
        }
        if let Some(steps) = args.steps {
            self.atmosphere.integration_steps = steps;
        }
        if let Some(exposure) = args.exposure {
            self.render.exposure = exposure;
        }
        if let Some(frames) = args.frames {
            self.render.frames = frames;
        }
        if let Some(dt) = args.frame_dt {
            self.render.frame_dt = dt;
        }
        if let Some(ref output) = args.output {
            self.render.output_dir = output.display().to_string();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
