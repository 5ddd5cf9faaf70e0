//! Frame loop: simulate, render, write.

use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use nimbus_atmosphere::{AtmosphereError, AtmosphereParams};
use nimbus_config::{
    AtmosphereConfig, CliArgs, Config, ConfigError, ConfigSource, MAX_PITCH_DEGREES, SunKey,
};
use nimbus_render::{RenderError, SkyCamera, SkyRenderer};
use nimbus_sim::{CameraState, FrameInput, SimSettings, SimState, SunState};
use tracing::{debug, info, warn};

use crate::platform::{PlatformDirs, PlatformError};

/// Anything that stops a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid atmosphere: {0}")]
    Atmosphere(#[from] AtmosphereError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input replayed on every simulated frame after the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameScript {
    /// Sun key held for the whole run.
    pub hold: Option<SunKey>,
    /// Pointer drag applied each frame, in pixels.
    pub drag: Option<Vec2>,
}

impl FrameScript {
    /// Script described by the command line.
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            hold: args.hold,
            drag: args.drag.map(|(dx, dy)| Vec2::new(dx, dy)),
        }
    }

    fn input(&self) -> FrameInput {
        FrameInput {
            drag: self.drag,
            raise_sun: self.hold == Some(SunKey::Raise),
            lower_sun: self.hold == Some(SunKey::Lower),
        }
    }
}

/// Convert the serialized atmosphere section into integrator parameters.
pub fn atmosphere_params(config: &AtmosphereConfig) -> AtmosphereParams {
    AtmosphereParams {
        planet_radius: config.planet_radius,
        atmosphere_radius: config.planet_radius + config.atmosphere_height,
        rayleigh_scattering: Vec3::from(config.rayleigh_scattering),
        mie_scattering: Vec3::from(config.mie_scattering),
        mie_albedo: config.mie_albedo,
        ozone_extinction: Vec3::from(config.ozone_extinction),
        density_scale: config.density_scale,
        rayleigh_scale_height: config.rayleigh_scale_height,
        mie_scale_height: config.mie_scale_height,
        ozone_ratio: config.ozone_ratio,
        mie_g: config.mie_g,
        sun_intensity: Vec3::from(config.sun_intensity),
        integration_steps: config.integration_steps,
        ground_albedo: Vec3::from(config.ground_albedo),
        sun_disk_cos: config.sun_disk_cos,
        ..AtmosphereParams::earth()
    }
}

/// Simulation state at the start of a run.
pub fn initial_state(config: &Config) -> SimState {
    SimState::new(
        CameraState {
            pitch: config.camera.pitch,
            yaw: config.camera.yaw,
            fov_y: config.camera.fov_y,
        },
        SunState::new(config.sun.angle),
    )
}

/// Render `config.render.frames` frames into `output_dir`, returning the written paths.
pub fn run(
    config: &Config,
    script: &FrameScript,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    config
        .validate()
        .inspect_err(|e| warn!("rejecting config: {e}"))?;
    let params = atmosphere_params(&config.atmosphere);
    params
        .validate()
        .inspect_err(|e| warn!("rejecting atmosphere: {e}"))?;

    std::fs::create_dir_all(output_dir).map_err(|source| AppError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let renderer = SkyRenderer::new(params)
        .with_eye_altitude(config.camera.eye_altitude)
        .with_exposure(config.render.exposure);
    let settings = SimSettings {
        mouse_sensitivity: config.camera.mouse_sensitivity,
        sun_angular_speed: config.sun.angular_speed,
        pitch_limit: MAX_PITCH_DEGREES.to_radians(),
    };
    let input = script.input();

    info!(
        frames = config.render.frames,
        width = config.render.width,
        height = config.render.height,
        steps = config.atmosphere.integration_steps,
        output = %output_dir.display(),
        "starting render"
    );

    let mut state = initial_state(config);
    let mut written = Vec::with_capacity(config.render.frames as usize);

    for frame in 0..config.render.frames {
        if frame > 0 {
            state = state.advance(config.render.frame_dt, &input, &settings);
        }

        let camera = SkyCamera::from_angles(
            state.camera.pitch,
            state.camera.yaw,
            state.camera.fov_y,
            config.render.aspect,
        );
        let image = renderer.render(
            &camera,
            state.sun.direction(),
            config.render.width,
            config.render.height,
        )?;

        let path = output_dir.join(format!("frame_{frame:04}.png"));
        image.write_png(&path)?;
        debug!(
            frame,
            sun_angle = state.sun.angle,
            pitch = state.camera.pitch,
            yaw = state.camera.yaw,
            mean = %image.mean(),
            path = %path.display(),
            "wrote frame"
        );
        written.push(path);
    }

    info!(count = written.len(), "render complete");
    Ok(written)
}

/// Full command-line flow: directories, config, logging, then [`run`].
pub fn run_cli(args: &CliArgs) -> Result<Vec<PathBuf>, AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_all()?;

    let (mut config, source) = Config::open(&dirs.config_dir)?;
    config.apply_cli_overrides(args);

    if let Some(log_file) =
        nimbus_log::init_logging(Some(&dirs.log_dir), config.debug.json_log, Some(&config))
    {
        info!(path = %log_file.display(), "writing json log");
    }
    log_config_source(&source);

    let output_dir = PathBuf::from(&config.render.output_dir);
    run(&config, &FrameScript::from_args(args), &output_dir)
}

/// Report where the config came from. Called once the subscriber is installed.
fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::Loaded(path) => info!(path = %path.display(), "loaded config"),
        ConfigSource::Created(path) => info!(path = %path.display(), "created default config"),
    }
}
