//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Largest starting pitch, matching the clamp applied to pointer drag.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

/// Top-level renderer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output image settings.
    pub render: RenderConfig,
    /// Initial camera orientation and input sensitivity.
    pub camera: CameraConfig,
    /// Initial sun angle and how fast it moves.
    pub sun: SunConfig,
    /// Planet and medium constants.
    pub atmosphere: AtmosphereConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output image configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Projection aspect ratio (width / height).
    pub aspect: f32,
    /// Tone-mapping exposure.
    pub exposure: f32,
    /// Directory rendered frames are written to.
    pub output_dir: String,
    /// Number of frames to simulate and render.
    pub frames: u32,
    /// Simulated seconds between frames.
    pub frame_dt: f32,
}

/// Camera configuration. Angles are in radians.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub pitch: f32,
    pub yaw: f32,
    /// Vertical field of view.
    pub fov_y: f32,
    /// Radians per pixel of pointer drag.
    pub mouse_sensitivity: f32,
    /// Eye height above the surface in kilometres.
    pub eye_altitude: f32,
}

/// Sun configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    /// Starting sun angle in radians (0 = horizon).
    pub angle: f32,
    /// Radians per second while a sun key is held.
    pub angular_speed: f32,
}

/// Atmosphere constants. Distances in kilometres, coefficients per metre.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub planet_radius: f32,
    /// Shell thickness above the surface.
    pub atmosphere_height: f32,
    pub rayleigh_scattering: [f32; 3],
    pub mie_scattering: [f32; 3],
    /// Mie scattering / extinction ratio.
    pub mie_albedo: f32,
    pub ozone_extinction: [f32; 3],
    pub density_scale: f32,
    pub rayleigh_scale_height: f32,
    pub mie_scale_height: f32,
    /// Ozone density relative to Rayleigh density.
    pub ozone_ratio: f32,
    /// Henyey-Greenstein asymmetry.
    pub mie_g: f32,
    pub sun_intensity: [f32; 3],
    /// Samples per integrated segment.
    pub integration_steps: u32,
    pub ground_albedo: [f32; 3],
    /// Cosine of the sun disk half-angle.
    pub sun_disk_cos: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub json_log: bool,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            aspect: 16.0 / 9.0,
            exposure: 0.02,
            output_dir: "renders".to_string(),
            frames: 1,
            frame_dt: 1.0 / 60.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pitch: 0.4,
            yaw: 0.0,
            fov_y: 1.5,
            mouse_sensitivity: 0.0025,
            eye_altitude: 0.01,
        }
    }
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            angular_speed: 0.0625,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            planet_radius: 6371.0,
            atmosphere_height: 100.0,
            rayleigh_scattering: [5.80e-6, 1.65e-5, 3.31e-5],
            mie_scattering: [21e-6; 3],
            mie_albedo: 0.9,
            ozone_extinction: [1e-12, 1e-10, 1e-9],
            density_scale: 1.2,
            rayleigh_scale_height: 8.0,
            mie_scale_height: 1.2,
            ozone_ratio: 6e-7,
            mie_g: -0.8,
            sun_intensity: [24.0; 3],
            integration_steps: 20,
            ground_albedo: [0.07; 3],
            sun_disk_cos: 0.9993,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_log: false,
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject settings the renderer cannot use. Atmosphere physics is checked
    /// separately by the atmosphere crate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: String| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        };

        if self.render.width == 0 || self.render.height == 0 {
            return invalid(
                "render size",
                format!("{}x{} has no pixels", self.render.width, self.render.height),
            );
        }
        if self.render.exposure <= 0.0 || !self.render.exposure.is_finite() {
            return invalid("render.exposure", format!("{} is not positive", self.render.exposure));
        }
        if self.render.aspect <= 0.0 || !self.render.aspect.is_finite() {
            return invalid("render.aspect", format!("{} is not positive", self.render.aspect));
        }
        if self.render.frames == 0 {
            return invalid("render.frames", "at least one frame is required".to_string());
        }
        if self.render.frame_dt < 0.0 || !self.render.frame_dt.is_finite() {
            return invalid("render.frame_dt", format!("{} is negative", self.render.frame_dt));
        }
        if self.camera.fov_y <= 0.0 || self.camera.fov_y >= std::f32::consts::PI {
            return invalid("camera.fov_y", format!("{} is outside (0, pi)", self.camera.fov_y));
        }
        let pitch_limit = MAX_PITCH_DEGREES.to_radians();
        if self.camera.pitch.is_nan() || self.camera.pitch.abs() > pitch_limit {
            return invalid(
                "camera.pitch",
                format!("{} is outside ±{MAX_PITCH_DEGREES}°", self.camera.pitch),
            );
        }
        if self.camera.eye_altitude < 0.0
            || self.camera.eye_altitude >= self.atmosphere.atmosphere_height
        {
            return invalid(
                "camera.eye_altitude",
                format!(
                    "{} must lie between the surface and the atmosphere top ({})",
                    self.camera.eye_altitude, self.atmosphere.atmosphere_height
                ),
            );
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

/// Where [`Config::open`] got its settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Read from an existing `config.ron`.
    Loaded(PathBuf),
    /// No file existed; defaults were written here.
    Created(PathBuf),
}

impl ConfigSource {
    /// Path of the config file.
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded(path) | Self::Created(path) => path,
        }
    }
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let (config, source) = Self::open(config_dir)?;
        match &source {
            ConfigSource::Loaded(path) => log::info!("Loaded config from {}", path.display()),
            ConfigSource::Created(path) => {
                log::info!("Created default config at {}", path.display())
            }
        }
        Ok(config)
    }

    /// Like [`Config::load_or_create`] but silent, reporting where the settings came from.
    ///
    /// For callers that install their logger only after reading the config.
    pub fn open(config_dir: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            Ok((config, ConfigSource::Loaded(config_path)))
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            Ok((config, ConfigSource::Created(config_path)))
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }
}
