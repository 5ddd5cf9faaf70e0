//! Configuration for the nimbus sky renderer.
//!
//! Settings persist to disk as `config.ron`. Missing fields fall back to
//! defaults, unknown fields are ignored, and command-line flags override
//! whatever was loaded.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, SunKey};
pub use config::{
    AtmosphereConfig, CameraConfig, Config, ConfigSource, DebugConfig, MAX_PITCH_DEGREES,
    RenderConfig, SunConfig,
};
pub use error::ConfigError;
