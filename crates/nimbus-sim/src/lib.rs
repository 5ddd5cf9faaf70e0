//! Per-frame simulation state: camera orientation and sun angle.
//!
//! The state is a plain value. [`SimState::advance`] takes the elapsed time
//! and the input gathered during the frame and returns the next state, so the
//! renderer only ever sees a finished snapshot.

mod camera;
mod input;
mod sun;

pub use camera::CameraState;
pub use input::FrameInput;
pub use sun::SunState;

use tracing::trace;

/// Tunables for how input maps onto the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct SimSettings {
    /// Radians of pitch/yaw per pixel of pointer drag.
    pub mouse_sensitivity: f32,
    /// Radians per second the sun angle moves while a sun key is held.
    pub sun_angular_speed: f32,
    /// Pitch is clamped to `±pitch_limit` radians.
    pub pitch_limit: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.0025,
            sun_angular_speed: 0.0625,
            pitch_limit: 89.0_f32.to_radians(),
        }
    }
}

/// Everything that changes between frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimState {
    /// Camera orientation.
    pub camera: CameraState,
    /// Sun position.
    pub sun: SunState,
}

impl SimState {
    /// Create a state from explicit camera and sun values.
    pub fn new(camera: CameraState, sun: SunState) -> Self {
        Self { camera, sun }
    }

    /// Compute the state after `dt` seconds with the given input applied.
    #[must_use]
    pub fn advance(&self, dt: f32, input: &FrameInput, settings: &SimSettings) -> Self {
        let mut camera = self.camera.clone();
        if let Some(delta) = input.drag {
            camera.apply_drag(delta, settings.mouse_sensitivity, settings.pitch_limit);
        }

        let sun = self
            .sun
            .advanced(dt, input.sun_direction_sign(), settings.sun_angular_speed);

        trace!(
            pitch = camera.pitch,
            yaw = camera.yaw,
            sun_angle = sun.angle,
            "simulation advanced"
        );

        Self { camera, sun }
    }
}
