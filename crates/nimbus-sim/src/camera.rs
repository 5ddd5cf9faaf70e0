//! Camera orientation driven by pointer drag.

use glam::Vec2;

/// Pitch/yaw orientation and vertical field of view, all in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    /// Positive pitch looks up.
    pub pitch: f32,
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Vertical field of view.
    pub fov_y: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pitch: 0.4,
            yaw: 0.0,
            fov_y: 1.5,
        }
    }
}

impl CameraState {
    /// Accumulate a drag delta in pixels: x turns yaw, y turns pitch.
    pub fn apply_drag(&mut self, delta: Vec2, sensitivity: f32, pitch_limit: f32) {
        self.yaw += delta.x * sensitivity;
        self.pitch = (self.pitch + delta.y * sensitivity).clamp(-pitch_limit, pitch_limit);
    }
}
