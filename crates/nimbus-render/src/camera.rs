//! Pinhole camera basis and per-pixel ray generation.

use glam::{Vec2, Vec3};

/// Width-to-height ratio used when the host does not provide one.
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Orthonormal camera basis with projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyCamera {
    /// View direction.
    pub forward: Vec3,
    /// Screen +X.
    pub right: Vec3,
    /// Screen +Y.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width divided by height.
    pub aspect: f32,
}

impl SkyCamera {
    /// Build the basis from pitch and yaw (radians). Pitch must stay short of ±π/2.
    pub fn from_angles(pitch: f32, yaw: f32, fov_y: f32, aspect: f32) -> Self {
        let forward = Vec3::new(
            pitch.cos() * -yaw.sin(),
            pitch.sin(),
            -pitch.cos() * yaw.cos(),
        );
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        Self {
            forward,
            right,
            up,
            fov_y,
            aspect,
        }
    }

    /// World-space ray direction for a screen offset in `[-1, 1]²`.
    ///
    /// `(0, 0)` is the view center, `+x` is right and `+y` is up.
    pub fn ray_direction(&self, offset: Vec2) -> Vec3 {
        let half_height = (0.5 * self.fov_y).tan();
        let right = self.right * half_height * self.aspect;
        let up = self.up * half_height;
        (self.forward + right * offset.x + up * offset.y).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orientation_looks_down_neg_z() {
        let cam = SkyCamera::from_angles(0.0, 0.0, 1.5, DEFAULT_ASPECT);
        assert!((cam.forward - Vec3::NEG_Z).length() < 1e-6);
        assert!((cam.right - Vec3::X).length() < 1e-6);
        assert!((cam.up - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        for (pitch, yaw) in [(0.4_f32, 0.0_f32), (-1.2, 2.0), (1.5, -0.7), (0.0, 3.5)] {
            let cam = SkyCamera::from_angles(pitch, yaw, 1.5, DEFAULT_ASPECT);
            for v in [cam.forward, cam.right, cam.up] {
                assert!((v.length() - 1.0).abs() < 1e-5, "pitch={pitch} yaw={yaw}");
            }
            assert!(cam.forward.dot(cam.right).abs() < 1e-5);
            assert!(cam.forward.dot(cam.up).abs() < 1e-5);
            assert!(cam.right.dot(cam.up).abs() < 1e-5);
            assert!(cam.up.y >= 0.0, "camera should not roll upside down");
        }
    }

    #[test]
    fn test_center_ray_is_forward() {
        let cam = SkyCamera::from_angles(0.4, 1.0, 1.5, DEFAULT_ASPECT);
        assert!((cam.ray_direction(Vec2::ZERO) - cam.forward).length() < 1e-6);
    }

    #[test]
    fn test_edge_rays_span_field_of_view() {
        let fov = 1.5;
        let cam = SkyCamera::from_angles(0.0, 0.0, fov, DEFAULT_ASPECT);

        let top = cam.ray_direction(Vec2::new(0.0, 1.0));
        let bottom = cam.ray_direction(Vec2::new(0.0, -1.0));
        assert!((top.angle_between(bottom) - fov).abs() < 1e-4);
        assert!(top.y > 0.0 && bottom.y < 0.0);

        let right = cam.ray_direction(Vec2::new(1.0, 0.0));
        let expected = (0.5 * fov).tan() * DEFAULT_ASPECT;
        assert!((right.x / -right.z - expected).abs() < 1e-4);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let cam = SkyCamera::from_angles(0.3, -0.5, 1.5, DEFAULT_ASPECT);
        for x in [-1.0_f32, -0.3, 0.0, 0.8, 1.0] {
            for y in [-1.0_f32, 0.0, 0.5, 1.0] {
                let dir = cam.ray_direction(Vec2::new(x, y));
                assert!((dir.length() - 1.0).abs() < 1e-5);
            }
        }
    }
}
