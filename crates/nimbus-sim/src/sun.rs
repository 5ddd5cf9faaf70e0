//! Sun angle and the direction derived from it.

use glam::Vec3;

/// Sun elevation angle in radians, swept in the vertical YZ plane.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SunState {
    /// 0 puts the sun on the horizon toward −Z; π/2 is straight overhead.
    pub angle: f32,
}

impl SunState {
    /// Create a sun at the given angle.
    pub fn new(angle: f32) -> Self {
        Self { angle }
    }

    /// Unit vector pointing from the scene toward the sun.
    pub fn direction(&self) -> Vec3 {
        Vec3::new(0.0, self.angle.sin(), -self.angle.cos())
    }

    /// Sun after `dt` seconds moving in direction `sign` (−1, 0 or 1) at `speed` rad/s.
    #[must_use]
    pub fn advanced(&self, dt: f32, sign: f32, speed: f32) -> Self {
        Self {
            angle: self.angle + sign * speed * dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_direction_is_unit() {
        for i in 0..32 {
            let sun = SunState::new(i as f32 * 0.2);
            assert!((sun.direction().length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_horizon_and_zenith() {
        let horizon = SunState::new(0.0).direction();
        assert!((horizon - Vec3::NEG_Z).length() < 1e-6);
        let zenith = SunState::new(FRAC_PI_2).direction();
        assert!((zenith - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_advance_rate() {
        let sun = SunState::default().advanced(4.0, 1.0, 0.0625);
        assert!((sun.angle - 0.25).abs() < 1e-6);
        let sun = sun.advanced(4.0, -1.0, 0.0625);
        assert!(sun.angle.abs() < 1e-6);
        assert_eq!(sun.advanced(10.0, 0.0, 0.0625), sun);
    }
}
