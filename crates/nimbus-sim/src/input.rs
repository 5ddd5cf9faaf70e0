//! Input gathered over one frame by the host.

use glam::Vec2;

/// Input deltas collected during a frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer movement in pixels while the primary button is held.
    pub drag: Option<Vec2>,
    /// Raise-sun key held.
    pub raise_sun: bool,
    /// Lower-sun key held.
    pub lower_sun: bool,
}

impl FrameInput {
    /// +1 when only raising, −1 when only lowering, 0 otherwise.
    pub fn sun_direction_sign(&self) -> f32 {
        match (self.raise_sun, self.lower_sun) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_keys_cancel() {
        let input = FrameInput {
            drag: None,
            raise_sun: true,
            lower_sun: true,
        };
        assert_eq!(input.sun_direction_sign(), 0.0);
    }

    #[test]
    fn test_single_key_sign() {
        let raise = FrameInput {
            raise_sun: true,
            ..Default::default()
        };
        let lower = FrameInput {
            lower_sun: true,
            ..Default::default()
        };
        assert_eq!(raise.sun_direction_sign(), 1.0);
        assert_eq!(lower.sun_direction_sign(), -1.0);
        assert_eq!(FrameInput::default().sun_direction_sign(), 0.0);
    }
}
