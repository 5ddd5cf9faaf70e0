//! Angular phase functions for molecular and aerosol scattering.

use std::f32::consts::PI;

/// Rayleigh phase function: `3/(16π) · (1 + cos²θ)`.
pub fn phase_rayleigh(theta: f32) -> f32 {
    let ct = theta.cos();
    3.0 / (16.0 * PI) * (1.0 + ct * ct)
}

/// Henyey-Greenstein style aerosol phase function with asymmetry `g`:
///
/// `3/(8π) · 3(1−g²)(1+cos²θ) / (2(2+g²)(1+g²−2g·cosθ)^{3/2})`
pub fn phase_henyey_greenstein(theta: f32, g: f32) -> f32 {
    let ct = theta.cos();
    let g2 = g * g;
    let second_denom = 1.0 + g2 - 2.0 * g * ct;
    3.0 / (8.0 * PI) * 3.0 * (1.0 - g2) * (1.0 + ct * ct)
        / (2.0 * (2.0 + g2) * (second_denom * second_denom * second_denom).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Integrate a phase function over the full sphere of solid angle.
    fn integrate_sphere(f: impl Fn(f32) -> f32) -> f32 {
        let n = 4096;
        let d_theta = PI / n as f32;
        (0..n)
            .map(|i| {
                let theta = (i as f32 + 0.5) * d_theta;
                f(theta) * 2.0 * PI * theta.sin() * d_theta
            })
            .sum()
    }

    #[test]
    fn test_rayleigh_at_zero() {
        assert!((phase_rayleigh(0.0) - 3.0 / (8.0 * PI)).abs() < 1e-6);
    }

    #[test]
    fn test_rayleigh_normalized() {
        let total = integrate_sphere(phase_rayleigh);
        assert!((total - 1.0).abs() < 1e-3, "integral={total}");
    }

    #[test]
    fn test_rayleigh_symmetric() {
        for theta in [0.1_f32, 0.7, 1.2] {
            let a = phase_rayleigh(theta);
            let b = phase_rayleigh(PI - theta);
            assert!((a - b).abs() < 1e-6, "theta={theta}: {a} vs {b}");
        }
    }

    #[test]
    fn test_henyey_greenstein_zero_g_is_symmetric_reference() {
        // g = 0 collapses to 9/(32π) · (1 + cos²θ)
        for theta in [0.0_f32, 0.4, 1.0, PI / 2.0, 2.5, PI] {
            let ct = theta.cos();
            let expected = 9.0 / (32.0 * PI) * (1.0 + ct * ct);
            let actual = phase_henyey_greenstein(theta, 0.0);
            assert!(
                (actual - expected).abs() < 1e-6,
                "theta={theta}: {actual} vs {expected}"
            );
        }
    }

    #[test]
    fn test_henyey_greenstein_negative_g_peaks_at_pi() {
        let g = -0.8;
        let back = phase_henyey_greenstein(PI, g);
        let side = phase_henyey_greenstein(PI / 2.0, g);
        let front = phase_henyey_greenstein(0.0, g);
        assert!(back > side && side > front, "{back} {side} {front}");
    }

    #[test]
    fn test_henyey_greenstein_positive_everywhere() {
        for i in 0..=64 {
            let theta = i as f32 / 64.0 * PI;
            for g in [-0.9_f32, -0.8, 0.0, 0.5, 0.9] {
                let p = phase_henyey_greenstein(theta, g);
                assert!(p > 0.0 && p.is_finite(), "theta={theta} g={g} -> {p}");
            }
        }
    }
}
