//! Ray/sphere geometry for spheres centered at the world origin.

use glam::Vec3;

/// Added to the quadratic denominator so a degenerate `a` never divides by exactly zero.
pub const QUADRATIC_EPSILON: f32 = 1e-5;

/// Solve `a·x² + b·x + c = 0`.
///
/// Returns `None` when the discriminant is negative. Otherwise returns
/// `(x1, x2)` with `x1` taken from `+√D` and `x2` from `−√D`.
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let denom = 2.0 * a + QUADRATIC_EPSILON;
    Some(((-b + sqrt_d) / denom, (-b - sqrt_d) / denom))
}

/// Distance along `dir` to the closest intersection with an origin-centered
/// sphere that lies strictly ahead of `origin`.
///
/// Returns `None` if the ray misses the sphere or the sphere is entirely behind it.
pub fn forward_ray_sphere(origin: Vec3, dir: Vec3, radius: f32) -> Option<f32> {
    let a = dir.dot(dir);
    let b = 2.0 * origin.dot(dir);
    let c = origin.dot(origin) - radius * radius;

    let (t1, t2) = solve_quadratic(a, b, c)?;
    match (t1 > 0.0, t2 > 0.0) {
        (true, true) => Some(t1.min(t2)),
        (true, false) => Some(t1),
        (false, true) => Some(t2),
        (false, false) => None,
    }
}
