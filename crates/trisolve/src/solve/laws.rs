//! Law of cosines / law of sines helpers. Angles in radians.

/// `acos` with its argument clamped to [-1, 1].
///
/// Rounding at near-degenerate inputs can push the cosine slightly outside the
/// domain; the boundary value is the right answer there.
#[inline]
pub(crate) fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Angle opposite `opp`, given the two sides `u`, `v` adjacent to it.
///
/// Sides are divided by the longest one before squaring; the angle does not
/// depend on scale and the squares stay finite for any positive input.
#[inline]
pub(crate) fn angle_from_sides(u: f64, v: f64, opp: f64) -> f64 {
    let s = u.max(v).max(opp);
    let (u, v, opp) = (u / s, v / s, opp / s);
    acos_clamped((u * u + v * v - opp * opp) / (2.0 * u * v))
}

/// Side opposite the angle `theta` enclosed by sides `u` and `v`.
#[inline]
pub(crate) fn side_from_sas(u: f64, theta: f64, v: f64) -> f64 {
    let s = u.max(v);
    let (u, v) = (u / s, v / s);
    s * (u * u + v * v - 2.0 * u * v * theta.cos()).max(0.0).sqrt()
}

/// Side opposite `theta`, scaled from a known side/opposite-angle pair.
#[inline]
pub(crate) fn side_from_sines(known_side: f64, known_angle: f64, theta: f64) -> f64 {
    known_side * theta.sin() / known_angle.sin()
}
