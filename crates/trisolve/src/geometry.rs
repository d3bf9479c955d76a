//! Planar placement of a solved triangle, for collaborators that draw it.

use nalgebra::Matrix2;

use crate::solve::Triangle;
use crate::Vec2;

/// Place a solved triangle in the plane: vertex A (angle α) at the origin,
/// B on the positive x-axis at distance `c`, C above the axis at distance `b`
/// from A. Vertices are counterclockwise.
pub fn place_vertices(t: &Triangle) -> [Vec2<f64>; 3] {
    let [_, b, c] = t.sides;
    let alpha = t.angles[0].to_radians();
    [
        Vec2::zeros(),
        Vec2::new(c, 0.0),
        Vec2::new(b * alpha.cos(), b * alpha.sin()),
    ]
}

/// Signed area of the triangle `(p, q, r)`; positive when counterclockwise.
pub fn signed_area(p: Vec2<f64>, q: Vec2<f64>, r: Vec2<f64>) -> f64 {
    0.5 * Matrix2::from_columns(&[q - p, r - p]).determinant()
}
