//! Triangle resolution engine.
//!
//! Supply up to three measurements of a planar triangle (sides and/or angles),
//! classify which congruence case they form, and solve for the rest.
//!
//! Layout
//! - `measure`: the input set, its adjacency marker, and `Case` classification.
//! - `solve`: SSS/SAS/SSA/ASA/AAS rules and the dispatcher over `measure`.
//! - `geometry`: planar placement of a solved triangle (rendering helper).
//! - `sample`: seeded random triangles for tests and benchmarks.
//!
//! API Policy
//! - Prefer `api` or `prelude` imports; module paths may move.

pub mod api;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod sample;
pub mod solve;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TriangleError;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::TriangleError;
    pub use crate::measure::{Case, Kind, Label, Measurement, MeasurementId, TriangleInputSet};
    pub use crate::solve::{solve, solve_with, SolveCfg, SolveResult, Triangle};
}
