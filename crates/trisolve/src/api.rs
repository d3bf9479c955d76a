//! Curated surface for collaborators (UI layers, the CLI).
//!
//! Everything a caller needs to drive the engine: build a `TriangleInputSet`,
//! classify it, solve it, record the result, and place it for drawing.

// Inputs and classification
pub use crate::measure::{
    Case, Kind, Label, Measurement, MeasurementId, ParseLabelError, TriangleInputSet, MAX_INPUTS,
};
// Resolution
pub use crate::solve::rules::{aas, asa, sas, ssa, sss};
pub use crate::solve::{solve, solve_with, SolveCfg, SolveResult, SsaBranch, Triangle};
// Errors
pub use crate::error::{Result, TriangleError};
// Rendering helpers
pub use crate::geometry::{place_vertices, signed_area};
pub use crate::Vec2;
// Sampling
pub use crate::sample::{
    draw_triangle, ReplayToken as TriangleReplay, TriangleCfg as SampleCfg,
};
