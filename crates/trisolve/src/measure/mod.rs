//! Known measurements of a triangle (the input side of the engine).
//!
//! Purpose
//! - Hold up to three user inputs (sides and/or angles) with stable ids.
//! - Track the "included" marker that tells SAS from SSA and ASA from AAS.
//! - Answer the classification query the resolver dispatches on.
//!
//! Conventions
//! - Sides are unit-less positive reals, angles are degrees in (0, 180).
//! - Values are stored as given; range checks happen at solve time.
//!
//! Code cross-refs: `crate::solve::{solve, SolveResult}`, `crate::error::TriangleError`

mod case;
mod set;
mod types;

pub use case::Case;
pub use set::{TriangleInputSet, MAX_INPUTS};
pub use types::{Kind, Label, Measurement, MeasurementId, ParseLabelError};
