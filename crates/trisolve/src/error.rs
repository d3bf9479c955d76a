//! Error taxonomy shared by the input set and the resolver.
//!
//! Errors are plain values; callers map them to user-facing text.

use thiserror::Error;

use crate::measure::{Label, MeasurementId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangleError {
    #[error("fewer than 3 inputs ({count}) at solve time")]
    InsufficientParameters { count: usize },
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: &'static str },
    #[error("{label} = {value} is outside its valid range")]
    InvalidValue { label: Label, value: f64 },
    #[error("sides {sides:?} violate the strict triangle inequality")]
    TriangleInequalityViolated { sides: [f64; 3] },
    #[error("three angles fix the shape but not the scale")]
    InfiniteSolutions,
    #[error("the two known angles sum to {sum}°, which is not below 180°")]
    SumOfAnglesExceeds180 { sum: f64 },
    #[error("no triangle can be constructed from the given sides and angle")]
    ImpossibleConstruction,
    #[error("label {0} is already present among the inputs")]
    DuplicateLabel(Label),
    #[error("the input set already holds 3 measurements")]
    CapacityExceeded,
    #[error("the included flag needs exactly 3 inputs of mixed kind")]
    InvalidFlagContext,
    #[error("no input measurement with id {0}")]
    UnknownMeasurement(MeasurementId),
}

pub type Result<T> = std::result::Result<T, TriangleError>;
