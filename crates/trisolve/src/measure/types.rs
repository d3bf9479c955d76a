//! Measurement data: kinds, the six canonical labels, identifiers.
//!
//! Convention: side `a` is opposite angle `α`, `b` opposite `β`, `c` opposite `γ`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length or interior angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Side,
    Angle,
}

/// One of the six canonical slots of a triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    A,
    B,
    C,
    Alpha,
    Beta,
    Gamma,
}

impl Label {
    pub const SIDES: [Label; 3] = [Label::A, Label::B, Label::C];
    pub const ANGLES: [Label; 3] = [Label::Alpha, Label::Beta, Label::Gamma];

    #[inline]
    pub fn kind(self) -> Kind {
        match self {
            Label::A | Label::B | Label::C => Kind::Side,
            Label::Alpha | Label::Beta | Label::Gamma => Kind::Angle,
        }
    }

    /// Slot index within its kind: `a`/`α` → 0, `b`/`β` → 1, `c`/`γ` → 2.
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            Label::A | Label::Alpha => 0,
            Label::B | Label::Beta => 1,
            Label::C | Label::Gamma => 2,
        }
    }

    /// The element across the triangle: side ↔ opposite angle.
    #[inline]
    pub fn opposite(self) -> Label {
        match self {
            Label::A => Label::Alpha,
            Label::B => Label::Beta,
            Label::C => Label::Gamma,
            Label::Alpha => Label::A,
            Label::Beta => Label::B,
            Label::Gamma => Label::C,
        }
    }

    #[inline]
    pub fn side(slot: usize) -> Label {
        Self::SIDES[slot % 3]
    }

    #[inline]
    pub fn angle(slot: usize) -> Label {
        Self::ANGLES[slot % 3]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Label::A => "a",
            Label::B => "b",
            Label::C => "c",
            Label::Alpha => "α",
            Label::Beta => "β",
            Label::Gamma => "γ",
        };
        f.write_str(s)
    }
}

/// Error returned when a label string is none of the six slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLabelError(pub String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown triangle label `{}`", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

impl FromStr for Label {
    type Err = ParseLabelError;

    /// Accepts `a`, `b`, `c` and the angle names spelled out or as Greek letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(Label::A),
            "b" => Ok(Label::B),
            "c" => Ok(Label::C),
            "alpha" | "α" => Ok(Label::Alpha),
            "beta" | "β" => Ok(Label::Beta),
            "gamma" | "γ" => Ok(Label::Gamma),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

/// Stable identifier of a measurement inside one `TriangleInputSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementId(pub u64);

impl fmt::Display for MeasurementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One known or derived fact about the triangle.
///
/// Invariants:
/// - `included` is only ever true on an input while the set holds exactly
///   3 inputs of mixed kind.
/// - `branch` is `None` for inputs, `Some(0 | 1)` for derived values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: MeasurementId,
    pub label: Label,
    pub value: f64,
    pub included: bool,
    pub branch: Option<usize>,
}

impl Measurement {
    #[inline]
    pub fn kind(&self) -> Kind {
        self.label.kind()
    }
    #[inline]
    pub fn is_input(&self) -> bool {
        self.branch.is_none()
    }
}
