//! Solved triangles and solve results.

use serde::{Deserialize, Serialize};

use crate::measure::{Case, Kind, Label, TriangleInputSet};

/// All six measurements of a triangle: sides `(a, b, c)` and angles `(α, β, γ)` in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub sides: [f64; 3],
    pub angles: [f64; 3],
}

impl Triangle {
    #[inline]
    pub fn get(&self, label: Label) -> f64 {
        match label.kind() {
            Kind::Side => self.sides[label.slot()],
            Kind::Angle => self.angles[label.slot()],
        }
    }

    #[inline]
    pub fn set(&mut self, label: Label, value: f64) {
        match label.kind() {
            Kind::Side => self.sides[label.slot()] = value,
            Kind::Angle => self.angles[label.slot()] = value,
        }
    }

    /// `(label, value)` for all six slots, sides first.
    pub fn measurements(&self) -> impl Iterator<Item = (Label, f64)> + '_ {
        Label::SIDES
            .into_iter()
            .chain(Label::ANGLES)
            .map(move |l| (l, self.get(l)))
    }

    #[inline]
    pub fn angle_sum(&self) -> f64 {
        self.angles.iter().sum()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

/// Outcome of a successful solve. Immutable; discard it when the inputs change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub case: Case,
    pub primary: Triangle,
    /// Second complete solution; only the ambiguous SSA case produces one.
    pub alternate: Option<Triangle>,
}

impl SolveResult {
    pub fn branches(&self) -> impl Iterator<Item = &Triangle> {
        std::iter::once(&self.primary).chain(self.alternate.as_ref())
    }

    #[inline]
    pub fn solution_count(&self) -> usize {
        1 + usize::from(self.alternate.is_some())
    }

    /// Write every non-input slot of each branch into `set` as derived values.
    ///
    /// Existing derived labels are updated in place; a stale second branch is dropped.
    pub fn record_into(&self, set: &mut TriangleInputSet) {
        for (branch, tri) in self.branches().enumerate() {
            for (label, value) in tri.measurements() {
                if set.input(label).is_none() {
                    set.upsert_derived(label, branch, value);
                }
            }
        }
        if self.alternate.is_none() {
            set.drop_branch(1);
        }
    }
}
