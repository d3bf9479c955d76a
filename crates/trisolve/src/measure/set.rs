//! `TriangleInputSet`: up to three user inputs plus derived values from solves.
//!
//! Invariants:
//! - At most 3 inputs, no two sharing a label.
//! - At most one input has `included == true`, and only while there are
//!   exactly 3 inputs of mixed kind.
//! - Derived entries belong to the current inputs; any input mutation drops them.

use super::case::Case;
use super::types::{Kind, Label, Measurement, MeasurementId};
use crate::error::{Result, TriangleError};

/// Maximum number of user-supplied measurements.
pub const MAX_INPUTS: usize = 3;

#[derive(Clone, Debug, Default)]
pub struct TriangleInputSet {
    inputs: Vec<Measurement>,
    derived: Vec<Measurement>,
    next_id: u64,
}

impl TriangleInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input. Values are not range-checked here; the resolver does that.
    pub fn add(&mut self, kind: Kind, label: Label, value: f64) -> Result<MeasurementId> {
        if label.kind() != kind {
            return Err(TriangleError::InvalidParameters {
                reason: "label does not name a measurement of the given kind",
            });
        }
        if self.input(label).is_some() {
            return Err(TriangleError::DuplicateLabel(label));
        }
        if self.inputs.len() >= MAX_INPUTS {
            return Err(TriangleError::CapacityExceeded);
        }
        let id = self.fresh_id();
        self.inputs.push(Measurement {
            id,
            label,
            value,
            included: false,
            branch: None,
        });
        self.derived.clear();
        self.refresh_included();
        Ok(id)
    }

    /// Remove an input or a derived entry; unknown ids are ignored.
    pub fn remove(&mut self, id: MeasurementId) {
        if let Some(pos) = self.inputs.iter().position(|m| m.id == id) {
            self.inputs.remove(pos);
            self.derived.clear();
            self.refresh_included();
        } else if let Some(pos) = self.derived.iter().position(|m| m.id == id) {
            self.derived.remove(pos);
        }
    }

    /// Drop every input and derived value. Ids keep increasing.
    pub fn clear(&mut self) {
        self.inputs.clear();
        self.derived.clear();
    }

    /// Mark (or unmark) an input as the element between the other two.
    ///
    /// Marking one input clears the mark on all others.
    pub fn set_adjacent(&mut self, id: MeasurementId, included: bool) -> Result<()> {
        if !self.is_mixed_triple() {
            return Err(TriangleError::InvalidFlagContext);
        }
        if !self.inputs.iter().any(|m| m.id == id) {
            return Err(TriangleError::UnknownMeasurement(id));
        }
        for m in &mut self.inputs {
            if m.id == id {
                m.included = included;
            } else if included {
                m.included = false;
            }
        }
        Ok(())
    }

    pub fn classify(&self) -> Case {
        let (sides, angles) = self.counts();
        let singleton = match (sides, angles) {
            (2, 1) => Some(Kind::Angle),
            (1, 2) => Some(Kind::Side),
            _ => None,
        };
        let singleton_included = singleton.is_some_and(|kind| {
            self.inputs
                .iter()
                .any(|m| m.kind() == kind && m.included)
        });
        Case::from_counts(sides, angles, singleton_included)
    }

    /// Record a derived value; an existing entry for `(label, branch)` is updated in place.
    pub fn upsert_derived(&mut self, label: Label, branch: usize, value: f64) -> MeasurementId {
        if let Some(m) = self
            .derived
            .iter_mut()
            .find(|m| m.label == label && m.branch == Some(branch))
        {
            m.value = value;
            return m.id;
        }
        let id = self.fresh_id();
        self.derived.push(Measurement {
            id,
            label,
            value,
            included: false,
            branch: Some(branch),
        });
        id
    }

    /// Drop derived entries of the given branch (e.g. a second SSA branch that vanished).
    pub fn drop_branch(&mut self, branch: usize) {
        self.derived.retain(|m| m.branch != Some(branch));
    }

    #[inline]
    pub fn inputs(&self) -> &[Measurement] {
        &self.inputs
    }
    #[inline]
    pub fn derived(&self) -> &[Measurement] {
        &self.derived
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Input or derived measurement by id.
    pub fn get(&self, id: MeasurementId) -> Option<&Measurement> {
        self.inputs
            .iter()
            .chain(self.derived.iter())
            .find(|m| m.id == id)
    }

    /// Input carrying `label`, if any.
    pub fn input(&self, label: Label) -> Option<&Measurement> {
        self.inputs.iter().find(|m| m.label == label)
    }

    /// The input currently marked as included.
    pub fn flagged(&self) -> Option<&Measurement> {
        self.inputs.iter().find(|m| m.included)
    }

    /// (number of side inputs, number of angle inputs)
    pub fn counts(&self) -> (usize, usize) {
        let sides = self
            .inputs
            .iter()
            .filter(|m| m.kind() == Kind::Side)
            .count();
        (sides, self.inputs.len() - sides)
    }

    fn is_mixed_triple(&self) -> bool {
        let (sides, angles) = self.counts();
        sides + angles == MAX_INPUTS && sides > 0 && angles > 0
    }

    /// Re-apply the automatic flag: in a mixed triple the odd-kind-out element
    /// is marked; otherwise no input is marked.
    fn refresh_included(&mut self) {
        if !self.is_mixed_triple() {
            for m in &mut self.inputs {
                m.included = false;
            }
            return;
        }
        let singleton = match self.counts() {
            (1, _) => Kind::Side,
            _ => Kind::Angle,
        };
        for m in &mut self.inputs {
            m.included = m.kind() == singleton;
        }
    }

    fn fresh_id(&mut self) -> MeasurementId {
        let id = MeasurementId(self.next_id);
        self.next_id += 1;
        id
    }
}
