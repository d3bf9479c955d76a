//! Classification of an input set into one of the congruence cases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which solving rule (or failure) a set of inputs maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Case {
    Underdetermined,
    Sss,
    Sas,
    Ssa,
    Aas,
    Asa,
    Aaa,
    Overdetermined,
}

impl Case {
    /// Classify from kind counts alone.
    ///
    /// `singleton_included` tells whether the odd-kind-out element of a mixed
    /// triple is flagged as lying between the other two; it is ignored otherwise.
    pub fn from_counts(sides: usize, angles: usize, singleton_included: bool) -> Case {
        match (sides, angles) {
            (s, a) if s + a < 3 => Case::Underdetermined,
            (3, 0) => Case::Sss,
            (0, 3) => Case::Aaa,
            (2, 1) if singleton_included => Case::Sas,
            (2, 1) => Case::Ssa,
            (1, 2) if singleton_included => Case::Asa,
            (1, 2) => Case::Aas,
            _ => Case::Overdetermined,
        }
    }

    /// True for the cases that have a solving rule.
    #[inline]
    pub fn is_solvable(self) -> bool {
        matches!(
            self,
            Case::Sss | Case::Sas | Case::Ssa | Case::Asa | Case::Aas
        )
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Case::Underdetermined => "underdetermined",
            Case::Sss => "SSS",
            Case::Sas => "SAS",
            Case::Ssa => "SSA",
            Case::Aas => "AAS",
            Case::Asa => "ASA",
            Case::Aaa => "AAA",
            Case::Overdetermined => "overdetermined",
        };
        f.write_str(s)
    }
}
