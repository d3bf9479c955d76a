//! Case dispatch: classify the input set, check labels and ranges, run the rule.

use super::cfg::SolveCfg;
use super::rules::{aas, asa, sas, ssa, sss, SsaBranch};
use super::types::{SolveResult, Triangle};
use crate::error::{Result, TriangleError};
use crate::measure::{Case, Kind, Label, Measurement, TriangleInputSet};

/// Solve with default tolerances.
pub fn solve(set: &TriangleInputSet) -> Result<SolveResult> {
    solve_with(set, SolveCfg::default())
}

/// Solve the current inputs of `set`. Pure: `set` is not touched.
pub fn solve_with(set: &TriangleInputSet, cfg: SolveCfg) -> Result<SolveResult> {
    let case = set.classify();
    tracing::debug!(%case, inputs = set.len(), "solve");
    if !case.is_solvable() {
        return Err(unsolvable(case, set.len()));
    }
    for m in set.inputs() {
        check_range(m)?;
    }

    let mut tri = Triangle::default();
    for m in set.inputs() {
        tri.set(m.label, m.value);
    }
    let value = |label: Label| set.input(label).map(|m| m.value);

    let alternate = match case {
        Case::Sss => {
            let [a, b, c] = tri.sides;
            tri.angles = sss(a, b, c)?;
            None
        }
        Case::Sas => {
            let angle = singleton(set, Kind::Angle)?;
            if value(angle.label.opposite()).is_some() {
                return Err(TriangleError::InvalidParameters {
                    reason: "the included angle must lie between the two known sides",
                });
            }
            let (p, q) = neighbours(angle.label.opposite());
            let (r, opp_p, opp_q) = sas(tri.get(p), angle.value, tri.get(q))?;
            tri.set(angle.label.opposite(), r);
            tri.set(p.opposite(), opp_p);
            tri.set(q.opposite(), opp_q);
            None
        }
        Case::Ssa => {
            let angle = singleton(set, Kind::Angle)?;
            let x = angle.label.opposite();
            if value(x).is_none() {
                return Err(TriangleError::InvalidParameters {
                    reason: "SSA needs the side opposite the known angle",
                });
            }
            let y = other_known(set, Kind::Side, x)?;
            let z = third(x, y);
            let (first, second) = ssa(tri.get(x), tri.get(y), angle.value, cfg)?;
            let fill = |mut t: Triangle, br: SsaBranch| {
                t.set(y.opposite(), br.beta);
                t.set(z.opposite(), br.gamma);
                t.set(z, br.c);
                t
            };
            let base = tri;
            tri = fill(base, first);
            second.map(|br| fill(base, br))
        }
        Case::Asa => {
            let side = singleton(set, Kind::Side)?;
            if value(side.label.opposite()).is_some() {
                return Err(TriangleError::InvalidParameters {
                    reason: "the included side must lie between the two known angles",
                });
            }
            let (p, q) = neighbours(side.label.opposite());
            let (r, opp_p, opp_q) = asa(tri.get(p), side.value, tri.get(q))?;
            tri.set(side.label.opposite(), r);
            tri.set(p.opposite(), opp_p);
            tri.set(q.opposite(), opp_q);
            None
        }
        Case::Aas => {
            let side = singleton(set, Kind::Side)?;
            let p = side.label.opposite();
            if value(p).is_none() {
                return Err(TriangleError::InvalidParameters {
                    reason: "AAS needs the angle opposite the known side",
                });
            }
            let q = other_known(set, Kind::Angle, p)?;
            let r = third(p, q);
            let (r_val, opp_q, opp_r) = aas(tri.get(p), tri.get(q), side.value)?;
            tri.set(r, r_val);
            tri.set(q.opposite(), opp_q);
            tri.set(r.opposite(), opp_r);
            None
        }
        Case::Underdetermined | Case::Overdetermined | Case::Aaa => {
            return Err(unsolvable(case, set.len()))
        }
    };

    tracing::debug!(%case, solutions = 1 + usize::from(alternate.is_some()), "solved");
    Ok(SolveResult {
        case,
        primary: tri,
        alternate,
    })
}

fn unsolvable(case: Case, count: usize) -> TriangleError {
    match case {
        Case::Aaa => TriangleError::InfiniteSolutions,
        Case::Underdetermined => TriangleError::InsufficientParameters { count },
        _ => TriangleError::InvalidParameters {
            reason: "more than 3 inputs",
        },
    }
}

fn check_range(m: &Measurement) -> Result<()> {
    let ok = match m.kind() {
        Kind::Side => m.value.is_finite() && m.value > 0.0,
        Kind::Angle => m.value.is_finite() && m.value > 0.0 && m.value < 180.0,
    };
    if ok {
        Ok(())
    } else {
        Err(TriangleError::InvalidValue {
            label: m.label,
            value: m.value,
        })
    }
}

/// The only input of `kind` in a 2+1 triple.
fn singleton(set: &TriangleInputSet, kind: Kind) -> Result<&Measurement> {
    let mut it = set.inputs().iter().filter(|m| m.kind() == kind);
    match (it.next(), it.next()) {
        (Some(m), None) => Ok(m),
        _ => Err(TriangleError::InvalidParameters {
            reason: "expected exactly one input of the odd kind",
        }),
    }
}

/// The known label of `kind` that is not `known`.
fn other_known(set: &TriangleInputSet, kind: Kind, known: Label) -> Result<Label> {
    set.inputs()
        .iter()
        .find(|m| m.kind() == kind && m.label != known)
        .map(|m| m.label)
        .ok_or(TriangleError::InvalidParameters {
            reason: "companion measurement missing",
        })
}

/// The two labels of the same kind as `l`, other than `l`, in slot order.
fn neighbours(l: Label) -> (Label, Label) {
    let s = l.slot();
    let pick = |slot| match l.kind() {
        Kind::Side => Label::side(slot),
        Kind::Angle => Label::angle(slot),
    };
    let (i, j) = ((s + 1) % 3, (s + 2) % 3);
    (pick(i.min(j)), pick(i.max(j)))
}

/// The remaining label of the same kind as `x` and `y`.
fn third(x: Label, y: Label) -> Label {
    let slot = 3 - x.slot() - y.slot();
    match x.kind() {
        Kind::Side => Label::side(slot),
        Kind::Angle => Label::angle(slot),
    }
}
