use super::*;
use crate::error::TriangleError;
use crate::measure::{Case, Kind, Label, MeasurementId, TriangleInputSet};
use crate::sample::{draw_triangle, ReplayToken, TriangleCfg};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

fn set_of(entries: &[(Label, f64)]) -> (TriangleInputSet, Vec<MeasurementId>) {
    let mut set = TriangleInputSet::new();
    let ids = entries
        .iter()
        .map(|&(label, value)| set.add(label.kind(), label, value).unwrap())
        .collect();
    (set, ids)
}

/// Triangle with angles (α, β, 180-α-β) and side `c`, sides via law of sines.
fn from_angles(alpha: f64, beta: f64, c: f64) -> Triangle {
    let gamma = 180.0 - alpha - beta;
    let k = c / gamma.to_radians().sin();
    Triangle {
        sides: [k * alpha.to_radians().sin(), k * beta.to_radians().sin(), c],
        angles: [alpha, beta, gamma],
    }
}

fn assert_close(x: f64, y: f64, tol: f64) {
    assert!((x - y).abs() <= tol * y.abs().max(1.0), "{x} vs {y}");
}

fn assert_consistent(t: &Triangle) {
    assert_close(t.angle_sum(), 180.0, 1e-9);
    let [a, b, c] = t.sides;
    let [alpha, beta, gamma] = t.angles.map(f64::to_radians);
    // law of sines: all ratios agree
    assert_close(a / alpha.sin(), b / beta.sin(), 1e-9);
    assert_close(b / beta.sin(), c / gamma.sin(), 1e-9);
}

#[test]
fn sss_right_triangle() {
    let (set, _) = set_of(&[(Label::A, 3.0), (Label::B, 4.0), (Label::C, 5.0)]);
    let res = solve(&set).unwrap();
    assert_eq!(res.case, Case::Sss);
    assert!(res.alternate.is_none());
    assert_close(res.primary.get(Label::Gamma), 90.0, TOL);
    assert_close(res.primary.get(Label::Alpha), (0.6f64).asin().to_degrees(), TOL);
    assert_consistent(&res.primary);
}

#[test]
fn sss_rejects_inequality_violation() {
    let (set, _) = set_of(&[(Label::A, 5.0), (Label::B, 5.0), (Label::C, 15.0)]);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::TriangleInequalityViolated { .. })
    ));
    // Equality is degenerate, not a triangle.
    assert!(rules::sss(5.0, 5.0, 10.0).is_err());
}

#[test]
fn sss_near_degenerate_is_solvable() {
    let angles = rules::sss(1.0, 1.0, 2.0 - 1e-12).unwrap();
    assert!(angles.iter().all(|a| a.is_finite()));
    assert_close(angles.iter().sum::<f64>(), 180.0, 1e-6);
}

#[test]
fn sas_recovers_hypotenuse() {
    let (set, ids) = set_of(&[(Label::A, 3.0), (Label::B, 4.0), (Label::Gamma, 90.0)]);
    assert_eq!(set.flagged().map(|m| m.id), Some(ids[2]));
    let res = solve(&set).unwrap();
    assert_eq!(res.case, Case::Sas);
    assert_close(res.primary.get(Label::C), 5.0, TOL);
    assert_close(res.primary.get(Label::Beta), (0.8f64).asin().to_degrees(), TOL);
    assert_consistent(&res.primary);
}

#[test]
fn sas_obtuse_angle_is_recovered() {
    // b=1, c=1, α=120 → a=√3, β=γ=30; the remaining angles stay acute.
    let (set, _) = set_of(&[(Label::B, 1.0), (Label::Alpha, 120.0), (Label::C, 1.0)]);
    let res = solve(&set).unwrap();
    assert_close(res.primary.get(Label::A), 3f64.sqrt(), TOL);
    assert_close(res.primary.get(Label::Beta), 30.0, 1e-9);

    // a=1, b=1, γ=30 → α=β=75.
    let (r, opp_p, opp_q) = rules::sas(1.0, 30.0, 1.0).unwrap();
    assert!(r > 0.0);
    assert_close(opp_p, 75.0, 1e-9);
    assert_close(opp_q, 75.0, 1e-9);
}

#[test]
fn sas_rejects_non_included_angle() {
    // α is opposite a, so it cannot lie between a and b.
    let (set, _) = set_of(&[(Label::A, 3.0), (Label::B, 4.0), (Label::Alpha, 30.0)]);
    assert_eq!(set.classify(), Case::Sas);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidParameters { .. })
    ));
}

#[test]
fn ssa_two_branches() {
    let (mut set, ids) = set_of(&[(Label::A, 10.0), (Label::B, 14.0), (Label::Alpha, 30.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    let res = solve(&set).unwrap();
    assert_eq!(res.case, Case::Ssa);
    assert_eq!(res.solution_count(), 2);
    let alt = res.alternate.unwrap();
    let beta1 = (0.7f64).asin().to_degrees();
    assert_close(res.primary.get(Label::Beta), beta1, TOL);
    assert_close(alt.get(Label::Beta), 180.0 - beta1, TOL);
    assert_close(alt.get(Label::Gamma), beta1 - 30.0, TOL);
    for t in res.branches() {
        assert_consistent(t);
        assert_eq!(t.get(Label::A), 10.0);
        assert_eq!(t.get(Label::B), 14.0);
    }
    assert!(res.primary.get(Label::C) > alt.get(Label::C));
}

#[test]
fn ssa_single_branch_when_known_side_is_longer() {
    let (mut set, ids) = set_of(&[(Label::A, 14.0), (Label::B, 10.0), (Label::Alpha, 30.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    let res = solve(&set).unwrap();
    assert_eq!(res.solution_count(), 1);
    assert_consistent(&res.primary);
}

#[test]
fn ssa_single_branch_for_equal_sides_and_obtuse_angle() {
    let cfg = SolveCfg::default();
    let (iso, second) = rules::ssa(5.0, 5.0, 40.0, cfg).unwrap();
    assert!(second.is_none());
    assert_close(iso.beta, 40.0, 1e-9);
    assert_close(iso.gamma, 100.0, 1e-9);

    let (obtuse, second) = rules::ssa(10.0, 6.0, 120.0, cfg).unwrap();
    assert!(second.is_none());
    assert!(obtuse.gamma > 0.0);
}

#[test]
fn ssa_right_angle_boundary() {
    let cfg = SolveCfg::default();
    let (br, second) = rules::ssa(5.0, 10.0, 30.0, cfg).unwrap();
    assert!(second.is_none());
    assert_close(br.beta, 90.0, TOL);
    assert_close(br.gamma, 60.0, TOL);
    assert_close(br.c, 75f64.sqrt(), 1e-9);
    assert_eq!(
        rules::ssa(5.0, 5.0, 90.0, cfg),
        Err(TriangleError::ImpossibleConstruction)
    );
}

#[test]
fn ssa_impossible_constructions() {
    let cfg = SolveCfg::default();
    assert_eq!(
        rules::ssa(5.0, 14.0, 30.0, cfg),
        Err(TriangleError::ImpossibleConstruction)
    );
    // Obtuse known angle opposite the shorter side.
    assert_eq!(
        rules::ssa(10.0, 11.0, 120.0, cfg),
        Err(TriangleError::ImpossibleConstruction)
    );
}

#[test]
fn ssa_requires_side_opposite_angle() {
    // γ is opposite the unknown side c: nothing to solve SSA from.
    let (mut set, ids) = set_of(&[(Label::A, 3.0), (Label::B, 4.0), (Label::Gamma, 50.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    assert_eq!(set.classify(), Case::Ssa);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidParameters { .. })
    ));
}

#[test]
fn asa_rejects_side_opposite_known_angle() {
    // a is opposite α, so it cannot lie between α and β.
    let (set, ids) = set_of(&[(Label::Alpha, 40.0), (Label::Beta, 60.0), (Label::A, 3.0)]);
    assert_eq!(set.flagged().map(|m| m.id), Some(ids[2]));
    assert_eq!(set.classify(), Case::Asa);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidParameters { .. })
    ));
}

#[test]
fn aas_requires_angle_opposite_side() {
    // c is opposite the unknown γ: no known angle faces the known side.
    let (mut set, ids) = set_of(&[(Label::Alpha, 40.0), (Label::Beta, 60.0), (Label::C, 3.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    assert_eq!(set.classify(), Case::Aas);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidParameters { .. })
    ));
}

#[test]
fn equilateral_at_extreme_scales() {
    for s in [1e160, 1e-170] {
        let (set, _) = set_of(&[(Label::A, s), (Label::B, s), (Label::C, s)]);
        let res = solve(&set).unwrap();
        for angle in res.primary.angles {
            assert_close(angle, 60.0, 1e-9);
        }

        let (set, _) = set_of(&[(Label::A, s), (Label::Gamma, 60.0), (Label::B, s)]);
        let res = solve(&set).unwrap();
        assert!(((res.primary.get(Label::C) - s) / s).abs() < 1e-9, "s={s}");
        assert_close(res.primary.get(Label::Alpha), 60.0, 1e-9);
        assert_close(res.primary.get(Label::Beta), 60.0, 1e-9);
    }
}

#[test]
fn asa_equilateral() {
    let (set, _) = set_of(&[(Label::Alpha, 60.0), (Label::C, 2.0), (Label::Beta, 60.0)]);
    let res = solve(&set).unwrap();
    assert_eq!(res.case, Case::Asa);
    for l in Label::SIDES {
        assert_close(res.primary.get(l), 2.0, TOL);
    }
    assert_close(res.primary.get(Label::Gamma), 60.0, TOL);
}

#[test]
fn aas_thirty_sixty_ninety() {
    let (mut set, ids) = set_of(&[(Label::Alpha, 30.0), (Label::Beta, 60.0), (Label::A, 1.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    let res = solve(&set).unwrap();
    assert_eq!(res.case, Case::Aas);
    assert_close(res.primary.get(Label::B), 3f64.sqrt(), TOL);
    assert_close(res.primary.get(Label::C), 2.0, TOL);
    assert_close(res.primary.get(Label::Gamma), 90.0, TOL);
}

#[test]
fn angle_sum_must_stay_below_180() {
    let (set, _) = set_of(&[(Label::Alpha, 100.0), (Label::Beta, 90.0), (Label::C, 3.0)]);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::SumOfAnglesExceeds180 { .. })
    ));
    let (mut set, ids) = set_of(&[(Label::Alpha, 100.0), (Label::Beta, 90.0), (Label::A, 3.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    assert!(matches!(
        solve(&set),
        Err(TriangleError::SumOfAnglesExceeds180 { .. })
    ));
    assert!(rules::aas(90.0, 90.0, 1.0).is_err());
}

#[test]
fn three_angles_have_infinite_solutions() {
    let (set, _) = set_of(&[
        (Label::Alpha, 60.0),
        (Label::Beta, 60.0),
        (Label::Gamma, 60.0),
    ]);
    assert_eq!(solve(&set), Err(TriangleError::InfiniteSolutions));
}

#[test]
fn too_few_inputs() {
    let (set, _) = set_of(&[(Label::A, 3.0), (Label::Beta, 40.0)]);
    assert_eq!(
        solve(&set),
        Err(TriangleError::InsufficientParameters { count: 2 })
    );
    assert_eq!(
        solve(&TriangleInputSet::new()),
        Err(TriangleError::InsufficientParameters { count: 0 })
    );
}

#[test]
fn out_of_range_values_fail_at_solve_time() {
    let mut set = TriangleInputSet::new();
    set.add(Kind::Side, Label::A, -3.0).unwrap();
    set.add(Kind::Side, Label::B, 4.0).unwrap();
    set.add(Kind::Side, Label::C, 5.0).unwrap();
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidValue { label: Label::A, .. })
    ));
    let (set, _) = set_of(&[(Label::A, 3.0), (Label::Gamma, 180.0), (Label::B, 4.0)]);
    assert!(matches!(
        solve(&set),
        Err(TriangleError::InvalidValue { label: Label::Gamma, .. })
    ));
}

#[test]
fn record_into_writes_and_updates_derived() {
    let (mut set, ids) = set_of(&[(Label::A, 10.0), (Label::B, 14.0), (Label::Alpha, 30.0)]);
    set.set_adjacent(ids[2], false).unwrap();
    let res = solve(&set).unwrap();
    res.record_into(&mut set);
    // 3 unknown slots per branch.
    assert_eq!(set.derived().len(), 6);
    assert_eq!(set.len(), 3);
    let gamma_id = set
        .derived()
        .iter()
        .find(|m| m.label == Label::Gamma && m.branch == Some(0))
        .map(|m| m.id)
        .unwrap();

    // Re-recording the same result keeps ids.
    res.record_into(&mut set);
    assert_eq!(set.derived().len(), 6);
    assert!(set.get(gamma_id).is_some());

    // A single-branch result drops the stale second branch.
    let single = SolveResult {
        alternate: None,
        ..res
    };
    single.record_into(&mut set);
    assert_eq!(set.derived().len(), 3);
    assert!(set.derived().iter().all(|m| m.branch == Some(0)));
}

#[test]
fn failed_solve_leaves_set_untouched() {
    let (set, _) = set_of(&[(Label::A, 5.0), (Label::B, 5.0), (Label::C, 15.0)]);
    let before = set.inputs().to_vec();
    assert!(solve(&set).is_err());
    assert_eq!(set.inputs(), before.as_slice());
    assert!(set.derived().is_empty());
}

#[test]
fn ssa_sampled_triangles_are_among_branches() {
    let cfg = TriangleCfg::default();
    for index in 0..200 {
        let t = draw_triangle(cfg, ReplayToken { seed: 7, index });
        let (a, b, alpha) = (t.sides[0], t.sides[1], t.angles[0]);
        let Ok((first, second)) = rules::ssa(a, b, alpha, SolveCfg::default()) else {
            panic!("sampled triangle must be SSA-solvable: {t:?}");
        };
        let hit = std::iter::once(first)
            .chain(second)
            .any(|br| (br.c - t.sides[2]).abs() <= 1e-6 * t.sides[2]);
        assert!(hit, "original not recovered for {t:?}");
    }
}

proptest! {
    #[test]
    fn sss_angles_sum_to_180(alpha in 1.0f64..170.0, frac in 0.0f64..1.0, c in 0.1f64..100.0) {
        let beta = 1.0 + frac * (176.0 - alpha);
        let t = from_angles(alpha, beta, c);
        let angles = rules::sss(t.sides[0], t.sides[1], t.sides[2]).unwrap();
        prop_assert!((angles.iter().sum::<f64>() - 180.0).abs() < 1e-6);
        for (got, want) in angles.iter().zip(t.angles) {
            prop_assert!((got - want).abs() < 1e-6);
        }
    }

    #[test]
    fn sss_then_sas_round_trip(alpha in 1.0f64..170.0, frac in 0.0f64..1.0, c in 0.1f64..100.0) {
        let beta = 1.0 + frac * (176.0 - alpha);
        let t = from_angles(alpha, beta, c);
        let (sss_set, _) = set_of(&[
            (Label::A, t.sides[0]),
            (Label::B, t.sides[1]),
            (Label::C, t.sides[2]),
        ]);
        let solved = solve(&sss_set).unwrap().primary;
        let (sas_set, _) = set_of(&[
            (Label::A, solved.sides[0]),
            (Label::Gamma, solved.angles[2]),
            (Label::B, solved.sides[1]),
        ]);
        let back = solve(&sas_set).unwrap().primary;
        prop_assert!((back.sides[2] - t.sides[2]).abs() <= 1e-6 * t.sides[2]);
    }
}
