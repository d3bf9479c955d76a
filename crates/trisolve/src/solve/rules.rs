//! The five classical solving rules. Public inputs and outputs are in degrees.
//!
//! Pre (all rules): sides are finite and > 0, angles are finite and in (0, 180).
//! The dispatcher checks this before calling in; direct callers must too.

use super::cfg::SolveCfg;
use super::laws::{angle_from_sides, side_from_sas, side_from_sines};
use crate::error::{Result, TriangleError};

/// One complete SSA branch: the unknown angle opposite the second side,
/// the third angle, and the third side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SsaBranch {
    pub beta: f64,
    pub gamma: f64,
    pub c: f64,
}

/// SSS: angles `(α, β, γ)` opposite sides `(a, b, c)`.
pub fn sss(a: f64, b: f64, c: f64) -> Result<[f64; 3]> {
    if !(a < b + c && b < a + c && c < a + b) {
        return Err(TriangleError::TriangleInequalityViolated { sides: [a, b, c] });
    }
    let alpha = angle_from_sides(b, c, a).to_degrees();
    let beta = angle_from_sides(a, c, b).to_degrees();
    let gamma = angle_from_sides(a, b, c).to_degrees();
    tracing::trace!(alpha, beta, gamma, "sss");
    Ok([alpha, beta, gamma])
}

/// SAS: sides `p`, `q` enclosing `included`.
///
/// Returns `(r, angle opposite p, angle opposite q)`. Both angles come from the
/// law of cosines, which has no acute/obtuse ambiguity.
pub fn sas(p: f64, included: f64, q: f64) -> Result<(f64, f64, f64)> {
    let r = side_from_sas(p, included.to_radians(), q);
    if r <= 0.0 {
        return Err(TriangleError::ImpossibleConstruction);
    }
    let opp_p = angle_from_sides(q, r, p).to_degrees();
    let opp_q = angle_from_sides(p, r, q).to_degrees();
    tracing::trace!(r, opp_p, opp_q, "sas");
    Ok((r, opp_p, opp_q))
}

/// SSA: side `a` opposite the known angle `alpha`, and a second side `b`.
///
/// Returns the first branch and, when both are geometrically valid, the second.
pub fn ssa(a: f64, b: f64, alpha: f64, cfg: SolveCfg) -> Result<(SsaBranch, Option<SsaBranch>)> {
    let alpha_rad = alpha.to_radians();
    let sin_beta = b / a * alpha_rad.sin();
    let branch = |beta: f64| -> Option<SsaBranch> {
        let gamma = 180.0 - alpha - beta;
        if gamma <= cfg.eps_degenerate {
            return None;
        }
        let c = side_from_sines(a, alpha_rad, gamma.to_radians());
        Some(SsaBranch { beta, gamma, c })
    };

    if sin_beta > 1.0 + cfg.eps_unit {
        return Err(TriangleError::ImpossibleConstruction);
    }
    if (sin_beta - 1.0).abs() <= cfg.eps_unit {
        if alpha >= 90.0 {
            return Err(TriangleError::ImpossibleConstruction);
        }
        let first = branch(90.0).ok_or(TriangleError::ImpossibleConstruction)?;
        tracing::trace!(branches = 1, "ssa right-angle boundary");
        return Ok((first, None));
    }

    let beta1 = sin_beta.asin().to_degrees();
    let first = branch(beta1).ok_or(TriangleError::ImpossibleConstruction)?;
    let single = alpha >= 90.0 || b < a || cfg.nearly_equal(a, b);
    let second = if single { None } else { branch(180.0 - beta1) };
    tracing::trace!(branches = 1 + second.is_some() as u8, "ssa");
    Ok((first, second))
}

/// ASA: angles `p`, `q` on either end of `side`.
///
/// Returns `(r, side opposite p, side opposite q)`; `side` is opposite `r`.
pub fn asa(p: f64, side: f64, q: f64) -> Result<(f64, f64, f64)> {
    let r = third_angle(p, q)?;
    let r_rad = r.to_radians();
    let opp_p = side_from_sines(side, r_rad, p.to_radians());
    let opp_q = side_from_sines(side, r_rad, q.to_radians());
    tracing::trace!(r, opp_p, opp_q, "asa");
    Ok((r, opp_p, opp_q))
}

/// AAS: angles `p`, `q` and the side opposite `p`.
///
/// Returns `(r, side opposite q, side opposite r)`.
pub fn aas(p: f64, q: f64, side_opp_p: f64) -> Result<(f64, f64, f64)> {
    let r = third_angle(p, q)?;
    let p_rad = p.to_radians();
    let opp_q = side_from_sines(side_opp_p, p_rad, q.to_radians());
    let opp_r = side_from_sines(side_opp_p, p_rad, r.to_radians());
    tracing::trace!(r, opp_q, opp_r, "aas");
    Ok((r, opp_q, opp_r))
}

fn third_angle(p: f64, q: f64) -> Result<f64> {
    let sum = p + q;
    if sum >= 180.0 {
        return Err(TriangleError::SumOfAnglesExceeds180 { sum });
    }
    Ok(180.0 - sum)
}
