//! Tolerances for the closed-form rules.
//!
//! Policy
//! - Defaults are fixed constants; `SolveCfg` exists for callers that need to
//!   loosen or tighten a check without touching call sites.

/// Band around 1 inside which `sin β` counts as exactly 1 (right-angle boundary).
pub(crate) const UNIT_EPS: f64 = 1e-12;
/// Relative tolerance for "the two known sides are equal" in SSA.
pub(crate) const EQUAL_EPS: f64 = 1e-12;
/// Smallest angle (degrees) a solved triangle may carry before it counts as degenerate.
pub(crate) const DEGENERATE_EPS_DEG: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveCfg {
    pub eps_unit: f64,
    pub eps_equal: f64,
    pub eps_degenerate: f64,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            eps_unit: UNIT_EPS,
            eps_equal: EQUAL_EPS,
            eps_degenerate: DEGENERATE_EPS_DEG,
        }
    }
}

impl SolveCfg {
    /// `x == y` up to `eps_equal` relative to the larger magnitude.
    #[inline]
    pub fn nearly_equal(&self, x: f64, y: f64) -> bool {
        (x - y).abs() <= self.eps_equal * x.abs().max(y.abs())
    }
}
