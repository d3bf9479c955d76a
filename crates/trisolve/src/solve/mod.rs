//! Triangle resolution: closed-form solving rules and case dispatch.
//!
//! Purpose
//! - Turn a classified `TriangleInputSet` into a complete `Triangle`, or two
//!   for the ambiguous SSA case, or a classified `TriangleError`.
//! - Stay pure: nothing here mutates the input set. Callers write results back
//!   with `SolveResult::record_into`.
//!
//! Conventions
//! - Degrees at the boundary, radians inside `laws`.
//! - SAS recovers its angles with the law of cosines; SSA/ASA/AAS scale sides
//!   with the law of sines.
//! - Near-degenerate SSS inputs are kept solvable by clamping the cosine.
//!
//! Code cross-refs: `crate::measure::{TriangleInputSet, Case}`, `cfg::SolveCfg`

mod cfg;
mod dispatch;
mod laws;
pub mod rules;
mod types;

pub use cfg::SolveCfg;
pub use dispatch::{solve, solve_with};
pub use rules::SsaBranch;
pub use types::{SolveResult, Triangle};

#[cfg(test)]
mod tests;
