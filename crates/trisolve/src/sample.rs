//! Random valid triangles (uniform angles + scale, replay tokens).
//!
//! Purpose
//! - Deterministic sampler for property tests and benchmarks.
//!
//! Model
//! - Draw α, then β, from ranges that keep every angle above `min_angle`;
//!   γ closes the sum. Draw side `c` from `c_range`, the other two sides follow
//!   from the law of sines.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::solve::Triangle;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Lower bound for every angle, degrees. Clamped to [0.01, 59].
    pub min_angle: f64,
    /// Range for side `c`.
    pub c_range: (f64, f64),
}

impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            min_angle: 5.0,
            c_range: (0.5, 10.0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw one valid triangle.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    let m = cfg.min_angle.clamp(0.01, 59.0);
    let alpha = rng.gen_range(m..=180.0 - 2.0 * m);
    let beta = rng.gen_range(m..=180.0 - alpha - m);
    let gamma = 180.0 - alpha - beta;
    let (lo, hi) = cfg.c_range;
    let lo = lo.max(1e-9);
    let c = if hi > lo { rng.gen_range(lo..hi) } else { lo };
    let k = c / gamma.to_radians().sin();
    Triangle {
        sides: [k * alpha.to_radians().sin(), k * beta.to_radians().sin(), c],
        angles: [alpha, beta, gamma],
    }
}
