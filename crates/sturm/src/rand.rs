//! Random polynomials with prescribed real roots (deterministic draws).
//!
//! Purpose
//! - Provide a small, reproducible sampler for test and benchmark inputs
//!   whose true roots are known exactly by construction: the polynomial is
//!   the expanded product of `leading * prod_i (x - r_i)`.
//!
//! Model
//! - Roots start equally spaced on `[-span, span]`, then receive bounded
//!   jitter as a fraction of the base spacing, so they remain distinct and
//!   sorted. Determinism uses a single `StdRng` seeded per draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::poly::Poly;

/// Sampler configuration for [`draw_poly_from_roots`].
#[derive(Clone, Copy, Debug)]
pub struct RootsCfg {
    /// Number of distinct real roots (minimum 1).
    pub n_roots: usize,
    /// Roots are drawn inside `[-span, span]`.
    pub span: f64,
    /// Jitter as a fraction of the base spacing. Clamped to [0, 0.49] so
    /// neighboring roots cannot collide.
    pub jitter_frac: f64,
    /// Leading coefficient of the expanded polynomial.
    pub leading: f64,
}

impl Default for RootsCfg {
    fn default() -> Self {
        Self {
            n_roots: 4,
            span: 5.0,
            jitter_frac: 0.3,
            leading: 1.0,
        }
    }
}

/// Draw a polynomial with known distinct real roots.
///
/// Returns the expanded polynomial and its roots in ascending order.
pub fn draw_poly_from_roots(cfg: &RootsCfg, seed: u64) -> (Poly, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = cfg.n_roots.max(1);
    let gap = 2.0 * cfg.span / n as f64;
    let jitter = cfg.jitter_frac.clamp(0.0, 0.49);
    let mut roots = Vec::with_capacity(n);
    for i in 0..n {
        let base = -cfg.span + (i as f64 + 0.5) * gap;
        let j = if jitter > 0.0 {
            rng.gen_range(-jitter..jitter) * gap
        } else {
            0.0
        };
        roots.push(base + j);
    }
    let mut p = Poly::scalar(cfg.leading);
    for &r in &roots {
        p = &p * &Poly::monomial(-r);
    }
    (p, roots)
}
