//! Sturm sequence construction and root bookkeeping.
//!
//! Purpose
//! - `Sequence` owns the squarefree Sturm chain `p_0 .. p_k` built from an
//!   input polynomial, plus the isolation results: the bounds last used, the
//!   finalized intervals, and the refined root values (one per interval, in
//!   the same order).
//!
//! Lifecycle
//! - Built once via [`Sequence::build`]; `separate_roots` may be called
//!   repeatedly with different bounds, replacing prior intervals (and
//!   clearing stale refined roots); `refine_roots` fills the parallel root
//!   vector.
//!
//! Chain recurrence
//! - `p_0 = p`, `p_1 = p'`, `p_{i+1} = -rem(p_{i-1}, p_i)` until the
//!   remainder vanishes. The final element is (up to scale) `gcd(p, p')`;
//!   dividing it out of every element makes the variation differences count
//!   *distinct* real roots instead of roots-with-multiplicity.

use std::fmt::{self, Display, Formatter};

use crate::error::Error;
use crate::poly::{divide, Poly};

mod isolate;
mod refine;
mod types;

pub use types::{Interval, SturmCfg};


/// Squarefree Sturm chain with isolation and refinement state.
#[derive(Clone, Debug)]
pub struct Sequence {
    cfg: SturmCfg,
    chain: Vec<Poly>,
    intervals: Vec<Interval>,
    roots: Vec<f64>,
    unconverged: Vec<usize>,
    a: f64,
    b: f64,
}

impl Sequence {
    /// Build the Sturm chain for `p` with default tolerances.
    pub fn build(p: &Poly) -> Result<Self, Error> {
        Self::build_with_cfg(p, SturmCfg::default())
    }

    /// Build the Sturm chain for `p`.
    ///
    /// Fails fast on an empty input ([`Error::EmptyPolynomial`]) or a
    /// constant one ([`Error::ConstantPolynomial`]); pseudo-division errors
    /// from a structurally degenerate chain propagate unchanged.
    pub fn build_with_cfg(p: &Poly, cfg: SturmCfg) -> Result<Self, Error> {
        let mut p0 = p.clone();
        p0.adjust_degree();
        if p0.is_empty() {
            return Err(Error::EmptyPolynomial);
        }
        if p0.order() == 1 {
            return Err(Error::ConstantPolynomial);
        }

        let mut chain = Vec::with_capacity(p0.order());
        let mut p1 = p0.derivative();
        p1.adjust_degree();
        chain.push(p0);
        chain.push(p1);
        loop {
            let n = chain.len();
            let (_q, r) = divide(&chain[n - 2], &chain[n - 1])?;
            if r.order() == 0 {
                break;
            }
            chain.push(-r);
        }

        // The last element is (up to scale) gcd(p, p'). Divide it out of
        // every earlier element so the chain is squarefree-adjusted, then pin
        // the last element to the constant 1.
        let last = chain.len() - 1;
        let g = chain[last].clone();
        for item in chain.iter_mut().take(last) {
            let (mut q, _r) = divide(item, &g)?;
            q.normalize();
            *item = q;
        }
        chain[last] = Poly::scalar(1.0);

        Ok(Self {
            cfg,
            chain,
            intervals: Vec::new(),
            roots: Vec::new(),
            unconverged: Vec::new(),
            a: 0.0,
            b: 0.0,
        })
    }

    /// Number of polynomials in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// `i`-th polynomial of the chain (`0` is the squarefree-adjusted input).
    #[inline]
    pub fn get(&self, i: usize) -> &Poly {
        &self.chain[i]
    }

    /// Lower bound last used for isolation.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound last used for isolation.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Finalized isolating intervals, sorted by lower bound.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of isolated roots (one per interval).
    #[inline]
    pub fn roots_count(&self) -> usize {
        self.intervals.len()
    }

    /// Refined root values, parallel to [`Sequence::intervals`]. Empty until
    /// `refine_roots` runs.
    #[inline]
    pub fn roots(&self) -> &[f64] {
        &self.roots
    }

    /// Indices of intervals whose refinement did not converge; the root
    /// estimate at those indices is the solver's best guess.
    #[inline]
    pub fn unconverged(&self) -> &[usize] {
        &self.unconverged
    }

    /// Cauchy bound `1 + max_abs / |leading|` of the chain's first
    /// polynomial: every real root lies in `[-bound, bound]`.
    pub fn cauchy_bound(&self) -> f64 {
        let p = &self.chain[0];
        1.0 + p.max_abs_coeff() / p.leading_coeff().abs()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sturm sequence")?;
        for (i, p) in self.chain.iter().enumerate() {
            writeln!(f, "P_{i}(x) = {p}")?;
        }
        if !self.intervals.is_empty() {
            writeln!(f, "roots separation for interval [{},{}]", self.a, self.b)?;
            for iv in &self.intervals {
                writeln!(
                    f,
                    "I = [{}, {}], V = [{}, {}]",
                    iv.a, iv.b, iv.va, iv.vb
                )?;
            }
        }
        Ok(())
    }
}
