//! Data types for the Sturm chain: isolation records and tolerances.
//!
//! Kept small and explicit to make `isolate` and `refine` easy to read.

/// Tolerance configuration for root isolation.
///
/// The threshold is *relative*: it is scaled by operand magnitude at the
/// point of use, never applied as an absolute constant.
#[derive(Clone, Copy, Debug)]
pub struct SturmCfg {
    /// An interval of width `<= eps_collapse * max(1, |a|, |b|)` is treated
    /// as collapsed onto a single (possibly higher-multiplicity) root.
    pub eps_collapse: f64,
}

impl Default for SturmCfg {
    fn default() -> Self {
        Self {
            eps_collapse: 10.0 * f64::EPSILON,
        }
    }
}

/// Isolation record: an interval together with the sign-variation counts and
/// on-root flags at its endpoints.
///
/// Produced by `Sequence::separate_roots`; read-only afterwards. A zero-width
/// interval (`a == b`) marks an endpoint that is exactly a root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub a: f64,
    /// Upper bound.
    pub b: f64,
    /// Sign variations of the chain at `a`.
    pub va: usize,
    /// Sign variations of the chain at `b`.
    pub vb: usize,
    /// True if `a` is exactly a root of the first chain polynomial.
    pub a_on_root: bool,
    /// True if `b` is exactly a root of the first chain polynomial.
    pub b_on_root: bool,
}

impl Interval {
    /// Zero-width interval marking a root exactly at `x`.
    #[inline]
    pub(crate) fn point(x: f64) -> Self {
        Self {
            a: x,
            b: x,
            va: 0,
            vb: 0,
            a_on_root: true,
            b_on_root: true,
        }
    }

    /// Interval width `b - a`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Root count predicted by Sturm's theorem: `|V(a) - V(b)|`.
    #[inline]
    pub fn expected_roots(&self) -> usize {
        self.va.abs_diff(self.vb)
    }
}
