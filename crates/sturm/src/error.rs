//! Error taxonomy for the polynomial and sequence layers.
//!
//! Structural failures (degenerate divisors, malformed inputs to `build`)
//! unwind to the caller of the top-level operation; they are never swallowed
//! inside the Euclidean recursion or the bisection loop. Solver
//! non-convergence during refinement is *not* an error: it is reported
//! through [`crate::sequence::Sequence::unconverged`].

use std::fmt::{self, Display, Formatter};

/// Errors raised by polynomial division, GCD, and sequence construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Pseudo-division saw a divisor whose normalized leading coefficient is
    /// not distinguishable from zero. The offending magnitude is attached.
    DegenerateDivisor { leading: f64 },
    /// An operation that needs a leading coefficient was handed the empty
    /// (zero) polynomial.
    EmptyPolynomial,
    /// `Sequence::build` was handed a constant polynomial; the Sturm chain
    /// needs degree >= 1.
    ConstantPolynomial,
    /// `make_monic` was called on a polynomial whose leading coefficient is
    /// exactly zero.
    ZeroLeadingCoefficient,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateDivisor { leading } => {
                write!(
                    f,
                    "divisor leading coefficient {leading:e} is below machine \
                     epsilon after normalization"
                )
            }
            Error::EmptyPolynomial => {
                write!(f, "operation requires a non-empty polynomial")
            }
            Error::ConstantPolynomial => {
                write!(f, "Sturm sequence requires a polynomial of degree >= 1")
            }
            Error::ZeroLeadingCoefficient => {
                write!(f, "cannot make monic: leading coefficient is zero")
            }
        }
    }
}

impl std::error::Error for Error {}
