//! Real-root counting and isolation for univariate polynomials via Sturm's
//! theorem.
//!
//! Pipeline (data flows one way):
//! - [`poly::Poly`]: dense real polynomial with pseudo-division and GCD.
//! - [`sequence::Sequence`]: squarefree Sturm chain built by repeated
//!   pseudo-division.
//! - `Sequence::separate_roots`: stack-based bisection that isolates each
//!   distinct real root in its own interval.
//! - `Sequence::refine_roots`: narrows each isolating interval to a numeric
//!   root through a pluggable bracketing solver ([`solver::BracketingSolver`]).
//!
//! The isolator and refiner only read polynomial evaluations; they never
//! mutate the chain.

pub mod error;
pub mod poly;
pub mod rand;
pub mod sequence;
pub mod solver;

pub use error::Error;
pub use poly::{divide, gcd, Poly};
pub use sequence::{Interval, Sequence, SturmCfg};
pub use solver::{Bisection, BracketResult, BracketingSolver};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::poly::{divide, gcd, Poly};
    pub use crate::sequence::{Interval, Sequence, SturmCfg};
    pub use crate::solver::{Bisection, BracketResult, BracketingSolver};
}
