//! Scalar bracketing root-finders.
//!
//! The Sturm core only needs the capability "given a bracket `[a, b]` and a
//! function, return a root estimate and a convergence flag"; any strategy
//! (bisection, secant, Brent-style) satisfying that is substitutable through
//! [`BracketingSolver`]. [`Bisection`] is the guaranteed-termination default.

/// Outcome of a bracketing solve: best estimate plus convergence indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BracketResult {
    pub root: f64,
    pub converged: bool,
}

/// Capability interface for scalar bracketing solvers.
pub trait BracketingSolver {
    /// Search `[a, b]` for a root of `f`. Implementations must always return
    /// an estimate; they signal failure through `converged`, never by
    /// panicking.
    fn solve<F: FnMut(f64) -> f64>(&mut self, f: F, a: f64, b: f64) -> BracketResult;
}

/// Plain bisection with a relative-plus-absolute width stopping rule.
#[derive(Clone, Copy, Debug)]
pub struct Bisection {
    /// Relative width tolerance, scaled by `max(|a|, |b|)`.
    pub rtol: f64,
    /// Absolute width tolerance.
    pub atol: f64,
    /// Iteration cap; reaching it reports `converged: false`.
    pub max_iter: usize,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            rtol: 4.0 * f64::EPSILON,
            atol: 1e-12,
            max_iter: 128,
        }
    }
}

impl Bisection {
    #[inline]
    fn stop(&self, a: f64, b: f64) -> bool {
        b - a <= self.atol + self.rtol * a.abs().max(b.abs())
    }
}

impl BracketingSolver for Bisection {
    fn solve<F: FnMut(f64) -> f64>(&mut self, mut f: F, a: f64, b: f64) -> BracketResult {
        let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
        let mut fa = f(a);
        if fa == 0.0 {
            return BracketResult {
                root: a,
                converged: true,
            };
        }
        let fb = f(b);
        if fb == 0.0 {
            return BracketResult {
                root: b,
                converged: true,
            };
        }
        if fa.signum() == fb.signum() {
            // Not a bracket: nothing better than the midpoint to offer.
            return BracketResult {
                root: 0.5 * (a + b),
                converged: false,
            };
        }
        for _ in 0..self.max_iter {
            let m = 0.5 * (a + b);
            if self.stop(a, b) {
                return BracketResult {
                    root: m,
                    converged: true,
                };
            }
            let fm = f(m);
            if fm == 0.0 {
                return BracketResult {
                    root: m,
                    converged: true,
                };
            }
            if fm.signum() == fa.signum() {
                a = m;
                fa = fm;
            } else {
                b = m;
            }
        }
        BracketResult {
            root: 0.5 * (a + b),
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisection_finds_sqrt2() {
        let mut solver = Bisection::default();
        let res = solver.solve(|x| x * x - 2.0, 0.0, 2.0);
        assert!(res.converged);
        assert!((res.root - 2.0f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn bisection_accepts_reversed_bracket() {
        let mut solver = Bisection::default();
        let res = solver.solve(|x| x - 1.0, 3.0, -1.0);
        assert!(res.converged);
        assert!((res.root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn bisection_reports_missing_bracket() {
        let mut solver = Bisection::default();
        let res = solver.solve(|x| x * x + 1.0, -1.0, 1.0);
        assert!(!res.converged);
    }

    #[test]
    fn bisection_exact_endpoint_root() {
        let mut solver = Bisection::default();
        let res = solver.solve(|x| x, 0.0, 1.0);
        assert!(res.converged);
        assert_eq!(res.root, 0.0);
    }

    #[test]
    fn closure_state_is_allowed() {
        // FnMut closure counting evaluations.
        let mut calls = 0usize;
        let mut solver = Bisection::default();
        let res = solver.solve(
            |x| {
                calls += 1;
                x - 0.25
            },
            0.0,
            1.0,
        );
        assert!(res.converged);
        assert!(calls > 0);
        assert!((res.root - 0.25).abs() < 1e-10);
    }
}
