//! Refinement of isolating intervals to numeric roots.
//!
//! Each finalized interval is narrowed by an externally supplied bracketing
//! solver evaluated against the squarefree-adjusted first chain polynomial.
//! Endpoints flagged on-root short-circuit the solver entirely.
//! Non-convergence is recoverable: the solver's best estimate is kept and the
//! interval index recorded in [`Sequence::unconverged`].

use crate::solver::BracketingSolver;

use super::Sequence;

impl Sequence {
    /// Refine every isolated interval to a root value, in interval order.
    ///
    /// Returns the refined roots, also reachable later via
    /// [`Sequence::roots`].
    pub fn refine_roots<S: BracketingSolver>(&mut self, solver: &mut S) -> &[f64] {
        let mut roots = Vec::with_capacity(self.intervals.len());
        let mut unconverged = Vec::new();
        for (i, iv) in self.intervals.iter().enumerate() {
            if iv.a_on_root {
                roots.push(iv.a);
            } else if iv.b_on_root {
                roots.push(iv.b);
            } else {
                let p = &self.chain[0];
                let res = solver.solve(|x| p.evaluate(x), iv.a, iv.b);
                if !res.converged {
                    unconverged.push(i);
                }
                roots.push(res.root);
            }
        }
        self.roots = roots;
        self.unconverged = unconverged;
        &self.roots
    }
}
