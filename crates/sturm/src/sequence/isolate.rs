//! Root isolation by sign-variation counting and interval bisection.
//!
//! An explicit LIFO worklist of [`Interval`] records drives the bisection
//! (bounded, inspectable, no call-stack recursion). Termination: each
//! non-degenerate step halves the interval width, and the relative collapse
//! tolerance finalizes any interval at floating-point resolution.
//! Correctness: Sturm's theorem gives the exact root count on an interval
//! without endpoint roots as `|V(a) - V(b)|`, so any interval reporting 0 or
//! 1 is final.

use super::types::Interval;
use super::Sequence;

impl Sequence {
    /// Sign variations of the chain evaluated at `x`, plus whether `x` is
    /// exactly a root of the first chain polynomial.
    ///
    /// Zero evaluations are skipped for sign-change purposes.
    pub fn sign_variations(&self, x: f64) -> (usize, bool) {
        let mut variations = 0;
        let mut last_sign = 0i8;
        let v0 = self.chain[0].evaluate(x);
        let on_root = v0 == 0.0;
        if v0 > 0.0 {
            last_sign = 1;
        } else if v0 < 0.0 {
            last_sign = -1;
        }
        for p in &self.chain[1..] {
            let v = p.evaluate(x);
            if v > 0.0 {
                if last_sign == -1 {
                    variations += 1;
                }
                last_sign = 1;
            } else if v < 0.0 {
                if last_sign == 1 {
                    variations += 1;
                }
                last_sign = -1;
            }
        }
        (variations, on_root)
    }

    /// Split `[a, b]` into sub-intervals each containing exactly one distinct
    /// real root. Returns the number of intervals (roots) found.
    ///
    /// Replaces any previously computed intervals and clears stale refined
    /// roots. An endpoint that is exactly a root is reported as a zero-width
    /// interval snapped to that endpoint. Reversed bounds are swapped.
    pub fn separate_roots(&mut self, a: f64, b: f64) -> usize {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        self.intervals.clear();
        self.roots.clear();
        self.unconverged.clear();
        self.a = a;
        self.b = b;

        let (va, a_on_root) = self.sign_variations(a);
        let (vb, b_on_root) = self.sign_variations(b);
        let whole = Interval {
            a,
            b,
            va,
            vb,
            a_on_root,
            b_on_root,
        };

        // At most one root in the whole interval: no worklist needed.
        if whole.expected_roots() <= 1 {
            if whole.expected_roots() == 1 && !a_on_root && !b_on_root {
                self.intervals.push(whole);
            }
            if a_on_root {
                self.intervals.push(Interval {
                    a,
                    b: a,
                    va,
                    vb: va,
                    a_on_root: true,
                    b_on_root: true,
                });
            }
            if b_on_root {
                self.intervals.push(Interval {
                    a: b,
                    b,
                    va: vb,
                    vb,
                    a_on_root: true,
                    b_on_root: true,
                });
            }
            return self.intervals.len();
        }

        let mut stack: Vec<Interval> = Vec::with_capacity(self.chain.len());
        stack.push(whole);
        while let Some(cur) = stack.pop() {
            let n_roots = cur.expected_roots();
            if n_roots <= 1 {
                // Final: snap endpoint roots to zero-width intervals.
                if cur.a_on_root {
                    self.intervals.push(Interval {
                        a: cur.a,
                        b: cur.a,
                        va: cur.va,
                        vb: cur.va,
                        a_on_root: true,
                        b_on_root: true,
                    });
                } else if cur.b_on_root {
                    self.intervals.push(Interval {
                        a: cur.b,
                        b: cur.b,
                        va: cur.vb,
                        vb: cur.vb,
                        a_on_root: true,
                        b_on_root: true,
                    });
                } else if n_roots == 1 {
                    self.intervals.push(cur);
                }
            } else if cur.width()
                <= self.cfg.eps_collapse * 1.0f64.max(cur.a.abs().max(cur.b.abs()))
            {
                // Width at floating-point resolution with more than one
                // variation left: a single root of higher multiplicity.
                push_point(&mut stack, cur.a);
            } else {
                let c = 0.5 * (cur.a + cur.b);
                let (vc, c_on_root) = self.sign_variations(c);
                // Left half [a, c].
                if cur.va != vc || c_on_root || cur.a_on_root {
                    if c > cur.a && c < cur.b {
                        stack.push(Interval {
                            a: cur.a,
                            b: c,
                            va: cur.va,
                            vb: vc,
                            a_on_root: cur.a_on_root,
                            b_on_root: c_on_root,
                        });
                    } else if c_on_root {
                        push_point(&mut stack, c);
                    } else if cur.a_on_root {
                        push_point(&mut stack, cur.a);
                    }
                }
                // Right half [c, b].
                if cur.vb != vc || cur.b_on_root {
                    if c > cur.a && c < cur.b {
                        stack.push(Interval {
                            a: c,
                            b: cur.b,
                            va: vc,
                            vb: cur.vb,
                            a_on_root: c_on_root,
                            b_on_root: cur.b_on_root,
                        });
                    } else if cur.b_on_root {
                        push_point(&mut stack, cur.b);
                    }
                }
            }
        }

        self.intervals
            .sort_by(|x, y| x.a.partial_cmp(&y.a).unwrap_or(std::cmp::Ordering::Equal));
        // Consecutive bisections landing on the same boundary point emit the
        // same zero-width interval from both sides; keep one per point.
        self.intervals
            .dedup_by(|x, y| x.width() == 0.0 && y.width() == 0.0 && x.a == y.a);
        self.intervals.len()
    }

    /// Isolate every real root: bounds from [`Sequence::cauchy_bound`].
    pub fn separate_roots_cauchy(&mut self) -> usize {
        let bound = self.cauchy_bound();
        self.separate_roots(-bound, bound)
    }
}

/// Queue a zero-width root marker, skipping duplicates already on the stack.
fn push_point(stack: &mut Vec<Interval>, x: f64) {
    if stack.iter().any(|iv| iv.a == x && iv.b == x) {
        return;
    }
    stack.push(Interval::point(x));
}
