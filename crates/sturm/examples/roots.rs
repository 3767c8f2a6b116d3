//! End-to-end root-finding probe for a fixed quintic.
//!
//! Purpose
//! - Exercise the whole pipeline (chain build, isolation, refinement) on one
//!   hand-checkable polynomial and print what each stage produced.
//! - Provide a quick timing data point for a small dense polynomial.
//!
//! Why this shape
//! - p(x) = (x^2 - 1)(x^2 - 4)(x - 3) has five well-separated real roots at
//!   -2, -1, 1, 2, 3, so every printed value is easy to eyeball.

use std::time::Instant;

use sturm::{Bisection, Poly, Sequence};

fn main() {
    let p = quintic();
    println!("p(x) = {p}");

    let build_start = Instant::now();
    let mut seq = Sequence::build(&p).expect("chain build succeeds");
    let build_elapsed = build_start.elapsed().as_secs_f64() * 1e3;

    let sep_start = Instant::now();
    let n = seq.separate_roots_cauchy();
    let sep_elapsed = sep_start.elapsed().as_secs_f64() * 1e3;
    println!(
        "chain_len={} cauchy_bound={:.3} roots={n}",
        seq.len(),
        seq.cauchy_bound()
    );
    for iv in seq.intervals() {
        println!("interval=[{:.6}, {:.6}]", iv.a, iv.b);
    }

    let mut solver = Bisection::default();
    let refine_start = Instant::now();
    let roots = seq.refine_roots(&mut solver).to_vec();
    let refine_elapsed = refine_start.elapsed().as_secs_f64() * 1e3;
    for r in &roots {
        println!("root={r:.12} residual={:.3e}", p.evaluate(*r));
    }
    assert!(seq.unconverged().is_empty(), "all refinements converged");

    println!("build_time_ms={build_elapsed:.3}");
    println!("separate_time_ms={sep_elapsed:.3}");
    println!("refine_time_ms={refine_elapsed:.3}");
}

fn quintic() -> Poly {
    let factors = [-2.0, -1.0, 1.0, 2.0, 3.0];
    let mut p = Poly::scalar(1.0);
    for r in factors {
        p = &p * &Poly::monomial(-r);
    }
    p
}
