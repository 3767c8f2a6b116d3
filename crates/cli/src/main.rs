use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use sturm::{Bisection, Poly, Sequence};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "sturm")]
#[command(about = "Real root counting and isolation for dense univariate polynomials")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Isolate and refine every real root
    Roots {
        /// Coefficients in ascending order: a0 a1 a2 ...
        #[arg(required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        /// Lower search bound (default: Cauchy bound)
        #[arg(long, allow_negative_numbers = true)]
        a: Option<f64>,
        /// Upper search bound (default: Cauchy bound)
        #[arg(long, allow_negative_numbers = true)]
        b: Option<f64>,
        /// Write the JSON record here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Count distinct real roots in an interval
    Count {
        #[arg(required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,
        #[arg(long, allow_negative_numbers = true)]
        a: f64,
        #[arg(long, allow_negative_numbers = true)]
        b: f64,
    },
    /// Print the Sturm chain of a polynomial
    Chain {
        #[arg(required = true, allow_negative_numbers = true)]
        coeffs: Vec<f64>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Roots { coeffs, a, b, out } => roots(&coeffs, a, b, out),
        Action::Count { coeffs, a, b } => count(&coeffs, a, b),
        Action::Chain { coeffs } => chain(&coeffs),
    }
}

#[derive(Serialize)]
struct RootsRecord {
    polynomial: String,
    a: f64,
    b: f64,
    n_roots: usize,
    intervals: Vec<[f64; 2]>,
    roots: Vec<f64>,
    unconverged: Vec<usize>,
}

fn roots(coeffs: &[f64], a: Option<f64>, b: Option<f64>, out: Option<String>) -> Result<()> {
    let p = Poly::from_coeffs(coeffs);
    let mut seq = Sequence::build(&p).context("building Sturm chain")?;
    let n = match (a, b) {
        (Some(a), Some(b)) => {
            if a >= b {
                bail!("empty interval: a = {a} must be below b = {b}");
            }
            seq.separate_roots(a, b)
        }
        (None, None) => seq.separate_roots_cauchy(),
        _ => bail!("bounds must be given together or not at all"),
    };
    tracing::info!(n, a = seq.a(), b = seq.b(), "roots_isolated");

    let mut solver = Bisection::default();
    seq.refine_roots(&mut solver);
    for &i in seq.unconverged() {
        tracing::warn!(
            interval = i,
            estimate = seq.roots()[i],
            "refinement did not converge"
        );
    }

    let record = RootsRecord {
        polynomial: p.to_string(),
        a: seq.a(),
        b: seq.b(),
        n_roots: n,
        intervals: seq.intervals().iter().map(|iv| [iv.a, iv.b]).collect(),
        roots: seq.roots().to_vec(),
        unconverged: seq.unconverged().to_vec(),
    };
    let json = serde_json::to_string_pretty(&record)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, json)?;
            tracing::info!(out, "record_written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn count(coeffs: &[f64], a: f64, b: f64) -> Result<()> {
    if a >= b {
        bail!("empty interval: a = {a} must be below b = {b}");
    }
    let p = Poly::from_coeffs(coeffs);
    let mut seq = Sequence::build(&p).context("building Sturm chain")?;
    let n = seq.separate_roots(a, b);
    println!("{n}");
    Ok(())
}

fn chain(coeffs: &[f64]) -> Result<()> {
    let p = Poly::from_coeffs(coeffs);
    let seq = Sequence::build(&p).context("building Sturm chain")?;
    print!("{seq}");
    Ok(())
}
