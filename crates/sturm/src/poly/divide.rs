//! Pseudo-division and polynomial GCD.
//!
//! Both operands are normalized (max-abs coefficient 1) before the synthetic
//! division runs, and the results are rescaled afterwards so that
//! `dividend = divisor * quotient + remainder` holds in the original scale.
//! Normalization keeps the ratio updates bounded and is what makes the
//! floating-point Euclidean chain usable at all.

use crate::error::Error;

use super::Poly;

/// Pseudo-division `p1 = p2 * q + r`.
///
/// Fails with [`Error::DegenerateDivisor`] when the normalized divisor's
/// leading coefficient magnitude is within machine epsilon; that signals a
/// structurally degenerate input and is not retried.
///
/// The remainder is degree-adjusted but *not* purged; purging small
/// coefficients is the caller's decision (see [`gcd`]).
pub fn divide(p1: &Poly, p2: &Poly) -> Result<(Poly, Poly), Error> {
    // Normalized copies: p1(x) = scale_num * num(x), p2(x) = scale_den * den(x).
    let mut num = p1.clone();
    let mut den = p2.clone();
    let scale_num = num.normalize();
    let scale_den = den.normalize();

    let leading = den.leading_coeff();
    if leading.abs() <= f64::EPSILON {
        return Err(Error::DegenerateDivisor { leading });
    }

    let mut q;
    let mut r;
    if num.order() < den.order() {
        // Degenerate step mirroring the recursive GCD: num = den * 1 + (num - den).
        q = Poly::scalar(1.0);
        r = &num - &den;
    } else {
        let d = num.order() - den.order();
        let den_degree = den.order() - 1;
        q = Poly::zero(d + 1);
        r = num;
        let mut k = d;
        loop {
            let r_degree = k + den_degree;
            let ratio = r.coeff(r_degree) / leading;
            *q.coeff_mut(k) = ratio;
            for j in 0..den_degree {
                *r.coeff_mut(k + j) -= ratio * den.coeff(j);
            }
            // The retired leading coefficient cancels exactly, not just to
            // within rounding.
            *r.coeff_mut(r_degree) = 0.0;
            if k == 0 {
                break;
            }
            k -= 1;
        }
        r.adjust_degree();
    }

    // Undo the operand scaling:
    //   num = den * q + r
    //   p1 / scale_num = p2 / scale_den * q + r
    //   p1 = p2 * (scale_num / scale_den) * q + scale_num * r
    q *= scale_num / scale_den;
    r *= scale_num;
    Ok((q, r))
}

/// Greatest common divisor by the Euclidean algorithm over pseudo-division.
///
/// Each remainder is purged with `eps` before recursing; without that pass,
/// floating-point tails from pseudo-division keep the recursion from ever
/// reaching the zero polynomial. The result is normalized (max-abs
/// coefficient 1).
pub fn gcd(p1: &Poly, p2: &Poly, eps: f64) -> Result<Poly, Error> {
    let mut g = if p2.order() > 0 {
        let (_q, mut r) = divide(p1, p2)?;
        r.purge(eps);
        gcd(p2, &r, eps)?
    } else {
        p1.clone()
    };
    g.normalize();
    Ok(g)
}
