//! Dense univariate real polynomials.
//!
//! Purpose
//! - Value type `Poly` holding coefficients `a_0..a_{n-1}` in a
//!   `nalgebra::DVector<f64>`; coefficient at index `i` multiplies `x^i`.
//! - Composition over the vector type, not inheritance: `Poly` owns its
//!   coefficient buffer exclusively and exposes arithmetic as operators and
//!   methods.
//!
//! Conventions
//! - `order` is the number of stored coefficients; `degree = order - 1`
//!   (undefined for the empty polynomial, which models the zero polynomial).
//! - After any normalizing operation (`adjust_degree`) the highest-index
//!   coefficient is non-zero unless the polynomial is empty.
//! - Tolerances are relative: `purge` and the division layer scale epsilons
//!   by operand magnitude, never by absolute constants.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use nalgebra::DVector;

use crate::error::Error;

mod divide;
pub use divide::{divide, gcd};

#[cfg(test)]
mod tests;

/// Dense polynomial `p(x) = sum_i a_i x^i` over `f64`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poly {
    coeffs: DVector<f64>,
}

impl Poly {
    /// The empty (zero) polynomial of order 0.
    #[inline]
    pub fn empty() -> Self {
        Self {
            coeffs: DVector::zeros(0),
        }
    }

    /// All-zero polynomial with `order` stored coefficients.
    #[inline]
    pub fn zero(order: usize) -> Self {
        Self {
            coeffs: DVector::zeros(order),
        }
    }

    /// Constant polynomial `p(x) = s` (order 1).
    #[inline]
    pub fn scalar(s: f64) -> Self {
        Self {
            coeffs: DVector::from_element(1, s),
        }
    }

    /// Monic linear polynomial `p(x) = a + x` (order 2).
    #[inline]
    pub fn monomial(a: f64) -> Self {
        Self {
            coeffs: DVector::from_vec(vec![a, 1.0]),
        }
    }

    /// Build from coefficients, lowest degree first.
    #[inline]
    pub fn from_coeffs(coeffs: &[f64]) -> Self {
        Self {
            coeffs: DVector::from_column_slice(coeffs),
        }
    }

    /// Number of stored coefficients.
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len()
    }

    /// Degree, or `None` for the empty polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.order().checked_sub(1)
    }

    /// True if no coefficients are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient of `x^i`. Indices past the stored order read as zero.
    #[inline]
    pub fn coeff(&self, i: usize) -> f64 {
        if i < self.order() {
            self.coeffs[i]
        } else {
            0.0
        }
    }

    /// Mutable access to a stored coefficient.
    #[inline]
    pub fn coeff_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.coeffs[i]
    }

    /// Coefficient storage, lowest degree first.
    #[inline]
    pub fn coeffs(&self) -> &DVector<f64> {
        &self.coeffs
    }

    /// Highest-index stored coefficient; 0.0 for the empty polynomial.
    #[inline]
    pub fn leading_coeff(&self) -> f64 {
        match self.order() {
            0 => 0.0,
            n => self.coeffs[n - 1],
        }
    }

    /// Largest coefficient magnitude; 0.0 for the empty polynomial.
    #[inline]
    pub fn max_abs_coeff(&self) -> f64 {
        if self.coeffs.is_empty() {
            0.0
        } else {
            self.coeffs.amax()
        }
    }

    /// Evaluate at `x` by Horner's method, highest to lowest index.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut n = self.order();
        if n == 0 {
            return 0.0;
        }
        n -= 1;
        let mut p = self.coeffs[n];
        while n > 0 {
            n -= 1;
            p = p * x + self.coeffs[n];
        }
        p
    }

    /// Evaluate the derivative at `x` without materializing it.
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        let n = self.order();
        if n < 2 {
            return 0.0;
        }
        let mut i = n - 1;
        let mut dp = self.coeffs[i] * i as f64;
        while i > 1 {
            i -= 1;
            dp = dp * x + self.coeffs[i] * i as f64;
        }
        dp
    }

    /// Simultaneous Horner evaluation of the value and the derivative.
    pub fn evaluate_with_derivative(&self, x: f64) -> (f64, f64) {
        let n = self.order();
        if n == 0 {
            return (0.0, 0.0);
        }
        if n == 1 {
            return (self.coeffs[0], 0.0);
        }
        let mut i = n - 1;
        let mut p = self.coeffs[i];
        let mut dp = self.coeffs[i] * i as f64;
        while i > 1 {
            i -= 1;
            p = p * x + self.coeffs[i];
            dp = dp * x + self.coeffs[i] * i as f64;
        }
        p = p * x + self.coeffs[0];
        (p, dp)
    }

    /// Derivative polynomial: coefficient `i-1` of the result is
    /// `i * a_i`; result order is `order - 1`.
    pub fn derivative(&self) -> Poly {
        let n = self.order();
        if n < 2 {
            return Poly::empty();
        }
        let mut res = DVector::zeros(n - 1);
        for i in 1..n {
            res[i - 1] = i as f64 * self.coeffs[i];
        }
        Poly { coeffs: res }
    }

    /// Antiderivative with integration constant `c`; result order is
    /// `order + 1`.
    pub fn integral(&self, c: f64) -> Poly {
        let n = self.order();
        let mut res = DVector::zeros(n + 1);
        res[0] = c;
        for i in 1..=n {
            res[i] = self.coeffs[i - 1] / i as f64;
        }
        Poly { coeffs: res }
    }

    /// Divide every coefficient by the max-abs coefficient and return that
    /// scale. Leaves the polynomial untouched (returning 0.0) when all
    /// coefficients are zero.
    pub fn normalize(&mut self) -> f64 {
        let scale = self.max_abs_coeff();
        if scale > 0.0 {
            self.coeffs /= scale;
        }
        scale
    }

    /// Zero out coefficients with `|a_i| <= eps * max(1, max_abs)`, then
    /// strip trailing zeros.
    pub fn purge(&mut self, eps: f64) {
        if !self.coeffs.is_empty() {
            let threshold = eps * self.max_abs_coeff().max(1.0);
            for c in self.coeffs.iter_mut() {
                if c.abs() <= threshold {
                    *c = 0.0;
                }
            }
        }
        self.adjust_degree();
    }

    /// Strip trailing zero coefficients so the leading coefficient is
    /// non-zero, or the polynomial becomes empty.
    pub fn adjust_degree(&mut self) {
        let mut n = self.order();
        while n > 0 && self.coeffs[n - 1] == 0.0 {
            n -= 1;
        }
        if n < self.order() {
            self.coeffs = self.coeffs.rows(0, n).into_owned();
        }
    }

    /// Descartes-style count of adjacent sign changes over the non-zero
    /// coefficients. A self-check aid, not used by root isolation.
    pub fn sign_variations(&self) -> usize {
        let mut variations = 0;
        let mut last_sign = 0i8;
        for &c in self.coeffs.iter() {
            if c > 0.0 {
                if last_sign == -1 {
                    variations += 1;
                }
                last_sign = 1;
            } else if c < 0.0 {
                if last_sign == 1 {
                    variations += 1;
                }
                last_sign = -1;
            }
        }
        variations
    }

    /// Force the leading coefficient to exactly 1 by dividing through.
    pub fn make_monic(&mut self) -> Result<(), Error> {
        if self.is_empty() {
            return Err(Error::EmptyPolynomial);
        }
        let lead = self.leading_coeff();
        if lead == 0.0 {
            return Err(Error::ZeroLeadingCoefficient);
        }
        self.coeffs /= lead;
        let n = self.order();
        self.coeffs[n - 1] = 1.0;
        Ok(())
    }
}

impl From<DVector<f64>> for Poly {
    #[inline]
    fn from(coeffs: DVector<f64>) -> Self {
        Self { coeffs }
    }
}

impl Neg for &Poly {
    type Output = Poly;
    #[inline]
    fn neg(self) -> Poly {
        Poly {
            coeffs: -&self.coeffs,
        }
    }
}

impl Neg for Poly {
    type Output = Poly;
    #[inline]
    fn neg(mut self) -> Poly {
        self.coeffs.neg_mut();
        self
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;
    fn add(self, rhs: &Poly) -> Poly {
        let max_order = self.order().max(rhs.order());
        let min_order = self.order().min(rhs.order());
        let mut res = DVector::zeros(max_order);
        for i in 0..min_order {
            res[i] = self.coeffs[i] + rhs.coeffs[i];
        }
        let longer = if self.order() >= rhs.order() { self } else { rhs };
        for i in min_order..max_order {
            res[i] = longer.coeffs[i];
        }
        Poly { coeffs: res }
    }
}

impl Add for Poly {
    type Output = Poly;
    #[inline]
    fn add(self, rhs: Poly) -> Poly {
        &self + &rhs
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;
    fn sub(self, rhs: &Poly) -> Poly {
        let max_order = self.order().max(rhs.order());
        let min_order = self.order().min(rhs.order());
        let mut res = DVector::zeros(max_order);
        for i in 0..min_order {
            res[i] = self.coeffs[i] - rhs.coeffs[i];
        }
        for i in min_order..max_order {
            res[i] = if self.order() > rhs.order() {
                self.coeffs[i]
            } else {
                -rhs.coeffs[i]
            };
        }
        Poly { coeffs: res }
    }
}

impl Sub for Poly {
    type Output = Poly;
    #[inline]
    fn sub(self, rhs: Poly) -> Poly {
        &self - &rhs
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;
    fn mul(self, rhs: &Poly) -> Poly {
        // Product with the zero (empty) polynomial is empty.
        if self.is_empty() || rhs.is_empty() {
            return Poly::empty();
        }
        let mut res = DVector::zeros(self.order() + rhs.order() - 1);
        for i in 0..self.order() {
            for j in 0..rhs.order() {
                res[i + j] += self.coeffs[i] * rhs.coeffs[j];
            }
        }
        Poly { coeffs: res }
    }
}

impl Mul for Poly {
    type Output = Poly;
    #[inline]
    fn mul(self, rhs: Poly) -> Poly {
        &self * &rhs
    }
}

impl Add<f64> for &Poly {
    type Output = Poly;
    fn add(self, s: f64) -> Poly {
        if self.is_empty() {
            return Poly::scalar(s);
        }
        let mut res = self.coeffs.clone();
        res[0] += s;
        Poly { coeffs: res }
    }
}

impl Add<f64> for Poly {
    type Output = Poly;
    #[inline]
    fn add(self, s: f64) -> Poly {
        &self + s
    }
}

impl Sub<f64> for &Poly {
    type Output = Poly;
    fn sub(self, s: f64) -> Poly {
        if self.is_empty() {
            return Poly::scalar(-s);
        }
        let mut res = self.coeffs.clone();
        res[0] -= s;
        Poly { coeffs: res }
    }
}

impl Sub<f64> for Poly {
    type Output = Poly;
    #[inline]
    fn sub(self, s: f64) -> Poly {
        &self - s
    }
}

impl Mul<f64> for &Poly {
    type Output = Poly;
    #[inline]
    fn mul(self, s: f64) -> Poly {
        Poly {
            coeffs: &self.coeffs * s,
        }
    }
}

impl Mul<f64> for Poly {
    type Output = Poly;
    #[inline]
    fn mul(mut self, s: f64) -> Poly {
        self.coeffs *= s;
        self
    }
}

impl MulAssign<f64> for Poly {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.coeffs *= s;
    }
}

impl Display for Poly {
    /// Human-readable form `a0 + a1 x + a2 x^2 + ...`: zero terms omitted,
    /// unit coefficients omitted, `x` instead of `x^1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.order() == 0 {
            return write!(f, "(empty polynomial)");
        }
        if self.order() == 1 {
            return write!(f, "{}", self.coeffs[0]);
        }
        if self.max_abs_coeff() == 0.0 {
            return write!(f, "0");
        }

        let mut printed = false;
        if self.coeffs[0] != 0.0 {
            write!(f, "{}", self.coeffs[0])?;
            printed = true;
        }
        for i in 1..self.order() {
            let a = self.coeffs[i];
            if a == 0.0 {
                continue;
            }
            // Sign separator between terms; for the first printed term keep
            // the sign attached to the coefficient.
            let c = if printed {
                write!(f, "{}", if a < 0.0 { " - " } else { " + " })?;
                a.abs()
            } else {
                printed = true;
                a
            };
            if c != 1.0 {
                write!(f, "{c}")?;
            }
            if i == 1 {
                write!(f, "x")?;
            } else {
                write!(f, "x^{i}")?;
            }
        }
        Ok(())
    }
}
