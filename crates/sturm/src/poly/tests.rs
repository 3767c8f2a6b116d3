use super::*;
use proptest::prelude::*;

fn assert_coeffs_eq(p: &Poly, expected: &[f64], tol: f64) {
    assert_eq!(
        p.order(),
        expected.len(),
        "order mismatch: {p:?} vs {expected:?}"
    );
    for (i, &e) in expected.iter().enumerate() {
        assert!(
            (p.coeff(i) - e).abs() <= tol,
            "coeff {i}: {} vs {e}",
            p.coeff(i)
        );
    }
}

#[test]
fn constructors_and_accessors() {
    let p = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    assert_eq!(p.order(), 3);
    assert_eq!(p.degree(), Some(2));
    assert_eq!(p.leading_coeff(), 2.0);
    assert_eq!(p.max_abs_coeff(), 3.0);
    assert_eq!(p.coeff(1), -3.0);
    // Reads past the stored order are zero.
    assert_eq!(p.coeff(7), 0.0);

    let e = Poly::empty();
    assert!(e.is_empty());
    assert_eq!(e.degree(), None);
    assert_eq!(e.leading_coeff(), 0.0);
    assert_eq!(e.max_abs_coeff(), 0.0);

    assert_coeffs_eq(&Poly::scalar(3.5), &[3.5], 0.0);
    assert_coeffs_eq(&Poly::monomial(-2.0), &[-2.0, 1.0], 0.0);
}

#[test]
fn horner_evaluation() {
    let p = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    assert_eq!(p.evaluate(0.0), 1.0);
    assert_eq!(p.evaluate(2.0), 3.0);
    assert_eq!(p.evaluate(0.5), 0.0);
    assert_eq!(Poly::empty().evaluate(3.0), 0.0);
    assert_eq!(Poly::scalar(4.0).evaluate(123.0), 4.0);
}

#[test]
fn simultaneous_value_and_derivative() {
    let p = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    let (v, dv) = p.evaluate_with_derivative(2.0);
    assert_eq!(v, 3.0);
    assert_eq!(dv, 5.0);
    assert_eq!(p.evaluate_derivative(2.0), 5.0);

    let (v1, dv1) = Poly::scalar(7.0).evaluate_with_derivative(1.0);
    assert_eq!((v1, dv1), (7.0, 0.0));
    assert_eq!(Poly::empty().evaluate_with_derivative(1.0), (0.0, 0.0));
}

#[test]
fn derivative_and_integral() {
    let p = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    let dp = p.derivative();
    assert_coeffs_eq(&dp, &[-3.0, 4.0], 0.0);
    // Integral of the derivative restores p up to the constant term.
    let back = dp.integral(p.coeff(0));
    assert_coeffs_eq(&back, &[1.0, -3.0, 2.0], 0.0);
    // Derivative of the integral restores p exactly.
    let round = p.integral(5.0).derivative();
    assert_coeffs_eq(&round, &[1.0, -3.0, 2.0], 1e-15);

    assert!(Poly::scalar(2.0).derivative().is_empty());
    assert!(Poly::empty().derivative().is_empty());
    assert_coeffs_eq(&Poly::empty().integral(3.0), &[3.0], 0.0);
}

#[test]
fn polynomial_sums_and_differences() {
    let a = Poly::from_coeffs(&[1.0, 2.0]);
    let b = Poly::from_coeffs(&[1.0, 1.0, 1.0]);
    assert_coeffs_eq(&(&a + &b), &[2.0, 3.0, 1.0], 0.0);
    assert_coeffs_eq(&(&a - &b), &[0.0, 1.0, -1.0], 0.0);
    assert_coeffs_eq(&(&b - &a), &[0.0, -1.0, 1.0], 0.0);
    // Tail of the longer operand is copied through.
    assert_coeffs_eq(&(&Poly::empty() + &a), &[1.0, 2.0], 0.0);
    assert_coeffs_eq(&(&Poly::empty() - &a), &[-1.0, -2.0], 0.0);
}

#[test]
fn polynomial_products() {
    let a = Poly::from_coeffs(&[1.0, 1.0]); // 1 + x
    let b = Poly::from_coeffs(&[1.0, -1.0]); // 1 - x
    assert_coeffs_eq(&(&a * &b), &[1.0, 0.0, -1.0], 0.0);
    assert!((&a * &Poly::empty()).is_empty());
}

#[test]
fn scalar_operations() {
    let p = Poly::from_coeffs(&[1.0, 2.0]);
    assert_coeffs_eq(&(&p + 3.0), &[4.0, 2.0], 0.0);
    assert_coeffs_eq(&(&p - 3.0), &[-2.0, 2.0], 0.0);
    assert_coeffs_eq(&(&p * 2.0), &[2.0, 4.0], 0.0);
    // Empty polynomial is promoted to order 1.
    assert_coeffs_eq(&(&Poly::empty() + 3.0), &[3.0], 0.0);
    assert_coeffs_eq(&(&Poly::empty() - 3.0), &[-3.0], 0.0);
    let mut q = p.clone();
    q *= 0.5;
    assert_coeffs_eq(&q, &[0.5, 1.0], 0.0);
}

#[test]
fn negation() {
    let p = Poly::from_coeffs(&[1.0, -2.0]);
    assert_coeffs_eq(&(-&p), &[-1.0, 2.0], 0.0);
    assert_coeffs_eq(&(-p), &[-1.0, 2.0], 0.0);
}

#[test]
fn normalize_returns_scale() {
    let mut p = Poly::from_coeffs(&[2.0, -4.0]);
    let scale = p.normalize();
    assert_eq!(scale, 4.0);
    assert_coeffs_eq(&p, &[0.5, -1.0], 0.0);
    // All-zero polynomial: no-op, scale 0.
    let mut z = Poly::zero(3);
    assert_eq!(z.normalize(), 0.0);
    assert_eq!(z.order(), 3);
}

#[test]
fn purge_is_relative_to_magnitude() {
    let mut p = Poly::from_coeffs(&[1e-20, 1.0, 1e-18]);
    p.purge(f64::EPSILON);
    assert_coeffs_eq(&p, &[0.0, 1.0], 0.0);
    // Threshold floor is max(1, max_abs): small polynomials purge against 1.
    let mut q = Poly::from_coeffs(&[1e-17, 1e-3]);
    q.purge(f64::EPSILON);
    assert_coeffs_eq(&q, &[0.0, 1e-3], 0.0);
}

#[test]
fn adjust_degree_strips_trailing_zeros() {
    let mut p = Poly::from_coeffs(&[1.0, 2.0, 0.0, 0.0]);
    p.adjust_degree();
    assert_coeffs_eq(&p, &[1.0, 2.0], 0.0);
    let mut z = Poly::zero(4);
    z.adjust_degree();
    assert!(z.is_empty());
}

#[test]
fn coefficient_sign_variations() {
    assert_eq!(Poly::from_coeffs(&[1.0, -3.0, 2.0]).sign_variations(), 2);
    assert_eq!(Poly::from_coeffs(&[0.0, 1.0, 1.0]).sign_variations(), 0);
    // Zero coefficients are skipped.
    assert_eq!(Poly::from_coeffs(&[1.0, 0.0, -1.0]).sign_variations(), 1);
    assert_eq!(Poly::empty().sign_variations(), 0);
}

#[test]
fn make_monic_and_its_errors() {
    let mut p = Poly::from_coeffs(&[4.0, 2.0]);
    p.make_monic().unwrap();
    assert_coeffs_eq(&p, &[2.0, 1.0], 0.0);
    assert_eq!(p.leading_coeff(), 1.0);

    assert_eq!(Poly::empty().make_monic(), Err(Error::EmptyPolynomial));
    assert_eq!(
        Poly::zero(2).make_monic(),
        Err(Error::ZeroLeadingCoefficient)
    );
}

#[test]
fn display_formatting() {
    assert_eq!(
        Poly::from_coeffs(&[1.0, -3.0, 2.0]).to_string(),
        "1 - 3x + 2x^2"
    );
    assert_eq!(Poly::from_coeffs(&[0.0, 1.0, 1.0]).to_string(), "x + x^2");
    assert_eq!(Poly::from_coeffs(&[0.0, -2.0]).to_string(), "-2x");
    assert_eq!(Poly::empty().to_string(), "(empty polynomial)");
    assert_eq!(Poly::zero(3).to_string(), "0");
    assert_eq!(Poly::scalar(2.5).to_string(), "2.5");
}

#[test]
fn divide_worked_example() {
    // (1 - 3x + 2x^2) = (x + x^2) * 2 + (1 - 5x)
    let p1 = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    let p2 = Poly::from_coeffs(&[0.0, 1.0, 1.0]);
    let (q, r) = divide(&p1, &p2).unwrap();
    assert_coeffs_eq(&q, &[2.0], 1e-14);
    assert_coeffs_eq(&r, &[1.0, -5.0], 1e-14);
    assert_eq!(q.degree(), Some(0));
    assert_eq!(r.degree(), Some(1));
}

#[test]
fn divide_worked_example_swapped() {
    // (x + x^2) = (1 - 3x + 2x^2) * 1/2 + (-1/2 + 5/2 x)
    let p1 = Poly::from_coeffs(&[0.0, 1.0, 1.0]);
    let p2 = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    let (q, r) = divide(&p1, &p2).unwrap();
    assert_coeffs_eq(&q, &[0.5], 1e-14);
    assert_coeffs_eq(&r, &[-0.5, 2.5], 1e-14);
}

#[test]
fn divide_low_order_dividend() {
    // order(dividend) < order(divisor): q = 1 and r = dividend - divisor on
    // the normalized operands; rescaling turns q into scale_num / scale_den.
    let p1 = Poly::from_coeffs(&[2.0]);
    let p2 = Poly::from_coeffs(&[0.0, 4.0]);
    let (q, r) = divide(&p1, &p2).unwrap();
    assert_coeffs_eq(&q, &[0.5], 1e-14);
    // normalized: [1] - [0, 1] = [1, -1], rescaled by 2.
    assert_coeffs_eq(&r, &[2.0, -2.0], 1e-14);
    // Identity in the original scale: 2 = 4x * 0.5 + (2 - 2x).
    assert_coeffs_eq(&(&(&p2 * &q) + &r), &[2.0, 0.0], 1e-14);
}

#[test]
fn divide_rejects_degenerate_divisor() {
    let p = Poly::from_coeffs(&[1.0, 2.0]);
    assert!(matches!(
        divide(&p, &Poly::zero(2)),
        Err(Error::DegenerateDivisor { .. })
    ));
    assert!(matches!(
        divide(&p, &Poly::empty()),
        Err(Error::DegenerateDivisor { .. })
    ));
}

#[test]
fn gcd_of_coprime_polynomials_is_one() {
    let p1 = Poly::from_coeffs(&[1.0, -3.0, 2.0]);
    let p2 = Poly::from_coeffs(&[0.0, 1.0, 1.0]);
    let g = gcd(&p1, &p2, f64::EPSILON).unwrap();
    assert_eq!(g.degree(), Some(0));
    assert_coeffs_eq(&g, &[1.0], 1e-12);

    let p3 = Poly::from_coeffs(&[1.0, 0.0, -1.0]); // 1 - x^2
    let p4 = Poly::from_coeffs(&[0.0, 0.0, 1.0]); // x^2
    let g2 = gcd(&p3, &p4, f64::EPSILON).unwrap();
    assert_eq!(g2.degree(), Some(0));
}

#[test]
fn gcd_detects_shared_linear_factor() {
    // gcd(1 - 2x + x^2, 1 - x) = 1 - x
    let p1 = Poly::from_coeffs(&[1.0, -2.0, 1.0]);
    let p2 = Poly::from_coeffs(&[1.0, -1.0]);
    let g = gcd(&p1, &p2, f64::EPSILON).unwrap();
    assert_eq!(g.degree(), Some(1));
    assert_coeffs_eq(&g, &[1.0, -1.0], 1e-12);
    // Normalized: max-abs coefficient is 1.
    assert!((g.max_abs_coeff() - 1.0).abs() < 1e-12);
}

fn arb_poly(max_extra: usize) -> impl Strategy<Value = Poly> {
    // Leading coefficient kept away from zero so `adjust_degree` is a no-op.
    (
        proptest::collection::vec(-10.0f64..10.0, 0..max_extra),
        prop::sample::select(vec![-1.0f64, 1.0]),
        0.5f64..10.0,
    )
        .prop_map(|(mut coeffs, sign, lead)| {
            coeffs.push(sign * lead);
            Poly::from_coeffs(&coeffs)
        })
}

proptest! {
    #[test]
    fn addition_commutes(a in arb_poly(5), b in arb_poly(5)) {
        let ab = &a + &b;
        let ba = &b + &a;
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn division_identity_holds(p in arb_poly(6), d in arb_poly(4)) {
        let (q, r) = divide(&p, &d).unwrap();
        let reconstructed = &(&d * &q) + &r;
        let scale = 1.0 + p.max_abs_coeff() + reconstructed.max_abs_coeff();
        let n = p.order().max(reconstructed.order());
        for i in 0..n {
            prop_assert!(
                (p.coeff(i) - reconstructed.coeff(i)).abs() <= 1e-9 * scale,
                "coeff {} differs: {} vs {}", i, p.coeff(i), reconstructed.coeff(i)
            );
        }
    }

    #[test]
    fn remainder_degree_shrinks(p in arb_poly(6), d in arb_poly(4)) {
        prop_assume!(p.order() >= d.order());
        let (_q, r) = divide(&p, &d).unwrap();
        prop_assert!(r.is_empty() || r.degree() < d.degree());
    }

    #[test]
    fn gcd_is_normalized(p in arb_poly(5), d in arb_poly(3)) {
        let g = gcd(&p, &d, f64::EPSILON).unwrap();
        prop_assert!(!g.is_empty());
        prop_assert!((g.max_abs_coeff() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn gcd_divides_shared_factor_inputs(
        p in arb_poly(3),
        q in arb_poly(3),
        r0 in -2.0f64..2.0,
    ) {
        // Both inputs share the factor (x - r0); the gcd must divide both.
        let shared = Poly::monomial(-r0);
        let pg = &p * &shared;
        let qg = &q * &shared;
        let g = gcd(&pg, &qg, 1e-12).unwrap();
        for input in [&pg, &qg] {
            let (_quot, mut rem) = divide(input, &g).unwrap();
            rem.purge(1e-6);
            prop_assert!(
                rem.is_empty(),
                "gcd does not divide input: remainder {:?}", rem
            );
        }
    }

    #[test]
    fn derivative_of_integral_round_trips(p in arb_poly(6), c in -5.0f64..5.0) {
        let round = p.integral(c).derivative();
        prop_assert_eq!(round.order(), p.order());
        for i in 0..p.order() {
            prop_assert!((round.coeff(i) - p.coeff(i)).abs() <= 1e-12 * (1.0 + p.coeff(i).abs()));
        }
    }
}
