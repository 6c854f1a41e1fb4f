//! Property-based tests for the solver
//!
//! These tests verify invariants that should hold for all inputs:
//! - Quadratic roots satisfy the equation
//! - Solving is deterministic
//! - Every finite triple is classified without NaN roots
//! - Overflowing discriminants still give finite roots
//! - Root counts match the dispatch rules

use proptest::prelude::*;
use square_solver::{
    format_general, is_zero, solve, Equation, Outcome, Strategy as SolveStrategy, EPS,
};

/// Coefficients of moderate magnitude, where the absolute tolerance is meaningful
fn coefficient() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

/// Coefficients large enough for `b² − 4ac` to overflow, with spread
/// bounded so that every true root is representable
fn huge_coefficient() -> impl Strategy<Value = f64> {
    (1.0f64..10.0, 150i32..300, any::<bool>()).prop_map(|(mantissa, exponent, negative)| {
        let value = mantissa * 10f64.powi(exponent);
        if negative {
            -value
        } else {
            value
        }
    })
}

/// Rounding error of the quadratic formula grows with b²/a (cancellation
/// between -b and √D) as well as with the size of each term.
fn residual_tolerance(eq: &Equation, root: f64) -> f64 {
    let (a, b, c) = (eq.a().abs(), eq.b().abs(), eq.c().abs());
    let d = eq.discriminant().abs();
    let cancellation = (b * b + b * d.sqrt() + d) / a;
    let terms = a * root * root + b * root.abs() + c;
    1e-12 * (cancellation + terms + 1.0)
}

proptest! {
    /// Property: both roots of a quadratic with a positive discriminant
    /// satisfy a·r² + b·r + c ≈ 0
    #[test]
    fn prop_quadratic_roots_satisfy_equation(
        a in coefficient(),
        b in coefficient(),
        c in coefficient()
    ) {
        let eq = Equation::new(a, b, c).unwrap();
        prop_assume!(!is_zero(a));
        prop_assume!(eq.discriminant() > EPS);

        match solve(&eq) {
            Outcome::TwoRoots(x1, x2) => {
                prop_assert!(eq.evaluate(x1).abs() <= residual_tolerance(&eq, x1));
                prop_assert!(eq.evaluate(x2).abs() <= residual_tolerance(&eq, x2));
            }
            other => prop_assert!(false, "expected two roots, got {:?}", other),
        }
    }

    /// Property: solving is a pure function of the coefficients
    #[test]
    fn prop_solve_is_deterministic(a in coefficient(), b in coefficient(), c in coefficient()) {
        let eq = Equation::new(a, b, c).unwrap();
        prop_assert_eq!(solve(&eq), solve(&eq));
    }

    /// Property: any finite triple, including extreme magnitudes, is classified
    /// and never produces a NaN root
    #[test]
    fn prop_every_finite_triple_is_solved(
        a in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
        b in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
        c in proptest::num::f64::NORMAL | proptest::num::f64::ZERO
    ) {
        let eq = Equation::new(a, b, c).unwrap();
        let outcome = solve(&eq);
        for root in outcome.roots() {
            prop_assert!(!root.is_nan(), "{:?} -> {:?}", eq, outcome);
        }
    }

    /// Property: coefficients whose discriminant overflows still yield finite
    /// roots that satisfy the equation
    #[test]
    fn prop_huge_coefficients_give_finite_roots(
        a in huge_coefficient(),
        b in huge_coefficient(),
        c in huge_coefficient()
    ) {
        let eq = Equation::new(a, b, c).unwrap();
        let outcome = solve(&eq);
        let normalized = eq.normalized();
        for root in outcome.roots() {
            prop_assert!(root.is_finite(), "{:?} -> {:?}", eq, outcome);
            prop_assert!(
                normalized.evaluate(root).abs() <= residual_tolerance(&normalized, root),
                "{:?} -> {:?}", eq, outcome
            );
        }
    }

    /// Property: the outcome kind agrees with the dispatch rules
    #[test]
    fn prop_outcome_matches_strategy(a in coefficient(), b in coefficient(), c in coefficient()) {
        let eq = Equation::new(a, b, c).unwrap();
        let outcome = solve(&eq);
        match SolveStrategy::classify(&eq) {
            SolveStrategy::Quadratic => prop_assert!(!matches!(outcome, Outcome::AllReals)),
            SolveStrategy::Linear => prop_assert!(matches!(outcome, Outcome::OneRoot(_))),
            SolveStrategy::Trivial => prop_assert!(
                matches!(outcome, Outcome::AllReals | Outcome::NoRoots)
            ),
        }
    }

    /// Property: linear roots satisfy b·x + c ≈ 0
    #[test]
    fn prop_linear_root_satisfies_equation(b in coefficient(), c in coefficient()) {
        prop_assume!(!is_zero(b));
        let eq = Equation::new(0.0, b, c).unwrap();
        match solve(&eq) {
            Outcome::OneRoot(x) => prop_assert!((b * x + c).abs() <= 1e-9 * c.abs().max(1.0)),
            other => prop_assert!(false, "expected one root, got {:?}", other),
        }
    }

    /// Property: formatted numbers never carry more than four significant digits
    #[test]
    fn prop_formatting_uses_at_most_four_digits(value in -1e12f64..1e12) {
        let text = format_general(value, 4);
        let mantissa = text.split('e').next().unwrap_or(&text);
        let digits: String = mantissa.chars().filter(|ch| ch.is_ascii_digit()).collect();
        let significant = digits.trim_start_matches('0');
        prop_assert!(significant.len() <= 4, "{} has too many digits", text);
        prop_assert!(!mantissa.contains('.') || !mantissa.ends_with('0'));
    }

    /// Property: formatting round-trips within the precision
    #[test]
    fn prop_formatting_preserves_value(value in 1e-3f64..1e6) {
        let parsed: f64 = format_general(value, 4).parse().unwrap();
        prop_assert!((parsed - value).abs() <= value * 6e-4);
    }
}
