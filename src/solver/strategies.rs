use crate::core::{is_zero, Equation, Outcome};
use tracing::debug;

/// `a ≠ 0`: quadratic formula on the discriminant.
///
/// A discriminant below zero means no real roots, even when it is within
/// `EPS` of zero; only `D ∈ [0, EPS)` collapses into a double root.
///
/// When `b² − 4ac` overflows, the roots are taken from the normalized
/// equation instead, whose discriminant is always finite.
pub fn solve_quadratic(equation: &Equation) -> Outcome {
    let discriminant = equation.discriminant();
    if discriminant.is_finite() {
        quadratic_roots(equation, discriminant)
    } else {
        let normalized = equation.normalized();
        debug!(discriminant, "discriminant overflowed, normalizing coefficients");
        quadratic_roots(&normalized, normalized.discriminant())
    }
}

fn quadratic_roots(equation: &Equation, discriminant: f64) -> Outcome {
    let (a, b) = (equation.a(), equation.b());
    debug!(discriminant, "quadratic discriminant");

    if discriminant < 0.0 {
        Outcome::NoRoots
    } else if is_zero(discriminant) {
        Outcome::OneRoot(-b / (2.0 * a))
    } else {
        let sqrt_d = discriminant.sqrt();
        Outcome::TwoRoots((-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a))
    }
}

/// `a ≈ 0, b ≠ 0`: `b·x + c = 0`.
pub fn solve_linear(equation: &Equation) -> Outcome {
    if is_zero(equation.c()) {
        // exactly zero, not -c/b
        Outcome::OneRoot(0.0)
    } else {
        Outcome::OneRoot(-equation.c() / equation.b())
    }
}

/// `a ≈ 0, b ≈ 0`: reduces to `c = 0`.
pub fn solve_trivial(equation: &Equation) -> Outcome {
    if is_zero(equation.c()) {
        Outcome::AllReals
    } else {
        Outcome::NoRoots
    }
}
