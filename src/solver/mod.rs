//! Classification of an equation and dispatch to a solving strategy.
//!
//! Solving is a pure function of the coefficients: the same [`Equation`]
//! always yields the same [`Outcome`].

mod strategies;

pub use strategies::{solve_linear, solve_quadratic, solve_trivial};

use crate::core::{is_zero, Equation, Outcome};
use std::fmt;
use tracing::{debug, info_span};

/// Which solving routine applies to an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `a ≠ 0`
    Quadratic,
    /// `a ≈ 0`, `b ≠ 0`
    Linear,
    /// `a ≈ 0`, `b ≈ 0`
    Trivial,
}

impl Strategy {
    /// First matching branch wins: leading coefficient, then linear one.
    pub fn classify(equation: &Equation) -> Self {
        if !is_zero(equation.a()) {
            Strategy::Quadratic
        } else if !is_zero(equation.b()) {
            Strategy::Linear
        } else {
            Strategy::Trivial
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Quadratic => "quadratic",
            Strategy::Linear => "linear",
            Strategy::Trivial => "trivial",
        }
    }

    pub fn apply(&self, equation: &Equation) -> Outcome {
        match self {
            Strategy::Quadratic => solve_quadratic(equation),
            Strategy::Linear => solve_linear(equation),
            Strategy::Trivial => solve_trivial(equation),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solve `a·x² + b·x + c = 0`.
///
/// # Panics
///
/// Panics if a coefficient is not finite. [`Equation::new`] already refuses
/// such values, so reaching this is a bug in the caller.
pub fn solve(equation: &Equation) -> Outcome {
    assert!(
        equation.a().is_finite() && equation.b().is_finite() && equation.c().is_finite(),
        "non-finite coefficient reached the solver: {:?}",
        equation
    );

    let strategy = Strategy::classify(equation);
    let _span = info_span!("solve", strategy = strategy.name()).entered();

    let outcome = strategy.apply(equation);
    debug!(kind = %outcome.kind(), "equation classified");
    outcome
}
