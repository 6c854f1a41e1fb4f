//! Coefficients of `a·x² + b·x + c = 0` and the near-zero comparison that
//! drives every branch of the solver.

use serde::Serialize;
use std::fmt;

/// Absolute tolerance used by [`is_zero`].
///
/// This is not scaled by the magnitude of the coefficients, so an equation
/// such as `1e-15·x² + x = 0` is classified as linear. Known limitation.
pub const EPS: f64 = 1e-10;

/// Returns `true` when `value` lies strictly inside `(-EPS, EPS)`.
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPS
}

/// Three finite coefficients of a quadratic equation.
///
/// Construction goes through [`Equation::new`], which rejects non-finite
/// values, so every `Equation` handed to the solver is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equation {
    a: f64,
    b: f64,
    c: f64,
}

impl Equation {
    /// Build an equation, returning `None` if any coefficient is NaN or infinite.
    pub fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        if a.is_finite() && b.is_finite() && c.is_finite() {
            Some(Self { a, b, c })
        } else {
            None
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// `b² − 4ac`
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// The same equation divided through by its largest coefficient
    /// magnitude, so every coefficient lies in `[-1, 1]`. Roots are unchanged.
    ///
    /// The zero equation is returned as is.
    pub fn normalized(&self) -> Self {
        let scale = self.a.abs().max(self.b.abs()).max(self.c.abs());
        if scale == 0.0 {
            return *self;
        }
        Self {
            a: self.a / scale,
            b: self.b / scale,
            c: self.c / scale,
        }
    }

    /// Evaluate the left-hand side at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}·x² + {}·x + {} = 0", self.a, self.b, self.c)
    }
}
