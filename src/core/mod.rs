//! Core data model: the equation being solved and the outcome it produces.

pub mod equation;
pub mod outcome;

pub use equation::{is_zero, Equation, EPS};
pub use outcome::{Outcome, OutcomeKind};
