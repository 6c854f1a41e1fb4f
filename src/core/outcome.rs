use serde::Serialize;
use std::fmt;

/// Solution set of an [`Equation`](super::Equation).
///
/// There is no "unsolved" state: an `Outcome` only exists once the solver
/// has classified the equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    NoRoots,
    OneRoot(f64),
    /// `(−b + √D) / 2a` first, `(−b − √D) / 2a` second.
    TwoRoots(f64, f64),
    /// Every real number satisfies the equation (`0 = 0`).
    AllReals,
}

/// Field-less classification of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    NoRoots,
    OneRoot,
    TwoRoots,
    AllReals,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::NoRoots => OutcomeKind::NoRoots,
            Outcome::OneRoot(_) => OutcomeKind::OneRoot,
            Outcome::TwoRoots(_, _) => OutcomeKind::TwoRoots,
            Outcome::AllReals => OutcomeKind::AllReals,
        }
    }

    /// Root values in outcome order. Empty for `NoRoots` and `AllReals`.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Outcome::NoRoots | Outcome::AllReals => Vec::new(),
            Outcome::OneRoot(x) => vec![x],
            Outcome::TwoRoots(x1, x2) => vec![x1, x2],
        }
    }
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::NoRoots => "no_roots",
            OutcomeKind::OneRoot => "one_root",
            OutcomeKind::TwoRoots => "two_roots",
            OutcomeKind::AllReals => "all_reals",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
