//! Mathematical constraint types for optimization.
//!
//! These types describe the linear constraints of the matching LP and are
//! shared between the formulator and solver adapters.

use serde::{Deserialize, Serialize};

/// A single sparse linear constraint: `sum(coef * x[var]) {>=, <=, =} rhs`.
///
/// Variables not listed in `terms` have a zero coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// `(variable, coefficient)` pairs.
    pub terms: Vec<(usize, f64)>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: f64,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub const fn geq(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            terms,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            terms,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        Self {
            terms,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Unit-coefficient sum over `vars`.
    #[must_use]
    pub fn unit_terms(vars: &[usize]) -> Vec<(usize, f64)> {
        vars.iter().map(|&v| (v, 1.0)).collect()
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<f64>,
    /// Upper bound (None = +infinity).
    pub upper: Option<f64>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Unit interval [0, 1]; binary once marked integer.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            lower: Some(0.0),
            upper: Some(1.0),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}
