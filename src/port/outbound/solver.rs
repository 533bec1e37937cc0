//! Solver port for linear and integer programming.
//!
//! Defines the trait the match orchestrator uses to solve the assignment LP.
//! Supports both the linear relaxation (LP) and the integral formulation
//! (ILP) of the same problem.
//!
//! # Overview
//!
//! - [`Solver`]: Core LP/ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Linear and integer programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, etc.) and
/// provide a unified interface for optimization problems.
///
/// # Implementation Notes
///
/// - Infeasible, unbounded and timed-out problems are reported through
///   [`SolutionStatus`], not as errors
/// - `Err` is reserved for problems the backend cannot even represent
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve a linear programming problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is malformed (for example a constraint
    /// references a variable that does not exist).
    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution>;

    /// Solve an integer linear programming problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is malformed.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Direction of optimisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    /// Minimise `c^T * x`.
    #[default]
    Minimise,
    /// Maximise `c^T * x`.
    Maximise,
}

/// Linear programming problem definition.
///
/// ```text
/// optimise    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    pub objective: Vec<f64>,

    /// Whether the objective is minimised or maximised.
    pub sense: Sense,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a minimisation problem with `num_vars` zero-cost,
    /// non-negative variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![0.0; num_vars],
            sense: Sense::Minimise,
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Evaluate the objective at `values`.
    #[must_use]
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, x)| c * x).sum()
    }
}

/// Integer linear programming problem definition.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP problem from an LP with specified integer variables.
    #[must_use]
    pub const fn new(lp: LpProblem, integer_vars: Vec<usize>) -> Self {
        Self { lp, integer_vars }
    }

    /// Create an ILP with every variable integral.
    #[must_use]
    pub fn all_integer(lp: LpProblem) -> Self {
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Solution to a linear or integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable; all zero unless optimal.
    pub values: Vec<f64>,

    /// Objective function value.
    pub objective: f64,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Non-optimal result with an all-zero value vector.
    #[must_use]
    pub fn failed(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![0.0; num_vars],
            objective: 0.0,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Configured time limit was reached before optimality.
    Timeout,

    /// Solver encountered an internal or numerical error.
    Error,
}

impl std::fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Optimal => "optimal",
            Self::Infeasible => "infeasible",
            Self::Unbounded => "unbounded",
            Self::Timeout => "timeout",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}
