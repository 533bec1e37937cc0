//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::solvers::SolutionStatus as GoodLpStatus;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable,
};
use tracing::{debug, warn};

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::outbound::solver::{
    IlpProblem, LpProblem, LpSolution, Sense, SolutionStatus, Solver,
};

/// Tuning knobs for the HiGHS backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighsOptions {
    /// Wall-clock limit for a single solve.
    pub time_limit: Option<Duration>,
    /// Let HiGHS print its own progress log to stdout.
    pub verbose: bool,
}

/// HiGHS-based LP/ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    options: HighsOptions,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a HiGHS solver with explicit options.
    pub fn with_options(options: HighsOptions) -> Self {
        Self { options }
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        solve_with_good_lp(problem, &[], self.options)
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        solve_with_good_lp(&problem.lp, &problem.integer_vars, self.options)
    }
}

fn linear_expression(vars: &[Variable], terms: &[(usize, f64)]) -> Result<Expression> {
    terms
        .iter()
        .map(|&(idx, coef)| {
            vars.get(idx).map(|var| coef * *var).ok_or_else(|| {
                Error::Solver(format!(
                    "constraint references variable {idx} but problem has {}",
                    vars.len()
                ))
            })
        })
        .sum()
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(
    problem: &LpProblem,
    integer_vars: &[usize],
    options: HighsOptions,
) -> Result<LpSolution> {
    let n = problem.num_vars();
    if problem.bounds.len() != n {
        return Err(Error::Solver(format!(
            "problem has {n} objective coefficients but {} variable bounds",
            problem.bounds.len()
        )));
    }

    // Handle empty problem
    if n == 0 {
        let status = if problem.constraints.iter().all(|c| match c.sense {
            ConstraintSense::GreaterEqual => c.rhs <= 0.0,
            ConstraintSense::LessEqual => c.rhs >= 0.0,
            ConstraintSense::Equal => c.rhs == 0.0,
        }) {
            SolutionStatus::Optimal
        } else {
            SolutionStatus::Infeasible
        };
        return Ok(LpSolution::failed(0, status));
    }

    let mut is_integer = vec![false; n];
    for &idx in integer_vars {
        if let Some(flag) = is_integer.get_mut(idx) {
            *flag = true;
        }
    }

    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();
        if let Some(lb) = bounds.lower {
            v = v.min(lb);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub);
        }
        if is_integer[i] {
            v = v.integer();
        }
        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| *c * *v)
        .sum();

    let unsolved = match problem.sense {
        Sense::Minimise => vars.minimise(objective),
        Sense::Maximise => vars.maximise(objective),
    };
    let mut model = unsolved.using(highs);
    model.set_verbose(options.verbose);
    if let Some(limit) = options.time_limit {
        model = model.set_time_limit(limit.as_secs_f64());
    }

    for constr in &problem.constraints {
        let lhs = linear_expression(&var_list, &constr.terms)?;
        let rhs = constr.rhs;

        model = match constr.sense {
            ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
            ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
            ConstraintSense::Equal => model.with(constraint!(lhs == rhs)),
        };
    }

    debug!(
        variables = n,
        constraints = problem.constraints.len(),
        integer = integer_vars.len(),
        "Solving with HiGHS"
    );

    match model.solve() {
        Ok(solution) => {
            let status = match solution.status() {
                // Default MIP gap tolerance; the incumbent is accepted.
                GoodLpStatus::Optimal | GoodLpStatus::GapLimit => SolutionStatus::Optimal,
                GoodLpStatus::TimeLimit => {
                    warn!(limit = ?options.time_limit, "HiGHS stopped at a limit");
                    return Ok(LpSolution::failed(n, SolutionStatus::Timeout));
                }
            };

            let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();
            let objective = problem.objective_value(&values);

            Ok(LpSolution {
                values,
                objective,
                status,
            })
        }
        Err(err) => {
            let status = match err {
                ResolutionError::Infeasible => SolutionStatus::Infeasible,
                ResolutionError::Unbounded => SolutionStatus::Unbounded,
                other => {
                    warn!(error = %other, "HiGHS failed");
                    SolutionStatus::Error
                }
            };
            Ok(LpSolution::failed(n, status))
        }
    }
}
