//! Match orchestration.
//!
//! Runs the full pipeline for one affinity matrix:
//!
//! ```text
//! Initialized -> Suppressed -> Trimmed -> Formulated -> Solved -> Extracted -> Reported
//!                    \             \            \          \          \
//!                     +-------------+------------+----------+----------+--> Failed
//! ```
//!
//! Invalid parameters are errors. Everything that goes wrong after that
//! (starved entities, infeasible LP, solver failure, empty assignment) is an
//! expected outcome and comes back as [`MatchStatus::NotConverged`] together
//! with an all-zero assignment.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::extract::extract;
use super::formulate::formulate;
use super::trim::{starved_entities, trim, Side, StarvedEntity};
use crate::domain::affinity::AffinityMatrix;
use crate::domain::assignment::{Assignment, Pairing};
use crate::domain::bounds::LoadBounds;
use crate::domain::conflict::ConflictSet;
use crate::domain::error::DomainError;
use crate::error::Result;
use crate::port::outbound::solver::{IlpProblem, SolutionStatus, Solver};

/// Parameters of a single match run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchParams {
    /// Load bounds on both sides.
    pub bounds: LoadBounds,
    /// Lowest entries zeroed per row before formulating.
    pub n_trim: usize,
    /// Solve the integral problem instead of the LP relaxation.
    pub integral: bool,
}

impl MatchParams {
    /// Exact-degree matching with `n_match` partners per entity.
    #[must_use]
    pub const fn exact(n_match: usize, n_trim: usize) -> Self {
        Self {
            bounds: LoadBounds::exact(n_match),
            n_trim,
            integral: false,
        }
    }
}

/// Pipeline stage reached by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Initialized,
    /// Diagonal and conflicts replaced by the sentinel.
    Suppressed,
    Trimmed,
    Formulated,
    Solved,
    Extracted,
    /// Terminal success state.
    Reported,
    /// Terminal failure state.
    Failed,
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Initialized => "initialized",
            Self::Suppressed => "suppressed",
            Self::Trimmed => "trimmed",
            Self::Formulated => "formulated",
            Self::Solved => "solved",
            Self::Extracted => "extracted",
            Self::Reported => "reported",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Why a run did not converge.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// Diagonal and conflicts alone leave entities below their lower bound.
    Overconstrained { starved: Vec<StarvedEntity> },
    /// Some entities cannot reach their lower bound after trimming.
    DegenerateTrim { starved: Vec<StarvedEntity> },
    /// Solver finished without an optimal solution.
    Solver(SolutionStatus),
    /// Solver adapter rejected the problem.
    SolverError(String),
    /// Solution did not line up with the edge variables.
    SolutionShape(DomainError),
    /// Solver claimed optimality but nothing was selected.
    EmptyAssignment,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overconstrained { starved } => {
                write!(f, "{} entities have too few candidates after conflicts", starved.len())?;
                write_example(f, starved)
            }
            Self::DegenerateTrim { starved } => {
                write!(f, "{} entities have too few candidates after trimming", starved.len())?;
                write_example(f, starved)
            }
            Self::Solver(SolutionStatus::Timeout) => write!(f, "solver timeout"),
            Self::Solver(status) => write!(f, "solver status: {status}"),
            Self::SolverError(msg) => write!(f, "solver error: {msg}"),
            Self::SolutionShape(err) => write!(f, "unusable solution: {err}"),
            Self::EmptyAssignment => write!(f, "solution selects no pairs"),
        }
    }
}

fn write_example(f: &mut fmt::Formatter<'_>, starved: &[StarvedEntity]) -> fmt::Result {
    let Some(first) = starved.first() else {
        return Ok(());
    };
    let side = match first.side {
        Side::Row => "row",
        Side::Column => "column",
    };
    write!(
        f,
        " (e.g. {side} {} keeps {} of {} required)",
        first.index, first.candidates, first.required
    )
}

impl FailureReason {
    /// What the user can change to make the next run converge.
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Overconstrained { .. } => "consider relaxing the conflicts or load bounds",
            _ => "consider reducing the trim count",
        }
    }
}

/// Convergence verdict of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchStatus {
    Converged,
    NotConverged(FailureReason),
}

/// Everything a caller needs to report a run.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// Binary assignment; all zero unless converged.
    pub assignment: Assignment,
    /// Matrix handed to the formulator (suppressed and trimmed).
    pub prepared: AffinityMatrix,
    /// Last stage reached: `Reported` or `Failed`.
    pub stage: MatchStage,
    /// Stage at which the run failed, if it did.
    pub failed_at: Option<MatchStage>,
    /// Convergence verdict.
    pub status: MatchStatus,
    /// Selected pairs with their input affinities.
    pub pairings: Vec<Pairing>,
    /// Sum of selected affinities.
    pub total_affinity: f64,
    /// Number of LP edge variables.
    pub variables: usize,
    /// Solver backend used.
    pub solver: &'static str,
}

impl MatchOutcome {
    /// Whether an assignment was produced.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == MatchStatus::Converged
    }

    /// Human-readable convergence message.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.status {
            MatchStatus::Converged => "Successfully assigned all the match!".to_string(),
            MatchStatus::NotConverged(reason) => {
                format!("Problem does not converge ({reason}); {}", reason.hint())
            }
        }
    }
}

/// Sequences suppression, trimming, formulation, solving and extraction.
///
/// Holds no per-run state; one orchestrator can serve any number of runs.
pub struct MatchOrchestrator {
    solver: Arc<dyn Solver>,
    params: MatchParams,
}

impl MatchOrchestrator {
    /// Create an orchestrator for `params` backed by `solver`.
    pub fn new(solver: Arc<dyn Solver>, params: MatchParams) -> Self {
        Self { solver, params }
    }

    /// Parameters used for every run.
    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    /// Match the entities of `affinity` while honouring `conflicts`.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid load bounds. Non-convergence is
    /// reported through [`MatchOutcome::status`].
    pub fn run(&self, affinity: &AffinityMatrix, conflicts: &ConflictSet) -> Result<MatchOutcome> {
        self.params.bounds.validate()?;

        let n = affinity.len();
        let mut run = Run::new(n, self.solver.name());
        info!(
            entities = n,
            n_trim = self.params.n_trim,
            solver = self.solver.name(),
            "Solving a matching problem"
        );

        let in_range = conflicts.within(n).count();
        if in_range < conflicts.len() {
            debug!(
                dropped = conflicts.len() - in_range,
                "Ignoring out-of-range conflict pairs"
            );
        }
        let suppressed = affinity.suppress_diagonal().suppress_conflicts(conflicts);
        run.advance(MatchStage::Suppressed);

        let starved = starved_entities(&suppressed, &self.params.bounds);
        if !starved.is_empty() {
            warn!(
                starved = starved.len(),
                "Conflicts left entities without enough candidates"
            );
            return Ok(run.fail(suppressed, FailureReason::Overconstrained { starved }));
        }

        let prepared = trim(&suppressed, self.params.n_trim);
        run.advance(MatchStage::Trimmed);

        let starved = starved_entities(&prepared, &self.params.bounds);
        if !starved.is_empty() {
            warn!(
                starved = starved.len(),
                n_trim = self.params.n_trim,
                "Trimming left entities without enough candidates"
            );
            return Ok(run.fail(prepared, FailureReason::DegenerateTrim { starved }));
        }

        let formulation = formulate(&prepared, &self.params.bounds);
        run.variables = formulation.edges.len();
        run.advance(MatchStage::Formulated);
        debug!(
            variables = formulation.problem.num_vars(),
            constraints = formulation.problem.constraints.len(),
            "Formulated assignment LP"
        );

        let solved = if self.params.integral {
            self.solver
                .solve_ilp(&IlpProblem::all_integer(formulation.problem))
        } else {
            self.solver.solve_lp(&formulation.problem)
        };
        let solution = match solved {
            Ok(solution) => solution,
            Err(err) => {
                warn!(error = %err, "Solver rejected the problem");
                return Ok(run.fail(prepared, FailureReason::SolverError(err.to_string())));
            }
        };
        if !solution.is_optimal() {
            warn!(status = %solution.status, "Solver did not find an optimal solution");
            return Ok(run.fail(prepared, FailureReason::Solver(solution.status)));
        }
        run.advance(MatchStage::Solved);

        let assignment = match extract(&solution.values, &formulation.edges, n) {
            Ok(assignment) => assignment,
            Err(err) => return Ok(run.fail(prepared, FailureReason::SolutionShape(err))),
        };
        run.advance(MatchStage::Extracted);

        if assignment.total() == 0 {
            warn!("Solution selects no pairs");
            return Ok(run.fail(prepared, FailureReason::EmptyAssignment));
        }

        let pairings = assignment.pairings(affinity);
        let total_affinity: f64 = pairings.iter().map(|p| p.affinity).sum();
        run.advance(MatchStage::Reported);
        info!(
            pairs = assignment.total(),
            total_affinity,
            objective = solution.objective,
            "Successfully assigned all the match"
        );

        Ok(MatchOutcome {
            assignment,
            prepared,
            stage: run.stage,
            failed_at: None,
            status: MatchStatus::Converged,
            pairings,
            total_affinity,
            variables: run.variables,
            solver: run.solver,
        })
    }
}

/// Bookkeeping for one pass through the pipeline.
struct Run {
    n: usize,
    stage: MatchStage,
    variables: usize,
    solver: &'static str,
}

impl Run {
    fn new(n: usize, solver: &'static str) -> Self {
        Self {
            n,
            stage: MatchStage::Initialized,
            variables: 0,
            solver,
        }
    }

    fn advance(&mut self, next: MatchStage) {
        debug!(from = %self.stage, to = %next, "Match stage");
        self.stage = next;
    }

    fn fail(self, prepared: AffinityMatrix, reason: FailureReason) -> MatchOutcome {
        warn!(stage = %self.stage, %reason, "Match does not converge");
        MatchOutcome {
            assignment: Assignment::empty(self.n),
            prepared,
            stage: MatchStage::Failed,
            failed_at: Some(self.stage),
            status: MatchStatus::NotConverged(reason),
            pairings: Vec::new(),
            total_affinity: 0.0,
            variables: self.variables,
            solver: self.solver,
        }
    }
}
