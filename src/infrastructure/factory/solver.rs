//! Solver factory.
//!
//! Provides factory functions for constructing the LP backend used by the
//! match orchestrator.

use std::sync::Arc;

use crate::adapter::outbound::solver::HiGHSSolver;
use crate::application::matching::MatchOrchestrator;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::solver::Solver;

/// Build the HiGHS solver configured by `config.solver`.
///
/// # Errors
///
/// Returns an error when the solver section is invalid.
#[allow(clippy::result_large_err)]
pub fn build_solver(config: &Config) -> Result<Arc<dyn Solver>> {
    let options = config.solver.highs_options()?;
    Ok(Arc::new(HiGHSSolver::with_options(options)))
}

/// Build a match orchestrator from the matching and solver sections.
///
/// # Errors
///
/// Returns an error when the solver section is invalid.
#[allow(clippy::result_large_err)]
pub fn build_orchestrator(config: &Config) -> Result<MatchOrchestrator> {
    Ok(MatchOrchestrator::new(
        build_solver(config)?,
        config.matching.to_params(config.solver.integral),
    ))
}
