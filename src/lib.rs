//! Mindmatch - conflict-aware many-to-many matching via linear programming.
//!
//! Given an `N x N` affinity matrix over a roster of entities (reviewers and
//! papers, or conference participants), mindmatch selects for every entity a
//! fixed number of partners so that the summed affinity is maximal, nobody is
//! matched with themselves and no declared conflict of interest is paired.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Matrices, conflicts, load bounds, assignments
//! - **`port`** - `Solver` and `NameSimilarity` traits
//! - **`adapter`** - HiGHS (via `good_lp`), Levenshtein ratio (via `strsim`),
//!   and the `mindmatch` CLI
//! - **`application`** - Conflict resolution and the matching pipeline
//! - **`infrastructure`** - TOML configuration and component factories
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use mindmatch::adapter::outbound::solver::HiGHSSolver;
//! use mindmatch::application::matching::{MatchOrchestrator, MatchParams};
//! use mindmatch::domain::{AffinityMatrix, ConflictSet};
//!
//! fn main() -> mindmatch::error::Result<()> {
//!     let affinity = AffinityMatrix::from_rows(vec![
//!         vec![0.0, 5.0, 1.0],
//!         vec![5.0, 0.0, 1.0],
//!         vec![1.0, 1.0, 0.0],
//!     ])?;
//!
//!     let solver = Arc::new(HiGHSSolver::new());
//!     let orchestrator = MatchOrchestrator::new(solver, MatchParams::exact(1, 0));
//!     let outcome = orchestrator.run(&affinity, &ConflictSet::new())?;
//!     println!("{}", outcome.message());
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
