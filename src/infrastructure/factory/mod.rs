//! Component factory functions.
//!
//! Wires configuration to concrete adapters so the CLI never names a
//! backend directly.

pub mod conflict;
pub mod solver;

pub use conflict::{build_conflict_resolver, build_scorer};
pub use solver::{build_orchestrator, build_solver};
