//! Outbound adapters (driven side).

pub mod similarity;
pub mod solver;
