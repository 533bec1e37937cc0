//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external collaborators of the matcher: the
//! LP solver and the fuzzy name matcher used for conflict lists.

pub mod similarity;
pub mod solver;
