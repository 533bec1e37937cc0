//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the matcher's use cases.

pub mod conflict;
pub mod matching;
