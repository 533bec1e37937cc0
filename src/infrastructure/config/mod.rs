//! Infrastructure configuration modules.

pub mod conflict;
pub mod logging;
pub mod matching;
pub mod settings;
pub mod solver;
