//! Matching pipeline: trim, formulate, solve, extract.

pub mod extract;
pub mod formulate;
pub mod orchestrator;
pub mod trim;

pub use extract::{extract, is_selected, SELECTION_THRESHOLD};
pub use formulate::{formulate, Formulation};
pub use orchestrator::{
    FailureReason, MatchOrchestrator, MatchOutcome, MatchParams, MatchStage, MatchStatus,
};
pub use trim::{starved_entities, trim, Side, StarvedEntity};
