//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points of the matcher. They are traits that
//! adapters implement to plug in external capabilities.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │      Application        │
//!                 │  (conflicts, matching)  │
//!                 └───────────┬─────────────┘
//!                             │
//!              ┌──────────────┴──────────────┐
//!              ▼                             ▼
//!        ┌───────────┐                ┌──────────────┐
//!        │  Solver   │                │ NameSimilarity│
//!        │  (HiGHS)  │                │   (strsim)    │
//!        └───────────┘                └──────────────┘
//! ```

pub mod outbound;

pub use outbound::similarity::NameSimilarity;
pub use outbound::solver::{
    IlpProblem, LpProblem, LpSolution, Sense, SolutionStatus, Solver,
};
