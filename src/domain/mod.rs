//! Matching domain types.
//!
//! Pure value types with validated constructors; nothing here talks to a
//! solver or touches the filesystem.

pub mod affinity;
pub mod assignment;
pub mod bounds;
pub mod conflict;
pub mod constraint;
pub mod edge;
pub mod error;
pub mod roster;

pub use affinity::{AffinityMatrix, SENTINEL};
pub use assignment::{Assignment, Pairing};
pub use bounds::LoadBounds;
pub use conflict::{ConflictPair, ConflictSet};
pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use edge::{Edge, EdgeIndex};
pub use error::DomainError;
pub use roster::{Entity, Roster};
