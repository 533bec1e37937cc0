//! Domain validation errors for core matching types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by validating constructors such as
//! [`AffinityMatrix::from_rows`](super::affinity::AffinityMatrix::from_rows).
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use mindmatch::domain::affinity::AffinityMatrix;
//! use mindmatch::domain::error::DomainError;
//!
//! // A 2x3 matrix is not square
//! let result = AffinityMatrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 3.0]]);
//!
//! assert!(matches!(result, Err(DomainError::NotSquare { row: 0, .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Affinity matrices must contain at least one entity.
    #[error("affinity matrix cannot be empty")]
    EmptyMatrix,

    /// Every row of the affinity matrix must have exactly N entries.
    #[error("affinity matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of entries found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// Affinity scores must be finite numbers.
    #[error("affinity at ({row}, {col}) is not finite: {value}")]
    NonFiniteAffinity {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The invalid value.
        value: f64,
    },

    /// Input scores must not collide with the forbidden-entry sentinel.
    #[error("affinity at ({row}, {col}) equals the reserved value -1000")]
    ReservedAffinity {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Lower load bounds must not exceed upper load bounds.
    #[error("invalid load bounds for {side}: min {min} > max {max}")]
    InvalidLoadBounds {
        /// Which side of the assignment the bounds apply to.
        side: &'static str,
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// The roster must describe exactly the entities of the affinity matrix.
    #[error("roster has {roster} entities but affinity matrix has {matrix}")]
    RosterSizeMismatch {
        /// Number of roster entries.
        roster: usize,
        /// Dimension of the affinity matrix.
        matrix: usize,
    },

    /// Fuzzy-match thresholds live on a 0-100 scale.
    #[error("similarity threshold must be between 0 and 100, got {0}")]
    InvalidThreshold(u8),

    /// Solver output must cover every edge variable exactly once.
    #[error("solution has {values} values but formulation has {edges} edge variables")]
    SolutionShapeMismatch {
        /// Length of the solution vector.
        values: usize,
        /// Number of edge variables.
        edges: usize,
    },
}
