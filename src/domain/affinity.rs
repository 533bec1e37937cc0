//! Dense square affinity matrix.
//!
//! Entry `(i, j)` is the desirability of assigning row-entity `i` to
//! column-entity `j`. Matrices are immutable values: every transform returns
//! a new matrix so pipeline stages can be tested in isolation.

use serde::Serialize;

use super::conflict::ConflictSet;
use super::error::DomainError;

/// Value written to forbidden entries (diagonal and conflicts).
///
/// Forbidden entries never become edge variables, so an input score of
/// exactly this value off the diagonal would read as forbidden. Input
/// loading rejects such scores; see [`AffinityMatrix::first_forbidden`].
pub const SENTINEL: f64 = -1000.0;

/// Square, dense, row-major matrix of affinity scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl AffinityMatrix {
    /// Build a matrix from rows, validating shape and values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyMatrix`] for zero rows,
    /// [`DomainError::NotSquare`] if any row length differs from the row count,
    /// and [`DomainError::NonFiniteAffinity`] for NaN or infinite scores.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DomainError> {
        let n = rows.len();
        if n == 0 {
            return Err(DomainError::EmptyMatrix);
        }

        let mut values = Vec::with_capacity(n * n);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != n {
                return Err(DomainError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
            if let Some((col, &value)) = entries.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(DomainError::NonFiniteAffinity { row, col, value });
            }
            values.extend(entries);
        }

        Ok(Self { n, values })
    }

    /// Number of entities (rows == columns).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    /// Always false; empty matrices are rejected at construction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Score at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "index ({row}, {col}) out of range");
        self.values[row * self.n + col]
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.n;
        &self.values[start..start + self.n]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.n)
    }

    /// Return a copy with the diagonal forced to [`SENTINEL`].
    #[must_use]
    pub fn suppress_diagonal(&self) -> Self {
        let mut next = self.clone();
        for i in 0..self.n {
            next.values[i * self.n + i] = SENTINEL;
        }
        next
    }

    /// Return a copy with every in-range conflict entry forced to [`SENTINEL`].
    ///
    /// Pairs referencing entities outside `0..N` are dropped; conflict lists
    /// may name people outside the current working subset.
    #[must_use]
    pub fn suppress_conflicts(&self, conflicts: &ConflictSet) -> Self {
        let mut next = self.clone();
        for pair in conflicts.within(self.n) {
            next.values[pair.row * self.n + pair.col] = SENTINEL;
        }
        next
    }

    /// Build from row-major values already known to be `n * n` finite scores.
    pub(crate) fn from_parts(n: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), n * n);
        Self { n, values }
    }

    /// Whether `(row, col)` can become an edge variable.
    ///
    /// Diagonal, forbidden (sentinel) and trimmed (exactly zero) entries are
    /// not candidates.
    #[must_use]
    pub fn is_candidate(&self, row: usize, col: usize) -> bool {
        let value = self.get(row, col);
        row != col && value != SENTINEL && value != 0.0
    }

    /// First off-diagonal entry that already holds [`SENTINEL`], row-major.
    #[must_use]
    pub fn first_forbidden(&self) -> Option<(usize, usize)> {
        (0..self.n)
            .flat_map(|row| (0..self.n).map(move |col| (row, col)))
            .find(|&(row, col)| row != col && self.get(row, col) == SENTINEL)
    }

    /// Number of candidate edges in a row.
    #[must_use]
    pub fn row_candidates(&self, row: usize) -> usize {
        (0..self.n).filter(|&col| self.is_candidate(row, col)).count()
    }

    /// Number of candidate edges in a column.
    #[must_use]
    pub fn column_candidates(&self, col: usize) -> usize {
        (0..self.n).filter(|&row| self.is_candidate(row, col)).count()
    }
}
