//! Binary assignment matrix produced by a match.

use serde::Serialize;

use super::affinity::AffinityMatrix;

/// One selected pairing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pairing {
    /// Row-entity index.
    pub row: usize,
    /// Column-entity index.
    pub col: usize,
    /// Affinity of the pairing in the matrix passed to `pairings`.
    pub affinity: f64,
}

/// N x N binary matrix; `selected(i, j)` iff edge `(i, j)` is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    n: usize,
    cells: Vec<bool>,
}

impl Assignment {
    /// All-zero assignment over `n` entities.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build from selected positions. Out-of-range positions are ignored.
    #[must_use]
    pub fn from_pairs(n: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut assignment = Self::empty(n);
        for (row, col) in pairs {
            if row < n && col < n {
                assignment.cells[row * n + col] = true;
            }
        }
        assignment
    }

    /// Number of entities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has zero dimension.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Whether `(row, col)` is selected. Out-of-range positions are not.
    #[must_use]
    pub fn selected(&self, row: usize, col: usize) -> bool {
        row < self.n && col < self.n && self.cells[row * self.n + col]
    }

    /// Sum over the matrix (number of selected edges).
    #[must_use]
    pub fn total(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of selections in `row`.
    #[must_use]
    pub fn row_total(&self, row: usize) -> usize {
        (0..self.n).filter(|&col| self.selected(row, col)).count()
    }

    /// Number of selections in `col`.
    #[must_use]
    pub fn column_total(&self, col: usize) -> usize {
        (0..self.n).filter(|&row| self.selected(row, col)).count()
    }

    /// Selected positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(move |(idx, _)| (idx / n, idx % n))
    }

    /// Selected pairings annotated with their affinities.
    #[must_use]
    pub fn pairings(&self, affinity: &AffinityMatrix) -> Vec<Pairing> {
        self.positions()
            .map(|(row, col)| Pairing {
                row,
                col,
                affinity: affinity.get(row, col),
            })
            .collect()
    }

    /// Dense 0/1 rows, for reporting.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.n.max(1))
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}
