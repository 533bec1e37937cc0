//! Bidirectional mapping between matrix positions and LP edge variables.
//!
//! The formulator assigns variables in row-major order over candidate
//! entries; the extractor inverts the mapping through the same index.

use std::collections::HashMap;

use super::affinity::AffinityMatrix;

/// One candidate pairing and its LP variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Row-entity index.
    pub row: usize,
    /// Column-entity index.
    pub col: usize,
    /// Affinity used as the objective coefficient.
    pub weight: f64,
}

/// Arena of edge descriptors with forward and reverse lookup.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    edges: Vec<Edge>,
    by_position: HashMap<(usize, usize), usize>,
}

impl EdgeIndex {
    /// Build the index over every candidate entry of `matrix`.
    #[must_use]
    pub fn from_matrix(matrix: &AffinityMatrix) -> Self {
        let mut index = Self::default();
        for row in 0..matrix.len() {
            for col in 0..matrix.len() {
                if matrix.is_candidate(row, col) {
                    index.push(Edge {
                        row,
                        col,
                        weight: matrix.get(row, col),
                    });
                }
            }
        }
        index
    }

    fn push(&mut self, edge: Edge) {
        self.by_position.insert((edge.row, edge.col), self.edges.len());
        self.edges.push(edge);
    }

    /// Number of edge variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no candidate edge survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edge behind variable `var`.
    #[must_use]
    pub fn edge(&self, var: usize) -> Option<&Edge> {
        self.edges.get(var)
    }

    /// Variable for matrix position `(row, col)`, if it is a candidate.
    #[must_use]
    pub fn variable(&self, row: usize, col: usize) -> Option<usize> {
        self.by_position.get(&(row, col)).copied()
    }

    /// Iterate `(variable, edge)` in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Edge)> {
        self.edges.iter().enumerate()
    }
}
