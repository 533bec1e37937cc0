//! Conflict-of-interest pairs.

use std::collections::BTreeSet;

use serde::Serialize;

/// Ordered pair meaning "entity `row` must not be assigned to entity `col`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ConflictPair {
    /// Row-entity index.
    pub row: usize,
    /// Column-entity index.
    pub col: usize,
}

impl ConflictPair {
    /// Create a new pair.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The same pair seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Whether both indices fall inside `0..n`.
    #[must_use]
    pub const fn in_range(self, n: usize) -> bool {
        self.row < n && self.col < n
    }
}

/// Ordered set of conflict pairs.
///
/// Iteration order is deterministic so two resolutions of the same roster
/// compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictSet {
    pairs: BTreeSet<ConflictPair>,
}

impl ConflictSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single ordered pair. Self-pairs are ignored.
    pub fn insert(&mut self, pair: ConflictPair) {
        if pair.row != pair.col {
            self.pairs.insert(pair);
        }
    }

    /// Insert `(a, b)` and `(b, a)`.
    pub fn insert_symmetric(&mut self, a: usize, b: usize) {
        let pair = ConflictPair::new(a, b);
        self.insert(pair);
        self.insert(pair.reversed());
    }

    /// Whether `(row, col)` is forbidden.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.pairs.contains(&ConflictPair::new(row, col))
    }

    /// Number of ordered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate all pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = &ConflictPair> {
        self.pairs.iter()
    }

    /// Iterate pairs whose indices both fall inside `0..n`.
    pub fn within(&self, n: usize) -> impl Iterator<Item = ConflictPair> + '_ {
        self.pairs.iter().copied().filter(move |pair| pair.in_range(n))
    }
}

impl FromIterator<(usize, usize)> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (a, b) in iter {
            set.insert_symmetric(a, b);
        }
        set
    }
}
