//! Problem-size reduction by trimming low-affinity edges.
//!
//! The LP has one variable per candidate edge, so zeroing the `n_trim`
//! lowest entries of each row bounds the problem size. A trimmed entry is
//! exactly `0.0`, which the formulator treats as "not a candidate";
//! forbidden entries keep the sentinel until they are trimmed themselves.

use crate::domain::affinity::AffinityMatrix;
use crate::domain::bounds::LoadBounds;

/// Which side of the assignment an entity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Row-entity (e.g. reviewer).
    Row,
    /// Column-entity (e.g. paper).
    Column,
}

/// An entity left with fewer candidate edges than its lower load bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarvedEntity {
    /// Row or column.
    pub side: Side,
    /// Entity index.
    pub index: usize,
    /// Candidate edges still available.
    pub candidates: usize,
    /// Lower load bound it has to meet.
    pub required: usize,
}

/// Zero the `n_trim` lowest entries of every row.
///
/// Ties at the boundary are broken by column order: with equal scores the
/// earlier column is trimmed first. `n_trim == 0` returns an identical
/// matrix; `n_trim >= N` zeroes every entry.
#[must_use]
pub fn trim(matrix: &AffinityMatrix, n_trim: usize) -> AffinityMatrix {
    if n_trim == 0 {
        return matrix.clone();
    }

    let mut values = Vec::with_capacity(matrix.len() * matrix.len());
    for row in matrix.rows() {
        let mut order: Vec<usize> = (0..row.len()).collect();
        // Stable sort keeps column order among equal scores.
        order.sort_by(|&a, &b| row[a].total_cmp(&row[b]));

        let mut next = row.to_vec();
        for &col in order.iter().take(n_trim) {
            next[col] = 0.0;
        }
        values.extend(next);
    }
    AffinityMatrix::from_parts(matrix.len(), values)
}

/// Entities whose remaining candidate count is below their lower bound.
///
/// A non-empty result means the LP is infeasible before it is even built,
/// typically because `n_trim` is too large.
#[must_use]
pub fn starved_entities(matrix: &AffinityMatrix, bounds: &LoadBounds) -> Vec<StarvedEntity> {
    let n = matrix.len();
    let rows = (0..n).filter_map(|index| {
        let candidates = matrix.row_candidates(index);
        (candidates < bounds.min_per_row).then_some(StarvedEntity {
            side: Side::Row,
            index,
            candidates,
            required: bounds.min_per_row,
        })
    });
    let columns = (0..n).filter_map(|index| {
        let candidates = matrix.column_candidates(index);
        (candidates < bounds.min_per_column).then_some(StarvedEntity {
            side: Side::Column,
            index,
            candidates,
            required: bounds.min_per_column,
        })
    });
    rows.chain(columns).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::affinity::SENTINEL;

    fn matrix(rows: Vec<Vec<f64>>) -> AffinityMatrix {
        AffinityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn zero_trim_is_identity() {
        let m = matrix(vec![vec![SENTINEL, 2.0], vec![3.0, SENTINEL]]);
        assert_eq!(trim(&m, 0), m);
    }

    #[test]
    fn trims_lowest_entries_per_row() {
        let m = matrix(vec![
            vec![SENTINEL, 0.9, 0.1, 0.5],
            vec![0.3, SENTINEL, 0.7, 0.2],
            vec![0.4, 0.6, SENTINEL, 0.8],
            vec![0.5, 0.5, 0.5, SENTINEL],
        ]);
        let t = trim(&m, 2);

        assert_eq!(t.row(0), &[0.0, 0.9, 0.0, 0.5]);
        assert_eq!(t.row(1), &[0.3, 0.0, 0.7, 0.0]);
        assert_eq!(t.row(2), &[0.0, 0.6, 0.0, 0.8]);
    }

    #[test]
    fn ties_trim_earlier_columns_first() {
        let m = matrix(vec![
            vec![SENTINEL, 0.5, 0.5, 0.5],
            vec![0.1, SENTINEL, 0.2, 0.3],
            vec![0.1, 0.2, SENTINEL, 0.3],
            vec![0.1, 0.2, 0.3, SENTINEL],
        ]);
        let t = trim(&m, 2);

        assert_eq!(t.row(0), &[0.0, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn each_row_keeps_at_most_n_minus_trim_candidates() {
        let m = matrix(vec![
            vec![SENTINEL, 1.0, 2.0, 3.0, 4.0],
            vec![1.0, SENTINEL, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, SENTINEL, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, SENTINEL, 4.0],
            vec![1.0, 2.0, 3.0, 4.0, SENTINEL],
        ]);
        for n_trim in 0..=5 {
            let t = trim(&m, n_trim);
            for r in 0..5 {
                assert!(t.row_candidates(r) <= 5 - n_trim.min(5));
            }
        }
    }

    #[test]
    fn oversized_trim_starves_every_row() {
        let m = matrix(vec![vec![SENTINEL, 1.0], vec![1.0, SENTINEL]]);
        let t = trim(&m, 5);

        let starved = starved_entities(&t, &LoadBounds::exact(1));
        assert_eq!(starved.len(), 4);
        assert!(starved.iter().all(|s| s.candidates == 0));
    }

    #[test]
    fn reports_only_entities_below_their_lower_bound() {
        let m = matrix(vec![
            vec![SENTINEL, 1.0, 0.0],
            vec![1.0, SENTINEL, 1.0],
            vec![1.0, 1.0, SENTINEL],
        ]);
        let bounds = LoadBounds {
            min_per_row: 2,
            max_per_row: 2,
            min_per_column: 1,
            max_per_column: 2,
        };

        let starved = starved_entities(&m, &bounds);
        assert_eq!(
            starved,
            vec![StarvedEntity {
                side: Side::Row,
                index: 0,
                candidates: 1,
                required: 2
            }]
        );
    }
}
