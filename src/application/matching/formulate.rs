//! Translation of a trimmed affinity matrix into the assignment LP.
//!
//! ```text
//! maximise    sum_e  a_e * x_e
//! subject to  min_row <= sum_{e leaves i} x_e <= max_row      for every row-entity i
//!             min_col <= sum_{e enters j} x_e <= max_col      for every column-entity j
//!             0 <= x_e <= 1
//! ```
//!
//! Variables are numbered by [`EdgeIndex`] in row-major order over candidate
//! entries; the same index is handed to the extractor to map the solution
//! back onto the matrix.

use crate::domain::affinity::AffinityMatrix;
use crate::domain::bounds::LoadBounds;
use crate::domain::constraint::{Constraint, VariableBounds};
use crate::domain::edge::EdgeIndex;
use crate::port::outbound::solver::{LpProblem, Sense};

/// The LP together with the mapping needed to read its solution.
#[derive(Debug, Clone)]
pub struct Formulation {
    /// Edge variables in LP order.
    pub edges: EdgeIndex,
    /// The linear program.
    pub problem: LpProblem,
}

/// Build the assignment LP for `matrix` under `bounds`.
#[must_use]
pub fn formulate(matrix: &AffinityMatrix, bounds: &LoadBounds) -> Formulation {
    let n = matrix.len();
    let edges = EdgeIndex::from_matrix(matrix);

    let mut by_row: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut by_column: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (var, edge) in edges.iter() {
        by_row[edge.row].push(var);
        by_column[edge.col].push(var);
    }

    let mut constraints = Vec::with_capacity(4 * n);
    for vars in &by_row {
        push_degree(&mut constraints, vars, bounds.min_per_row, bounds.max_per_row);
    }
    for vars in &by_column {
        push_degree(
            &mut constraints,
            vars,
            bounds.min_per_column,
            bounds.max_per_column,
        );
    }

    let problem = LpProblem {
        objective: edges.iter().map(|(_, e)| e.weight).collect(),
        sense: Sense::Maximise,
        constraints,
        bounds: vec![VariableBounds::unit(); edges.len()],
    };

    Formulation { edges, problem }
}

/// Degree constraint(s) for one entity: an equality when the bounds
/// coincide, otherwise a lower and an upper inequality.
fn push_degree(constraints: &mut Vec<Constraint>, vars: &[usize], min: usize, max: usize) {
    let terms = Constraint::unit_terms(vars);
    if min == max {
        constraints.push(Constraint::eq(terms, min as f64));
        return;
    }
    if min > 0 {
        constraints.push(Constraint::geq(terms.clone(), min as f64));
    }
    constraints.push(Constraint::leq(terms, max as f64));
}
