//! Recovery of a binary assignment from an LP solution.

use crate::domain::assignment::Assignment;
use crate::domain::edge::EdgeIndex;
use crate::domain::error::DomainError;

/// Values strictly above this are selected; exactly 0.5 is not.
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Round a solver value half-down.
#[must_use]
pub fn is_selected(value: f64) -> bool {
    value > SELECTION_THRESHOLD
}

/// Map `values` back through `edges` onto an `n x n` assignment.
///
/// # Errors
///
/// Returns [`DomainError::SolutionShapeMismatch`] when the solution does not
/// have exactly one value per edge variable.
pub fn extract(values: &[f64], edges: &EdgeIndex, n: usize) -> Result<Assignment, DomainError> {
    if values.len() != edges.len() {
        return Err(DomainError::SolutionShapeMismatch {
            values: values.len(),
            edges: edges.len(),
        });
    }

    let selected = values
        .iter()
        .enumerate()
        .filter(|(_, &x)| is_selected(x))
        .filter_map(|(var, _)| edges.edge(var).map(|e| (e.row, e.col)));

    Ok(Assignment::from_pairs(n, selected))
}
