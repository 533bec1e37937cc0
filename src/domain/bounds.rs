//! Per-entity load bounds.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Minimum and maximum number of assignments per row- and column-entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBounds {
    /// Minimum assignments per row-entity.
    pub min_per_row: usize,
    /// Maximum assignments per row-entity.
    pub max_per_row: usize,
    /// Minimum assignments per column-entity.
    pub min_per_column: usize,
    /// Maximum assignments per column-entity.
    pub max_per_column: usize,
}

impl LoadBounds {
    /// Exact-degree bounds: every entity gets exactly `n_match` assignments
    /// on both sides.
    #[must_use]
    pub const fn exact(n_match: usize) -> Self {
        Self {
            min_per_row: n_match,
            max_per_row: n_match,
            min_per_column: n_match,
            max_per_column: n_match,
        }
    }

    /// Check that lower bounds do not exceed upper bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLoadBounds`] naming the offending side.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.min_per_row > self.max_per_row {
            return Err(DomainError::InvalidLoadBounds {
                side: "row",
                min: self.min_per_row,
                max: self.max_per_row,
            });
        }
        if self.min_per_column > self.max_per_column {
            return Err(DomainError::InvalidLoadBounds {
                side: "column",
                min: self.min_per_column,
                max: self.max_per_column,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_bounds_are_valid() {
        assert!(LoadBounds::exact(3).validate().is_ok());
    }

    #[test]
    fn inverted_column_bounds_are_rejected() {
        let bounds = LoadBounds {
            min_per_column: 4,
            max_per_column: 2,
            ..LoadBounds::exact(2)
        };
        assert_eq!(
            bounds.validate(),
            Err(DomainError::InvalidLoadBounds {
                side: "column",
                min: 4,
                max: 2
            })
        );
    }
}
