//! Conflict-of-interest resolution from free-text exclusion lists.
//!
//! Every entity may list names it must not be matched with. Each listed name
//! is compared with every roster name through a [`NameSimilarity`]; a score
//! at or above the threshold forbids the pairing in both directions.
//!
//! The scan is quadratic in roster size times the length of the exclusion
//! lists, which is fine for conference-sized rosters.

use std::sync::Arc;

use tracing::debug;

use crate::domain::conflict::ConflictSet;
use crate::domain::error::DomainError;
use crate::domain::roster::Roster;
use crate::port::outbound::similarity::NameSimilarity;

/// Default fuzzy-match threshold (0-100, 100 = exact).
pub const DEFAULT_THRESHOLD: u8 = 85;

/// Default separator between names in an exclusion list.
pub const DEFAULT_DELIMITER: &str = ";";

/// Turns a roster's exclusion lists into symmetric conflict pairs.
pub struct ConflictResolver {
    similarity: Arc<dyn NameSimilarity>,
    threshold: u8,
    delimiter: String,
}

impl ConflictResolver {
    /// Create a resolver with the default threshold and delimiter.
    pub fn new(similarity: Arc<dyn NameSimilarity>) -> Self {
        Self {
            similarity,
            threshold: DEFAULT_THRESHOLD,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the minimum similarity that counts as a match.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidThreshold`] above 100.
    pub fn with_threshold(mut self, threshold: u8) -> Result<Self, DomainError> {
        if threshold > 100 {
            return Err(DomainError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Set the separator used to split exclusion lists.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Resolve all conflicts in `roster`.
    ///
    /// Entities with an empty exclusion list contribute nothing. An entity
    /// naming itself is ignored.
    pub fn resolve(&self, roster: &Roster) -> ConflictSet {
        let mut conflicts = ConflictSet::new();
        let mut comparisons = 0usize;

        for (i, entity) in roster.iter() {
            let excluded: Vec<&str> = entity.excluded_names(&self.delimiter).collect();
            if excluded.is_empty() {
                continue;
            }

            for (j, other) in roster.iter() {
                if i == j {
                    continue;
                }
                let hit = excluded.iter().any(|candidate| {
                    comparisons += 1;
                    self.similarity.score(&other.name, candidate) >= self.threshold
                });
                if hit {
                    conflicts.insert_symmetric(i, j);
                }
            }
        }

        debug!(
            matcher = self.similarity.name(),
            entities = roster.len(),
            comparisons,
            pairs = conflicts.len(),
            "Resolved conflicts"
        );

        conflicts
    }
}
