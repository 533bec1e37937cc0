//! Conflict-of-interest resolution configuration.

use serde::{Deserialize, Serialize};

use crate::application::conflict::{DEFAULT_DELIMITER, DEFAULT_THRESHOLD};

/// Name similarity measure used for exclusion lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scorer {
    /// Insertions and deletions only; tolerant of swapped letters.
    #[default]
    Indel,
    /// Classic edit distance with substitutions.
    Levenshtein,
}

/// How free-text exclusion lists are matched against the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictConfig {
    /// Minimum fuzzy similarity (0-100, 100 = exact) that counts as a match.
    ///
    /// Defaults to 85, which tolerates small typos.
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Separator between names in an exclusion list. Defaults to `;`.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Similarity measure. Defaults to `indel`.
    #[serde(default)]
    pub scorer: Scorer,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            delimiter: default_delimiter(),
            scorer: Scorer::default(),
        }
    }
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}
