//! Matching configuration.
//!
//! Provides the load bounds and trimming parameters handed to the match
//! orchestrator.

use serde::{Deserialize, Serialize};

use crate::application::matching::MatchParams;
use crate::domain::bounds::LoadBounds;

/// Configuration for a match run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Partners per entity when no explicit bounds are given.
    ///
    /// Used as all four load bounds (exact-degree matching). Defaults to 6.
    #[serde(default = "default_n_match")]
    pub n_match: usize,

    /// Lowest-affinity entries zeroed per row before solving.
    ///
    /// Larger values shrink the LP but may make it infeasible. Defaults to 0.
    #[serde(default)]
    pub n_trim: usize,

    /// Override for the minimum assignments per row-entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_per_row: Option<usize>,

    /// Override for the maximum assignments per row-entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_per_row: Option<usize>,

    /// Override for the minimum assignments per column-entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_per_column: Option<usize>,

    /// Override for the maximum assignments per column-entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_per_column: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            n_match: default_n_match(),
            n_trim: 0,
            min_per_row: None,
            max_per_row: None,
            min_per_column: None,
            max_per_column: None,
        }
    }
}

impl MatchingConfig {
    /// Effective load bounds: `n_match` everywhere unless overridden.
    #[must_use]
    pub fn bounds(&self) -> LoadBounds {
        LoadBounds {
            min_per_row: self.min_per_row.unwrap_or(self.n_match),
            max_per_row: self.max_per_row.unwrap_or(self.n_match),
            min_per_column: self.min_per_column.unwrap_or(self.n_match),
            max_per_column: self.max_per_column.unwrap_or(self.n_match),
        }
    }

    /// Convert to orchestrator parameters.
    #[must_use]
    pub fn to_params(&self, integral: bool) -> MatchParams {
        MatchParams {
            bounds: self.bounds(),
            n_trim: self.n_trim,
            integral,
        }
    }
}

fn default_n_match() -> usize {
    6
}
