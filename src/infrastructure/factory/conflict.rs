//! Conflict resolver factory.

use std::sync::Arc;

use crate::adapter::outbound::similarity::{IndelRatio, LevenshteinRatio};
use crate::application::conflict::ConflictResolver;
use crate::error::Result;
use crate::infrastructure::config::conflict::Scorer;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::similarity::NameSimilarity;

/// Build the configured name similarity scorer.
pub fn build_scorer(scorer: Scorer) -> Arc<dyn NameSimilarity> {
    match scorer {
        Scorer::Indel => Arc::new(IndelRatio::new()),
        Scorer::Levenshtein => Arc::new(LevenshteinRatio::new()),
    }
}

/// Build a resolver using the configured scorer, threshold and delimiter.
///
/// # Errors
///
/// Returns an error if the threshold is outside 0-100.
pub fn build_conflict_resolver(config: &Config) -> Result<ConflictResolver> {
    let resolver = ConflictResolver::new(build_scorer(config.conflicts.scorer))
        .with_threshold(config.conflicts.threshold)?
        .with_delimiter(config.conflicts.delimiter.clone());
    Ok(resolver)
}
