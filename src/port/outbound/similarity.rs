//! Fuzzy name similarity port.
//!
//! Conflict lists are free text, so a roster name has to be compared with
//! each excluded name approximately.

/// Scores how alike two names are on a 0-100 scale (100 = identical).
pub trait NameSimilarity: Send + Sync {
    /// Return the matcher name for logging.
    fn name(&self) -> &'static str;

    /// Similarity of `a` and `b` in `0..=100`.
    fn score(&self, a: &str, b: &str) -> u8;
}
