//! Name similarity scorers.
//!
//! [`IndelRatio`] is the default: it counts insertions and deletions only,
//! so a swapped pair of letters costs two edits out of the combined length.
//! [`LevenshteinRatio`] is the stricter `strsim` edit distance.

use crate::port::outbound::similarity::NameSimilarity;

/// Indel similarity `2 * LCS / (len(a) + len(b))` scaled to 0-100.
///
/// Lengths and the longest common subsequence are counted in chars.
/// Comparison is case-sensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndelRatio;

impl IndelRatio {
    /// Create a new matcher.
    pub fn new() -> Self {
        Self
    }
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

impl NameSimilarity for IndelRatio {
    fn name(&self) -> &'static str {
        "indel"
    }

    fn score(&self, a: &str, b: &str) -> u8 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        let ratio = (2 * lcs_len(&a, &b)) as f64 / (a.len() + b.len()) as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Normalized Levenshtein similarity scaled to 0-100.
///
/// Comparison is case-sensitive; callers wanting case folding should
/// normalise names before building the roster.
#[derive(Debug, Default, Clone, Copy)]
pub struct LevenshteinRatio;

impl LevenshteinRatio {
    /// Create a new matcher.
    pub fn new() -> Self {
        Self
    }
}

impl NameSimilarity for LevenshteinRatio {
    fn name(&self) -> &'static str {
        "levenshtein"
    }

    fn score(&self, a: &str, b: &str) -> u8 {
        let ratio = strsim::normalized_levenshtein(a, b).clamp(0.0, 1.0);
        (ratio * 100.0).round() as u8
    }
}
