//! Loading of match input files.
//!
//! ```json
//! {
//!   "entities": [ { "name": "Ada Lovelace", "conflicts": "Charles Babbage" } ],
//!   "affinity": [[0.0]]
//! }
//! ```
//!
//! `entities` may be omitted, in which case entities are shown as `#index`
//! and no conflicts apply.

use std::path::Path;

use serde::Deserialize;

use crate::domain::affinity::AffinityMatrix;
use crate::domain::error::DomainError;
use crate::domain::roster::{Entity, Roster};
use crate::error::{Error, Result};

/// Raw contents of an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchInput {
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub affinity: Vec<Vec<f64>>,
}

impl MatchInput {
    /// Read and parse `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Input(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse input JSON.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The roster alone, for commands that never touch the matrix.
    #[must_use]
    pub fn roster(&self) -> Roster {
        Roster::new(self.entities.clone())
    }

    /// Validate and split into roster and affinity matrix.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is empty, ragged or non-finite, if an
    /// off-diagonal score equals the forbidden-entry sentinel, or if a
    /// non-empty roster does not have one entity per matrix row.
    pub fn into_parts(self) -> Result<(Roster, AffinityMatrix)> {
        let matrix = AffinityMatrix::from_rows(self.affinity)?;
        if let Some((row, col)) = matrix.first_forbidden() {
            return Err(DomainError::ReservedAffinity { row, col }.into());
        }
        if !self.entities.is_empty() && self.entities.len() != matrix.len() {
            return Err(DomainError::RosterSizeMismatch {
                roster: self.entities.len(),
                matrix: matrix.len(),
            }
            .into());
        }
        Ok((Roster::new(self.entities), matrix))
    }
}
