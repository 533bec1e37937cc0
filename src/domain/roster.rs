//! Roster of entities taking part in a match.

use serde::{Deserialize, Serialize};

/// One reviewer, paper or participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Canonical full name used for conflict matching.
    pub name: String,

    /// Delimiter-separated names this entity must not be matched with.
    #[serde(default)]
    pub conflicts: String,
}

impl Entity {
    /// Create an entity without exclusions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conflicts: String::new(),
        }
    }

    /// Attach a free-text exclusion list.
    #[must_use]
    pub fn with_conflicts(mut self, conflicts: impl Into<String>) -> Self {
        self.conflicts = conflicts.into();
        self
    }

    /// Split the exclusion list into trimmed, non-empty candidate names.
    pub fn excluded_names<'a>(&'a self, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.conflicts
            .split(delimiter)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Entities indexed `0..N` in the same order as the affinity matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    /// Create a roster from entities in matrix order.
    #[must_use]
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Display name for `index`, falling back to `#index`.
    #[must_use]
    pub fn name(&self, index: usize) -> String {
        self.get(index)
            .map_or_else(|| format!("#{index}"), |entity| entity.name.clone())
    }

    /// Iterate `(index, entity)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.entities.iter().enumerate()
    }
}
