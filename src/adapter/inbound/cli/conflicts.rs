//! Handler for the `conflicts` command.

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ConflictsArgs;
use super::input::MatchInput;
use super::output;
use crate::domain::conflict::ConflictSet;
use crate::domain::roster::Roster;
use crate::error::Result;
use crate::infrastructure::factory::build_conflict_resolver;

#[derive(Tabled)]
struct ConflictRow {
    #[tabled(rename = "Entity")]
    entity: String,
    #[tabled(rename = "Excluded")]
    excluded: String,
}

/// Unordered conflict pairs by name, lower index first.
fn named_pairs(roster: &Roster, conflicts: &ConflictSet) -> Vec<(String, String)> {
    conflicts
        .iter()
        .filter(|pair| pair.row < pair.col)
        .map(|pair| (roster.name(pair.row), roster.name(pair.col)))
        .collect()
}

/// Execute `conflicts`.
pub fn execute(args: &ConflictsArgs) -> Result<()> {
    let mut config = super::load_config(&args.config.config)?;
    if let Some(threshold) = args.threshold {
        config.conflicts.threshold = threshold;
    }
    config.validate()?;

    let roster = MatchInput::load(&args.input)?.roster();
    let conflicts = build_conflict_resolver(&config)?.resolve(&roster);
    let pairs = named_pairs(&roster, &conflicts);

    if output::is_json() {
        output::json_output(json!({
            "command": "conflicts",
            "entities": roster.len(),
            "threshold": config.conflicts.threshold,
            "pairs": pairs,
        }));
        return Ok(());
    }

    output::section("Conflicts");
    output::field("Entities", roster.len());
    output::field("Threshold", config.conflicts.threshold);
    output::field("Pairs", pairs.len());

    if pairs.is_empty() {
        output::note("No conflicts of interest found");
        return Ok(());
    }

    let rows: Vec<ConflictRow> = pairs
        .into_iter()
        .map(|(entity, excluded)| ConflictRow { entity, excluded })
        .collect();
    output::section("Pairs");
    output::lines(&Table::new(rows).to_string());

    Ok(())
}
