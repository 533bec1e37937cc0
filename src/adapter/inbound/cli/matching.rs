//! Handler for the `match` command.

use std::process::ExitCode;

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::MatchArgs;
use super::input::MatchInput;
use super::{output, EXIT_NOT_CONVERGED};
use crate::application::matching::{FailureReason, MatchOutcome, MatchStatus};
use crate::domain::roster::Roster;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{build_conflict_resolver, build_orchestrator};

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Entity")]
    from: String,
    #[tabled(rename = "Matched With")]
    to: String,
    #[tabled(rename = "Affinity")]
    affinity: String,
}

/// Apply command-line overrides on top of the loaded config.
///
/// JSON output owns stdout, so the solver log is silenced there.
fn apply_overrides(config: &mut Config, args: &MatchArgs, json: bool) {
    if let Some(n_match) = args.n_match {
        config.matching.n_match = n_match;
    }
    if let Some(n_trim) = args.n_trim {
        config.matching.n_trim = n_trim;
    }
    if args.integral {
        config.solver.integral = true;
    }
    if let Some(secs) = args.time_limit {
        config.solver.time_limit_secs = Some(secs);
    }
    if json {
        config.solver.verbose = false;
    }
}

/// Execute `match`.
///
/// Returns [`EXIT_NOT_CONVERGED`] as the exit code when the solver finds no
/// assignment.
pub fn execute(args: &MatchArgs) -> Result<ExitCode> {
    let mut config = super::load_config(&args.config.config)?;
    apply_overrides(&mut config, args, output::is_json());
    config.validate()?;

    let (roster, affinity) = MatchInput::load(&args.input)?.into_parts()?;
    let conflicts = build_conflict_resolver(&config)?.resolve(&roster);
    let orchestrator = build_orchestrator(&config)?;

    let pb = output::spinner(&format!("Matching {} entities", affinity.len()));
    let outcome = match orchestrator.run(&affinity, &conflicts) {
        Ok(outcome) => outcome,
        Err(err) => {
            output::spinner_fail(&pb, "Match aborted");
            return Err(err);
        }
    };
    if outcome.is_converged() {
        output::spinner_success(&pb, &format!("Selected {} pairs", outcome.pairings.len()));
    } else {
        output::spinner_fail(&pb, "No assignment found");
    }

    let conflict_pairs = conflicts.iter().filter(|pair| pair.row < pair.col).count();
    report(&roster, conflict_pairs, &outcome);

    if outcome.is_converged() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_NOT_CONVERGED))
    }
}

fn report(roster: &Roster, conflict_pairs: usize, outcome: &MatchOutcome) {
    if output::is_json() {
        let pairs: Vec<_> = outcome
            .pairings
            .iter()
            .map(|p| {
                json!({
                    "row": p.row,
                    "col": p.col,
                    "from": roster.name(p.row),
                    "to": roster.name(p.col),
                    "affinity": p.affinity,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "match",
            "converged": outcome.is_converged(),
            "message": outcome.message(),
            "stage": outcome.stage.to_string(),
            "failed_at": outcome.failed_at.map(|stage| stage.to_string()),
            "total_affinity": outcome.total_affinity,
            "pairs": pairs,
            "assignment": outcome.assignment.to_rows(),
        }));
        return;
    }

    output::section("Match");
    output::field("Entities", outcome.assignment.len());
    output::field("Conflicts", conflict_pairs);
    output::field("Variables", outcome.variables);
    output::field("Solver", outcome.solver);

    if outcome.is_converged() {
        let rows: Vec<PairRow> = outcome
            .pairings
            .iter()
            .map(|p| PairRow {
                from: roster.name(p.row),
                to: roster.name(p.col),
                affinity: format!("{:.3}", p.affinity),
            })
            .collect();
        output::section("Pairs");
        output::lines(&Table::new(rows).to_string());
        output::field("Total", output::highlight(format!("{:.3}", outcome.total_affinity)));
        output::success(&outcome.message());
    } else {
        output::warning(&outcome.message());
        if let Some(stage) = outcome.failed_at {
            output::note(&format!("Stopped after stage: {stage}"));
        }
        let overconstrained = matches!(
            outcome.status,
            MatchStatus::NotConverged(FailureReason::Overconstrained { .. })
        );
        if overconstrained {
            output::hint("check the conflict lists or try a smaller --n-match");
        } else {
            output::hint("try a smaller --n-trim or --n-match");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::adapter::inbound::cli::command::ConfigPathArg;

    fn args() -> MatchArgs {
        MatchArgs {
            input: PathBuf::from("in.json"),
            config: ConfigPathArg {
                config: PathBuf::from("unused.toml"),
            },
            n_match: None,
            n_trim: None,
            integral: false,
            time_limit: None,
        }
    }

    #[test]
    fn overrides_leave_config_alone_when_absent() {
        let mut config = Config::default();
        apply_overrides(&mut config, &args(), false);

        assert_eq!(config.matching.n_match, 6);
        assert_eq!(config.matching.n_trim, 0);
        assert!(!config.solver.integral);
        assert_eq!(config.solver.time_limit_secs, None);
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut config = Config::default();
        let args = MatchArgs {
            n_match: Some(2),
            n_trim: Some(1),
            integral: true,
            time_limit: Some(5.0),
            ..args()
        };
        apply_overrides(&mut config, &args, false);

        assert_eq!(config.matching.n_match, 2);
        assert_eq!(config.matching.n_trim, 1);
        assert!(config.solver.integral);
        assert_eq!(config.solver.time_limit_secs, Some(5.0));
    }

    #[test]
    fn json_output_silences_the_solver_log() {
        let mut config = Config::default();
        config.solver.verbose = true;

        apply_overrides(&mut config, &args(), false);
        assert!(config.solver.verbose);

        apply_overrides(&mut config, &args(), true);
        assert!(!config.solver.verbose);
    }
}
