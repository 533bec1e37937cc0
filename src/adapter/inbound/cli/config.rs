//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::hint(&format!(
        "mindmatch match --input scores.json -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = super::load_config(path)?;
    let bounds = config.matching.bounds();

    output::section("Effective Configuration");
    output::field(
        "Source",
        if path.exists() {
            path.display().to_string()
        } else {
            "(defaults)".to_string()
        },
    );

    output::section("Matching");
    output::field("Partners", config.matching.n_match);
    output::field("Trim", config.matching.n_trim);
    output::field(
        "Per row",
        format!("{}..={}", bounds.min_per_row, bounds.max_per_row),
    );
    output::field(
        "Per column",
        format!("{}..={}", bounds.min_per_column, bounds.max_per_column),
    );

    output::section("Conflicts");
    output::field("Threshold", config.conflicts.threshold);
    output::field("Delimiter", format!("{:?}", config.conflicts.delimiter));
    output::field("Scorer", format!("{:?}", config.conflicts.scorer).to_lowercase());

    output::section("Solver");
    output::field("Backend", "highs");
    output::field(
        "Mode",
        if config.solver.integral {
            "integral"
        } else {
            "relaxation"
        },
    );
    output::field(
        "Time limit",
        config
            .solver
            .time_limit_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s")),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if config.matching.n_trim > 0 && config.matching.n_trim >= config.matching.n_match {
        output::warning("n_trim is not below n_match; small rosters may fail to converge");
    }

    output::field(
        "Next",
        format!("mindmatch config show -c {}", path.display()),
    );

    Ok(())
}
