//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod conflicts;
pub mod input;
pub mod matching;
pub mod output;
pub mod paths;

use std::path::Path;
use std::process::ExitCode;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Exit code for a run that finished but did not converge.
pub const EXIT_NOT_CONVERGED: u8 = 2;

/// Run the parsed command line.
///
/// Output flags must already be applied with [`output::configure`].
pub fn dispatch(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Match(args) => matching::execute(args),
        Commands::Conflicts(args) => conflicts::execute(args).map(|()| ExitCode::SUCCESS),
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.config, args.force).map(|()| ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommand::Show(arg)) => {
            config::execute_show(&arg.config).map(|()| ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommand::Validate(arg)) => {
            config::execute_validate(&arg.config).map(|()| ExitCode::SUCCESS)
        }
    }
}

/// Load `path` (or defaults when it does not exist) and start logging.
///
/// `-v` raises the configured level to `debug`, `-vv` to `trace`.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    match output::verbosity() {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
    config.init_logging();
    Ok(config)
}
