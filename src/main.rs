use std::process::ExitCode;

use clap::Parser;
use mindmatch::adapter::inbound::cli::command::Cli;
use mindmatch::adapter::inbound::cli::output::{self, OutputConfig};
use mindmatch::adapter::inbound::cli::dispatch;

fn main() -> ExitCode {
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(cli.color.forced());

    match dispatch(&cli) {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
