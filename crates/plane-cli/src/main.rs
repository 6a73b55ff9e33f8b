//! # Plane CLI
//!
//! Scaffolds a docker-compose based development environment and publishes
//! its runtime assets into a project.
//!
//! Startup is linear: parse args, set up tracing, load config, build the
//! output manager, run the selected command, and translate any [`CliError`]
//! into a message plus exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                                      |
//! |------|--------------------------------------------------------------|
//! |  0   | Success                                                      |
//! |  1   | Operation failed (existing file, invalid runtime, missing    |
//! |      | fragment, I/O, configuration)                                |
//! |  2   | Usage error (argument parsing, unknown publish part)         |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A `.env` in the project may carry PLANE_STUBS_DIR / PLANE_RUNTIMES_DIR
    // overrides; load it before anything reads the environment. Missing file
    // is fine.
    let _ = dotenvy::dotenv();

    // clap renders --help / --version itself; anything else that fails here
    // is a usage error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            });
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("Plane completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e),
    }
}

/// Dispatch to the selected command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Install(cmd) => commands::install::execute(cmd, cli.global, config, output),
        Commands::Publish(cmd) => commands::publish::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Turn a structured error into stderr output and an exit code.
///
/// Written directly to stderr so the message survives stdout redirection;
/// colored only when stderr is a terminal.
fn handle_error(err: CliError) -> ExitCode {
    err.log();

    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored()
    } else {
        err.format_plain()
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn every_subcommand_is_reachable() {
        let names: Vec<_> = Cli::command()
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect();
        for expected in ["install", "publish", "completions"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }
}
