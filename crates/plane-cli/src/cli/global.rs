//! Global flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`], so `plane -v install` and
//! `plane install -v` both work.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use clap::Args;

/// Flags accepted on any `plane` invocation.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity counter: `-v` info, `-vv` debug, `-vvv` trace.
    /// Without it only warnings and errors are logged.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress everything except errors. Mutually exclusive with `-v`.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. The `NO_COLOR` convention
    /// (<https://no-color.org>) is honoured through the `env` attribute.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Alternative configuration file.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Output rendering mode; `auto` picks based on whether stdout is a TTY.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How status lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, symbol-prefixed lines.
    Human,
    /// No colors, suitable for piping.
    Plain,
}

impl OutputFormat {
    /// Collapse `Auto` into a concrete format by probing stdout.
    pub fn resolve(self) -> OutputFormat {
        match self {
            Self::Auto if std::io::stdout().is_terminal() => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_identity_for_concrete_formats() {
        assert_eq!(OutputFormat::Human.resolve(), OutputFormat::Human);
        assert_eq!(OutputFormat::Plain.resolve(), OutputFormat::Plain);
    }

    #[test]
    fn resolve_never_returns_auto() {
        assert_ne!(OutputFormat::Auto.resolve(), OutputFormat::Auto);
    }
}
