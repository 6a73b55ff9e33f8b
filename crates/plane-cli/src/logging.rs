//! Tracing subscriber setup.
//!
//! The CLI owns the subscriber; library crates only emit events. Verbosity
//! flags map to a per-crate filter (`plane`, `plane_core`, `plane_adapters`
//! all at the same level), and a user-provided `RUST_LOG` takes precedence
//! over the flags entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global tracing subscriber.
///
/// Call once, before the first tracing macro fires. Repeated initialisation
/// (e.g. several test binaries in one process) surfaces as an error instead
/// of a panic.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env, // RUST_LOG wins
        Err(_) => EnvFilter::new(verbosity_filter(args)),
    };

    let ansi = !args.no_color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Build the filter directive string for the given flags.
///
/// `--quiet` pins everything to errors; otherwise each `-v` lowers the
/// threshold one level, bottoming out at `trace`.
fn verbosity_filter(args: &GlobalArgs) -> String {
    let level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    format!("plane={level},plane_core={level},plane_adapters={level}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn quiet_pins_to_error() {
        assert!(verbosity_filter(&args_with(0, true)).contains("plane=error"));
    }

    #[test]
    fn default_is_warn() {
        assert!(verbosity_filter(&args_with(0, false)).contains("plane=warn"));
    }

    #[test]
    fn each_v_lowers_the_threshold() {
        assert!(verbosity_filter(&args_with(1, false)).contains("plane=info"));
        assert!(verbosity_filter(&args_with(2, false)).contains("plane=debug"));
        assert!(verbosity_filter(&args_with(3, false)).contains("plane=trace"));
        assert!(verbosity_filter(&args_with(9, false)).contains("plane=trace"));
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert!(verbosity_filter(&args_with(3, true)).contains("plane=error"));
    }

    #[test]
    fn filter_covers_all_plane_crates() {
        let filter = verbosity_filter(&args_with(0, false));
        assert!(filter.contains("plane_core="));
        assert!(filter.contains("plane_adapters="));
    }
}
