//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "plane",
    bin_name = "plane",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2708} Docker dev environments for your project",
    long_about = "Plane scaffolds a docker-compose based development \
                  environment and publishes its runtime assets into your project.",
    after_help = "EXAMPLES:\n\
        \x20 plane install\n\
        \x20 plane install postgres,redis --runtime 8.3\n\
        \x20 plane install none --overwrite\n\
        \x20 plane publish --parts bin,docker --overwrite",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the docker-compose file.
    #[command(
        visible_alias = "i",
        about = "Generate the docker-compose file",
        after_help = "EXAMPLES:\n\
            \x20 plane install                          # default services\n\
            \x20 plane install postgres,redis           # explicit selection\n\
            \x20 plane install none                     # app container only\n\
            \x20 plane install --runtime 8.1 --overwrite"
    )]
    Install(InstallArgs),

    /// Copy the Plane binary and/or docker runtime files into the project.
    #[command(
        about = "Publish bundled assets into the project",
        after_help = "EXAMPLES:\n\
            \x20 plane publish                          # docker files only\n\
            \x20 plane publish --parts bin,docker\n\
            \x20 plane publish --docker-dest infra/docker --overwrite"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plane completions bash > ~/.local/share/bash-completion/completions/plane\n\
            \x20 plane completions zsh  > ~/.zfunc/_plane\n\
            \x20 plane completions fish > ~/.config/fish/completions/plane.fish"
    )]
    Completions(CompletionsArgs),
}

// ── install ───────────────────────────────────────────────────────────────────

/// Arguments for `plane install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Comma-separated services to install; the literal `none` selects no
    /// services. Omitted means the configured default set.
    #[arg(value_name = "SERVICES", help = "Services to install ('none' to skip)")]
    pub services: Option<String>,

    /// Runtime version for the app container.
    #[arg(
        short = 'r',
        long = "runtime",
        value_name = "VERSION",
        help = "Runtime version (e.g. 8.2)"
    )]
    pub runtime: Option<String>,

    /// Destination of the generated compose document.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "docker-compose.yml",
        help = "Where to write the compose file"
    )]
    pub output: PathBuf,

    /// Overwrite an existing compose file.
    #[arg(long = "overwrite", help = "Overwrite an existing compose file")]
    pub overwrite: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `plane publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Parts to publish, comma-separated (`bin`, `docker`).
    #[arg(
        long = "parts",
        value_name = "PARTS",
        default_value = "docker",
        help = "The parts to publish (bin, docker)"
    )]
    pub parts: String,

    /// Destination directory for the docker runtime files.
    #[arg(
        long = "docker-dest",
        value_name = "DIR",
        default_value = "docker",
        help = "Directory to publish the docker files to"
    )]
    pub docker_dest: PathBuf,

    /// Destination directory for the Plane binary.
    #[arg(
        long = "bin-dest",
        value_name = "DIR",
        default_value = "bin",
        help = "Directory to publish the Plane binary to"
    )]
    pub bin_dest: PathBuf,

    /// Compose file whose runtime paths get rewritten after a docker publish.
    #[arg(
        long = "compose-file",
        value_name = "FILE",
        default_value = "docker-compose.yml",
        help = "Compose file to point at the published docker files"
    )]
    pub compose_file: PathBuf,

    /// Overwrite existing files.
    #[arg(long = "overwrite", help = "Overwrite existing files")]
    pub overwrite: bool,
}

/// A publishable part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Bin,
    Docker,
}

impl Part {
    /// Parse one part name; `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "bin" => Some(Self::Bin),
            "docker" => Some(Self::Docker),
            _ => None,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plane completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_install_defaults() {
        let cli = Cli::parse_from(["plane", "install"]);
        if let Commands::Install(args) = cli.command {
            assert!(args.services.is_none());
            assert!(args.runtime.is_none());
            assert_eq!(args.output, PathBuf::from("docker-compose.yml"));
            assert!(!args.overwrite);
        } else {
            panic!("expected Install command");
        }
    }

    #[test]
    fn parse_install_with_selection() {
        let cli = Cli::parse_from(["plane", "install", "postgres,redis", "-r", "8.3"]);
        if let Commands::Install(args) = cli.command {
            assert_eq!(args.services.as_deref(), Some("postgres,redis"));
            assert_eq!(args.runtime.as_deref(), Some("8.3"));
        } else {
            panic!("expected Install command");
        }
    }

    #[test]
    fn parse_publish_defaults() {
        let cli = Cli::parse_from(["plane", "publish"]);
        if let Commands::Publish(args) = cli.command {
            assert_eq!(args.parts, "docker");
            assert_eq!(args.docker_dest, PathBuf::from("docker"));
            assert_eq!(args.bin_dest, PathBuf::from("bin"));
        } else {
            panic!("expected Publish command");
        }
    }

    #[test]
    fn part_names() {
        assert_eq!(Part::parse("bin"), Some(Part::Bin));
        assert_eq!(Part::parse("docker"), Some(Part::Docker));
        assert_eq!(Part::parse("everything"), None);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["plane", "--quiet", "--verbose", "install"]);
        assert!(result.is_err());
    }
}
