//! User-facing output.
//!
//! All human-readable lines go through [`OutputManager`] so that quiet mode,
//! `--no-color`, and format resolution are applied in exactly one place.
//! Tracing output is separate (stderr, see `logging.rs`); this module is for
//! the messages a user reads on a normal run.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Severity of a status line, mapped to a symbol and a color.
#[derive(Debug, Clone, Copy)]
enum Level {
    Success,
    Error,
    Warning,
    Info,
}

impl Level {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Error => "\u{2717}",   // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn paint(self, msg: &str) -> String {
        match self {
            Self::Success => format!("{} {}", self.symbol().green().bold(), msg.green()),
            Self::Error => format!("{} {}", self.symbol().red().bold(), msg.red()),
            Self::Warning => format!("{} {}", self.symbol().yellow().bold(), msg.yellow()),
            Self::Info => format!("{} {}", self.symbol().blue().bold(), msg.blue()),
        }
    }
}

/// Writes status lines to the terminal.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// The config file can force `no_color`; the CLI flag always wins when
    /// set. `Auto` format resolves against the real stdout.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            format: args.output_format.resolve(),
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }

    fn emit(&self, level: Level, msg: &str) -> io::Result<()> {
        let line = if self.no_color || self.format == OutputFormat::Plain {
            format!("{} {msg}", level.symbol())
        } else {
            level.paint(msg)
        };
        match level {
            // Errors go to stderr and survive quiet mode.
            Level::Error => self.stderr.write_line(&line),
            _ if self.quiet => Ok(()),
            _ => self.stdout.write_line(&line),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Plain line without a status symbol; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.stdout.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Success, msg)
    }

    /// Error indicator: `✗ <msg>`, written to stderr, never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Error, msg)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Warning, msg)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Level::Info, msg)
    }

    /// Bold header line introducing an operation.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color || self.format == OutputFormat::Plain {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.stdout.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
