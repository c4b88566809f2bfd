use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "license-checker")]
#[command(about = "Check that the licenses of your dependencies are allowed")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file (default: .license-checker.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log level for diagnostic output, overrides --verbose and --quiet
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the licenses of the current dependencies
    Check {
        /// File with one `dependency,license` per line, `-` for stdin
        #[arg(short, long)]
        licenses: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to do with licenses that have no decision yet
        #[arg(long)]
        on_unknown: Option<OnUnknown>,

        /// Treat the run as interactive (or not), instead of probing the terminal
        #[arg(long)]
        interactive: Option<bool>,

        /// Show all dependencies, not just the issues
        #[arg(long)]
        all: bool,

        /// Exit with code 0 even on disallowed licenses
        #[arg(long)]
        exit_zero: bool,
    },
    /// Evaluate a single license expression
    Eval {
        /// Expression such as "MIT || (Apache-2.0 && !GPL-3.0)"
        expression: String,

        /// Treat this license as allowed for this evaluation only
        #[arg(long)]
        allow: Vec<String>,

        /// Treat this license as disallowed for this evaluation only
        #[arg(long)]
        deny: Vec<String>,
    },
    /// Record licenses as allowed
    Allow {
        #[arg(required = true)]
        licenses: Vec<String>,
    },
    /// Record licenses as disallowed
    Deny {
        #[arg(required = true)]
        licenses: Vec<String>,
    },
    /// Show or validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OnUnknown {
    Report,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,
    /// Only error messages
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages
    Info,
    /// Debug and above messages
    Debug,
    /// All messages including trace
    Trace,
}

impl Cli {
    pub fn log_level(&self) -> LogLevel {
        match (self.log_level, self.verbose, self.quiet) {
            (Some(level), _, _) => level,
            (None, true, _) => LogLevel::Debug,
            (None, false, true) => LogLevel::Error,
            (None, false, false) => LogLevel::Warn,
        }
    }
}
