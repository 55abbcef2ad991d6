//! CLI argument definitions for `etn`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use etn_enrollment::config::ConfigOverrides;

/// CLI log level argument
///
/// Converts to the lowercase directive stored in config and passed to the
/// tracing filter.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
    /// Trace-level logging
    Trace,
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `currency_symbol`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the courses on offer, grouped by duration.
    Courses,
    /// Calculate the fees for a set of courses.
    ///
    /// VAT (15%) is added first; a volume discount is then applied to the
    /// VAT inclusive total: 2 courses 5%, 3 courses 10%, 4 or more 15%.
    Quote {
        /// Course ids to select (see `etn courses`)
        #[arg(value_name = "COURSE")]
        courses: Vec<String>,

        /// Preselect a course by name, ignoring case and spaces (e.g. "childminding")
        #[arg(long, value_name = "NAME")]
        preselect: Option<String>,

        /// Output format: text, markdown (md) or html. Defaults to config `default_format`
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Write the quote to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also save the quote into the configured quotes directory
        #[arg(long)]
        save: bool,
    },
    /// Validate an enrollment inquiry.
    ///
    /// All failing fields are reported together.
    Inquire {
        /// Full name
        #[arg(long, value_name = "NAME", default_value = "")]
        name: String,

        /// Email address
        #[arg(long, value_name = "EMAIL", default_value = "")]
        email: String,

        /// Phone number (optional)
        #[arg(long, value_name = "PHONE", default_value = "")]
        phone: String,

        /// Course of interest; repeat for several (`all_courses` and `not_sure` are accepted)
        #[arg(long = "interest", value_name = "COURSE")]
        interests: Vec<String>,

        /// Inquiry type: admission, pricing, schedule, partnership or other
        #[arg(long = "type", value_name = "KIND", default_value = "")]
        kind: String,

        /// Message (at least 10 characters)
        #[arg(long, value_name = "TEXT", default_value = "")]
        message: String,

        /// Course ids of a quote to attach as context
        #[arg(long = "quote", value_name = "COURSE")]
        quote: Vec<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "etn",
    about = "Empowering the Nation course fee calculator and enrollment inquiries",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level. Falls back to RUST_LOG, then config.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Use this course catalog file instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Currency symbol for this run
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config quotes directory
    #[arg(long = "quotes-dir", value_name = "DIR")]
    pub quotes_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalog_file: self
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            quotes_dir: self
                .quotes_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            currency_symbol: self.currency.clone(),
        }
    }
}
