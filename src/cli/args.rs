//! CLI argument definitions for `mmadvisor`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use multimajor_advisor::config::ConfigOverrides;
use multimajor_advisor::core::models::ProgramType;
use multimajor_advisor::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to [`Level`] for
/// runtime use.
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
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
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
        /// Optional configuration key to display (e.g., `level`, `tables_dir`, `double_major_cap`)
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
    /// Run the full advising flow for a student file.
    ///
    /// New applicants get every candidate program for their desired major,
    /// ranked with reasons and semester plans. Existing participants get their
    /// current program re-evaluated.
    Simulate {
        /// Student snapshot (TOML)
        #[arg(value_name = "STUDENT")]
        student_file: PathBuf,
    },
    /// Evaluate a single program for a student file.
    Evaluate {
        /// Student snapshot (TOML)
        #[arg(value_name = "STUDENT")]
        student_file: PathBuf,

        /// Program type (e.g. 복수전공, minor, convergence-major)
        #[arg(short, long, value_name = "PROGRAM")]
        program: ProgramType,

        /// Multi-major to evaluate
        #[arg(short, long, value_name = "MAJOR")]
        target: String,
    },
    /// Show the requirement record a lookup resolves to.
    Lookup {
        /// Major name
        #[arg(short, long, value_name = "MAJOR")]
        major: String,

        /// Program type
        #[arg(short, long, value_name = "PROGRAM")]
        program: ProgramType,

        /// Reference admission year
        #[arg(short, long, value_name = "YEAR")]
        year: u32,

        /// Look up the multi-major table instead of the primary table
        #[arg(long)]
        multi: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "mmadvisor",
    about = "Multi-major feasibility and semester planning",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

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

    /// Override config tables directory
    #[arg(long = "config-tables-dir", value_name = "DIR")]
    pub config_tables_dir: Option<PathBuf>,

    /// Override config tables directory (short form)
    #[arg(long = "tables-dir", value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--tables-dir` takes precedence over `--config-tables-dir` when both
    /// are given.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            tables_dir: self
                .tables_dir
                .as_ref()
                .or(self.config_tables_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(tables_dir: Option<&str>, config_tables_dir: Option<&str>) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_tables_dir: config_tables_dir.map(PathBuf::from),
            tables_dir: tables_dir.map(PathBuf::from),
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = cli(None, None).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.tables_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let overrides = cli(Some("/short"), Some("/long")).to_config_overrides();
        assert_eq!(overrides.tables_dir, Some("/short".to_string()));

        let overrides = cli(None, Some("/long")).to_config_overrides();
        assert_eq!(overrides.tables_dir, Some("/long".to_string()));
    }

    #[test]
    fn test_parse_program_and_lookup() {
        let args = Cli::parse_from([
            "mmadvisor",
            "--debug",
            "lookup",
            "--major",
            "통계학전공",
            "--program",
            "부전공",
            "--year",
            "2022",
            "--multi",
        ]);
        assert!(args.debug_flag);
        match args.command {
            Command::Lookup {
                program, year, multi, ..
            } => {
                assert_eq!(program, ProgramType::Minor);
                assert_eq!(year, 2022);
                assert!(multi);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
