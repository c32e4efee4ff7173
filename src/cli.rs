use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "copyright-update")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Update copyright year ranges in changed files")]
#[command(
    long_about = "Takes a newline-delimited list of changed files, skips binary files, and \
                  rewrites every \"(c) YYYY\" or \"(c) YYYY-YYYY\" notice to span from its \
                  start year to the current year."
)]
#[command(after_help = "EXAMPLES:\n  \
    copyright-update \"$(git diff --name-only origin/main)\"\n  \
    git diff --name-only HEAD~1 | copyright-update -\n  \
    copyright-update --dry-run -v \"src/lib.rs\"\n  \
    copyright-update --year 2025 --holder \"Example Corp.\" \"README.md\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Newline-delimited list of changed files ("-" reads the list from stdin)
    #[arg(required_unless_present = "generate_config")]
    pub changed_files: Option<String>,

    /// Year the notices should end in (defaults to the current year)
    #[arg(short, long, value_parser = parse_year)]
    pub year: Option<i32>,

    /// Copyright holder written after the year range
    #[arg(long, help = "Holder written after the year range (default: PlayEveryWare, Inc.)")]
    pub holder: Option<String>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (report what would change without writing)
    #[arg(long, help = "Report which notices would change without writing any file")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_holder(self.holder.clone())
    }

    /// The raw file list, read from stdin when the argument is `-`.
    pub fn read_changed_files(&self) -> std::io::Result<String> {
        match self.changed_files.as_deref() {
            Some("-") => {
                let mut raw = String::new();
                std::io::stdin().read_to_string(&mut raw)?;
                Ok(raw)
            }
            Some(raw) => Ok(raw.to_string()),
            None => Ok(String::new()),
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "copyright_update=error";
        }
        match self.verbose {
            0 => "copyright_update=warn",
            1 => "copyright_update=info",
            _ => "copyright_update=debug",
        }
    }
}

pub fn parse_year(s: &str) -> std::result::Result<i32, String> {
    let year: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid year: {}", s))?;

    crate::rewriter::validate_year(year)
        .map_err(|_| "Year must have four digits (1000-9999)".to_string())
}
