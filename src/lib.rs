pub mod cli;
pub mod config;
pub mod error;
pub mod rewriter;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, DetectionConfig, NoticeConfig};
pub use error::{Result, UpdaterError, UserFriendlyError};

// Core functionality re-exports
pub use rewriter::{
    update_copyright_notice, CopyrightNotice, FileResult, FileRewriter, FileStatus,
    NoticeChange, NoticeRewriter, UpdateReport,
};
pub use scanner::{is_binary, parse_file_list, BinaryDetector};
pub use ui::{GracefulShutdown, OutputFormatter, OutputMode};

use chrono::Datelike;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main library interface: filters a changed-file list and updates the
/// copyright notices in every text file on it.
pub struct CopyrightUpdater {
    year: i32,
    detector: BinaryDetector,
    rewriter: FileRewriter,
    output_formatter: OutputFormatter,
    shutdown: GracefulShutdown,
}

impl CopyrightUpdater {
    pub fn new(
        config: Config,
        year: i32,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
        dry_run: bool,
    ) -> Result<Self> {
        Self::with_shutdown(
            config,
            year,
            OutputFormatter::new(output_mode, verbose, quiet),
            dry_run,
            GracefulShutdown::new()?,
        )
    }

    /// Same as `new`, without installing a Ctrl-C handler.
    pub fn new_detached(
        config: Config,
        year: i32,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
        dry_run: bool,
    ) -> Result<Self> {
        Self::with_shutdown(
            config,
            year,
            OutputFormatter::new(output_mode, verbose, quiet),
            dry_run,
            GracefulShutdown::detached(),
        )
    }

    fn with_shutdown(
        config: Config,
        year: i32,
        output_formatter: OutputFormatter,
        dry_run: bool,
        shutdown: GracefulShutdown,
    ) -> Result<Self> {
        config.validate()?;
        let year = rewriter::validate_year(year)?;

        let detector = BinaryDetector::new(config.detection.sniff_bytes);
        let rewriter =
            FileRewriter::new(NoticeRewriter::new(&config.notice.holder)?).with_dry_run(dry_run);

        Ok(Self {
            year,
            detector,
            rewriter,
            output_formatter: output_formatter.with_dry_run(dry_run),
            shutdown,
        })
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };
        let year = cli_args.year.unwrap_or_else(current_year);

        Self::new(
            config,
            year,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
            cli_args.dry_run,
        )
    }

    /// Parses a newline-delimited file list and processes every entry.
    pub fn run(&self, changed_files: &str) -> UpdateReport {
        let files = parse_file_list(changed_files);
        log::info!("{} candidate files", files.len());
        self.output_formatter.print_candidates(&files);

        self.process_files(&files)
    }

    /// Checks each file for binary content, then rewrites its notices. Per-file
    /// failures are recorded in the report. On Ctrl-C the files handled so far
    /// are returned in a report marked cancelled.
    pub fn process_files(&self, files: &[PathBuf]) -> UpdateReport {
        let start = Instant::now();
        let mut report = UpdateReport::new(
            self.year,
            self.rewriter.holder(),
            self.rewriter.is_dry_run(),
        );

        for path in files {
            if !self.shutdown.is_running() {
                log::warn!(
                    "Cancelled with {} of {} files checked",
                    report.files.len(),
                    files.len()
                );
                report.cancel();
                break;
            }

            let result = self.process_file(path);
            self.output_formatter.print_file_result(&result);
            report.push(result);
        }

        report.finish(start.elapsed());
        report
    }

    fn process_file(&self, path: &Path) -> FileResult {
        match self.detector.is_binary(path) {
            Ok(true) => {
                log::debug!("{} is binary", path.display());
                return FileResult::skipped_binary(path);
            }
            Ok(false) => {}
            Err(e) => {
                log::warn!("Binary check failed for {}: {}", path.display(), e);
                return FileResult::failed(path, e.user_message());
            }
        }

        match self.rewriter.update_file(path, self.year) {
            Ok(update) if update.updated() => {
                log::info!(
                    "File \"{}\" had its copyright updated ({} notices)",
                    path.display(),
                    update.changes.len()
                );
                FileResult::updated(path, update.changes)
            }
            Ok(update) => {
                log::debug!(
                    "{} notices in {} already up to date",
                    update.notices_found,
                    path.display()
                );
                FileResult::unchanged(path)
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                FileResult::failed(path, e.user_message())
            }
        }
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn request_shutdown(&self) {
        self.shutdown.request_shutdown();
    }

    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }
}

/// The local calendar year, used when no year is given explicitly.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
