use crate::error::{UpdaterError, UserFriendlyError};
use crate::rewriter::{FileResult, FileStatus, UpdateReport};
use console::{style, Emoji, Term};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static SPARKLES: Emoji = Emoji("✨ ", "* ");

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
    dry_run: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    // Core messaging methods
    pub fn success(&self, message: &str) {
        if self.should_show_message(0) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Success, message),
                OutputMode::Json => self.print_json_message("success", message),
                OutputMode::Plain => println!("SUCCESS: {}", message),
            }
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => println!("INFO: {}", message),
            }
        }
    }

    pub fn debug(&self, message: &str) {
        if self.should_show_message(2) {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        println!("  {}", style(message).dim());
                    } else {
                        println!("  DEBUG: {}", message);
                    }
                }
                OutputMode::Json => self.print_json_message("debug", message),
                OutputMode::Plain => println!("DEBUG: {}", message),
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &UpdaterError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => {
                    eprintln!("SUGGESTION: {}", suggestion);
                }
            }
        }
    }

    pub fn print_candidates(&self, files: &[PathBuf]) {
        for file in files {
            self.info(&format!("File: \"{}\"", file.display()));
        }
    }

    pub fn print_file_result(&self, result: &FileResult) {
        let path = result.path.display();
        match result.status {
            FileStatus::Updated => {
                for change in &result.changes {
                    self.debug(&format!("\"{}\" -> \"{}\"", change.original, change.replacement));
                }
                self.success(&self.update_message(&result.path));
            }
            FileStatus::Unchanged => {
                self.info(&format!(
                    "Copyright either missing or up-to-date in file \"{}\"",
                    path
                ));
            }
            FileStatus::SkippedBinary => {
                self.info(&format!("Skipping binary file \"{}\"", path));
            }
            FileStatus::Failed => {
                let reason = result.error.as_deref().unwrap_or("unknown error");
                self.error(reason);
            }
        }
    }

    fn update_message(&self, path: &Path) -> String {
        if self.dry_run {
            format!("Would update copyright notice in {}", path.display())
        } else {
            format!("Updated copyright notice in {}", path.display())
        }
    }

    pub fn print_report(&self, report: &UpdateReport) {
        match self.mode {
            OutputMode::Human => self.print_human_report(report),
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => self.print_plain_report(report),
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        #[allow(clippy::type_complexity)]
        let (emoji, color_fn): (Emoji, Box<dyn Fn(&str) -> console::StyledObject<&str>>) =
            match msg_type {
                MessageType::Success => (CHECKMARK, Box::new(|msg| style(msg).green().bold())),
                MessageType::Error => (CROSS, Box::new(|msg| style(msg).red().bold())),
                MessageType::Info => (INFO, Box::new(|msg| style(msg).cyan())),
            };

        if self.use_colors {
            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, color_fn(message)),
                _ => println!("{}{}", emoji, color_fn(message)),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Success => "✓",
                MessageType::Error => "✗",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &UpdateReport) {
        if self.quiet {
            return;
        }

        let summary = report.summary();
        println!();
        if self.use_colors {
            println!(
                "{}{}",
                SPARKLES,
                style(format!("Copyright notices checked for {}", report.year))
                    .bold()
                    .cyan()
            );
        } else {
            println!("=== Copyright notices checked for {} ===", report.year);
        }

        if report.dry_run {
            println!("  (dry run, no files were written)");
        }
        if report.cancelled {
            println!("  (cancelled, remaining files were not checked)");
        }
        println!("  Files checked:   {}", summary.total);
        println!("  Updated:         {}", self.highlight(summary.updated));
        println!("  Up to date:      {}", summary.unchanged);
        println!("  Binary skipped:  {}", summary.skipped_binary);
        if summary.failed > 0 {
            println!("  Failed:          {}", summary.failed);
        }
        println!("  Time taken:      {}", format_duration(report.duration));
    }

    fn print_plain_report(&self, report: &UpdateReport) {
        if self.quiet {
            return;
        }

        let summary = report.summary();
        println!("COMPLETED: Copyright update for {}", report.year);
        if report.dry_run {
            println!("Dry run: true");
        }
        if report.cancelled {
            println!("Cancelled: true");
        }
        println!("Files: {}", summary.total);
        println!("Updated: {}", summary.updated);
        println!("Unchanged: {}", summary.unchanged);
        println!("Binary: {}", summary.skipped_binary);
        if summary.failed > 0 {
            println!("Errors: {}", summary.failed);
        }
    }

    fn highlight(&self, value: usize) -> String {
        if self.use_colors {
            style(value).green().bold().to_string()
        } else {
            value.to_string()
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Info,
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_message_reflects_dry_run() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 0, false);
        assert_eq!(
            formatter.update_message(Path::new("src/a.cs")),
            "Updated copyright notice in src/a.cs"
        );

        let formatter = formatter.with_dry_run(true);
        assert_eq!(
            formatter.update_message(Path::new("src/a.cs")),
            "Would update copyright notice in src/a.cs"
        );
    }

    #[test]
    fn test_quiet_mode() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert_eq!(formatter.verbose_level, 0);
        assert!(!formatter.use_colors);
        assert!(!formatter.should_show_message(0));
    }

    #[test]
    fn test_non_human_modes_never_use_colors() {
        assert!(!OutputFormatter::new(OutputMode::Json, 0, false).use_colors);
        assert!(!OutputFormatter::new(OutputMode::Plain, 0, false).use_colors);
    }

    #[test]
    fn test_should_show_message() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 1, false);
        assert!(formatter.should_show_message(0));
        assert!(formatter.should_show_message(1));
        assert!(!formatter.should_show_message(2));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }
}
