use anyhow::Context;
use clap::Parser;
use copyright_update::{
    Cli, CopyrightUpdater, OutputFormatter, OutputMode, UpdateReport, UpdaterError,
    UserFriendlyError,
};
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("Warning: {:#}", e);
    }

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let updater = match CopyrightUpdater::from_cli(&cli) {
        Ok(updater) => updater,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    let changed_files = match cli
        .read_changed_files()
        .context("Failed to read the changed file list from stdin")
    {
        Ok(raw) => raw,
        Err(e) => {
            updater.output_formatter().error(&format!("{:#}", e));
            return 1;
        }
    };

    let report = updater.run(&changed_files);
    updater.output_formatter().print_report(&report);
    exit_code(&report)
}

fn exit_code(report: &UpdateReport) -> i32 {
    if report.cancelled {
        130
    } else if report.has_failures() {
        2
    } else {
        0
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "copyright-update.toml".to_string());

    match CopyrightUpdater::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  copyright-update <changed-files> --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &UpdaterError) {
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

/// `RUST_LOG` wins when set; otherwise the filter follows -v / -q.
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let mut builder = match std::env::var("RUST_LOG") {
        Ok(_) => env_logger::Builder::from_default_env(),
        Err(_) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(cli.log_filter());
            builder
        }
    };

    builder
        .format_timestamp(None)
        .try_init()
        .context("Failed to initialize logging")
}
