mod catalog;
mod cli;
mod config;
mod engine;
mod error;
mod report;
mod types;

use crate::error::{CompassError, Result};
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_catalog_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CompassError::PathNotFound(path.display().to_string()));
    }
    Ok(())
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&config::CompassConfig>,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|cfg| cfg.output.format.as_deref()) {
            Some("json") => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Recommend(cmd) => {
            check_catalog_dir(&cmd.path)?;
            let loaded = config::load_config(&cmd.path)?;
            let catalog = catalog::load_catalog(&cmd.path, loaded.as_ref())?;
            let answers = catalog::load_answers(&cmd.answers)?;

            let grade = engine::find_grade(&catalog.questions, &answers)?;
            let recommendations = engine::recommend(&catalog, &answers)?;
            let profile = engine::profile::trait_profile(&catalog.questions, &answers);

            let no_matches = recommendations.is_empty();
            let report_data =
                types::report::RecommendationReport::new(grade, recommendations, profile);
            let format = resolve_format(cmd.format, loaded.as_ref());
            let rendered = report::render_recommendations(&report_data, format)?;
            println!("{rendered}");

            if no_matches {
                eprintln!("warning: no direction accepts grade {grade}");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Profile(cmd) => {
            check_catalog_dir(&cmd.path)?;
            let loaded = config::load_config(&cmd.path)?;
            let catalog = catalog::load_catalog(&cmd.path, loaded.as_ref())?;
            let answers = catalog::load_answers(&cmd.answers)?;

            let profile = engine::profile::trait_profile(&catalog.questions, &answers);
            let report_data = types::report::ProfileReport::new(profile);
            let format = resolve_format(cmd.format, loaded.as_ref());
            let rendered = report::render_profile(&report_data, format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            check_catalog_dir(&cmd.path)?;
            let loaded = config::load_config(&cmd.path)?;
            let catalog = catalog::load_catalog(&cmd.path, loaded.as_ref())?;
            let findings = catalog::lint::lint_catalog(&catalog);

            if findings.is_empty() {
                println!("validate: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
