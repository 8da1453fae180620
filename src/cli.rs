use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "compass",
    version,
    about = "Career-orientation quiz scoring and direction ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score answers against the catalog and print the top-3 directions
    Recommend(RecommendCommand),
    /// Print the trait profile derived from answers alone
    Profile(ProfileCommand),
    /// Lint the catalog for structural problems
    Validate(ValidateCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Directory holding directions.json and questions.json
    pub path: PathBuf,
    /// JSON file with the collected answers
    #[arg(short, long)]
    pub answers: PathBuf,
    /// Report format; defaults to the config's output.format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ProfileCommand {
    /// Directory holding directions.json and questions.json
    pub path: PathBuf,
    /// JSON file with the collected answers
    #[arg(short, long)]
    pub answers: PathBuf,
    /// Report format; defaults to the config's output.format, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ValidateCommand {
    /// Directory holding directions.json and questions.json
    pub path: PathBuf,
}
