use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a single content item.
    Analyze(AnalyzeArgs),
    /// Analyze every item in a file; failures are reported per item.
    Batch(InputArgs),
    /// Rank items by overall impact score.
    Rank(RankArgs),
    /// Summary report: count, average, priority histogram, top insights.
    Report(ReportArgs),
    /// Show the scoring criteria in effect.
    Criteria(CriteriaArgs),
}

/// Where content items come from and how to treat persisted scores.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// JSON file with one content item or an array of them ("-" for stdin)
    pub input: PathBuf,

    /// Ignore persisted impact scores and score from scratch
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, Debug, Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Max ranked rows (overrides the global --limit)
    #[arg(long = "top")]
    pub top: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the Markdown summary instead of structured output
    #[arg(long)]
    pub text: bool,
}

#[derive(Clone, Debug, Args)]
pub struct CriteriaArgs {
    /// Print the criteria as a prompt-ready Markdown guide
    #[arg(long)]
    pub prompt: bool,
}
