use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "urlsum",
    about = "Summarize YouTube videos or web pages from the command line",
    version,
)]
pub struct Cli {
    /// URL to summarize (reads from stdin if omitted)
    pub url: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Model used for summarization
    #[arg(long)]
    pub model: Option<String>,

    /// Preferred caption language for video transcripts
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show classification and extraction metadata
    #[arg(short, long)]
    pub verbose: bool,
}
