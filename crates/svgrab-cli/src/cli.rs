//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "svgrab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract embedded images into a ZIP archive
    Extract(ExtractArgs),
    /// List embedded images without extracting
    List(ListArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to an SVG file, or an http(s) URL with --url
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Treat INPUT as a URL to fetch
    #[arg(long)]
    pub url: bool,

    /// Output path (default: <input stem>-images.zip)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write only the decoded image at this zero-based index (no ZIP)
    #[arg(long, value_name = "INDEX")]
    pub only: Option<usize>,

    /// Fetch timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Fetch retry budget (exponential backoff, 1s base)
    #[arg(long, default_value = "0", value_name = "N")]
    pub retries: u32,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to an SVG file, or an http(s) URL with --url
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Treat INPUT as a URL to fetch
    #[arg(long)]
    pub url: bool,

    /// Fetch timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Fetch retry budget (exponential backoff, 1s base)
    #[arg(long, default_value = "0", value_name = "N")]
    pub retries: u32,

    /// Show detailed image information
    #[arg(short, long)]
    pub long: bool,

    /// Show sizes in human-readable format
    #[arg(short = 'H', long)]
    pub human_readable: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["svgrab", "extract", "drawing.svg"]);
        let Commands::Extract(args) = &cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(args.input, "drawing.svg");
        assert!(!args.url);
        assert_eq!(args.timeout, 30);
        assert_eq!(args.retries, 0);
        assert!(args.only.is_none());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["svgrab", "--quiet", "--verbose", "list", "a.svg"]);
        assert!(result.is_err());
    }
}
