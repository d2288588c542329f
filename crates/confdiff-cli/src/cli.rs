use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Structural diff and inspection for configuration files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
    Detailed,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two configuration files
    Diff(DiffArgs),
    /// Export a configuration as YAML annotated with documentation
    Export(ExportArgs),
    /// Show documentation for configuration keys
    Docs(DocsArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Baseline configuration file
    pub left: String,
    /// Configuration file compared against the baseline
    pub right: String,
    #[arg(long, default_value = "detailed")]
    pub format: OutputFormat,
    /// Also report values that did not change
    #[arg(long)]
    pub include_unchanged: bool,
    /// Deepest path level to compare
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Object key skipped at every depth (repeatable)
    #[arg(long = "ignore-key")]
    pub ignore_keys: Vec<String>,
    /// Path pattern skipped with its subtree, `*` wildcards allowed (repeatable)
    #[arg(long = "ignore-path")]
    pub ignore_paths: Vec<String>,
    /// Separator between path segments in reported paths
    #[arg(long, default_value = ".")]
    pub separator: String,
    /// Rewrite absolute filesystem paths to base-relative form before comparing
    #[arg(long)]
    pub normalize_paths: bool,
    /// Base directory for --normalize-paths; defaults to each side's detected base
    #[arg(long)]
    pub base_path: Option<String>,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Configuration file to export
    pub file: String,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct DocsArgs {
    /// Key to document (for example devtool or output.path); omit to list all
    pub key: Option<String>,
}
