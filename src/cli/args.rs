use crate::models::Target;
use crate::version_check::UpdateCheckSettings;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ai-rules-convert",
    about = format!("AI Rules Converter - {}", super::SUMMARY),
    version
)]
pub struct Cli {
    #[arg(long)]
    pub summary: bool,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Directory holding the source rule files (default: ai-rules)"
    )]
    pub source_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate rule files for the enabled targets (default command)
    Generate(GenerateArgs),
    /// Show whether generated rule files are in sync with the sources
    Status(StatusArgs),
    /// Remove generated rule files
    Clean(TargetsArgs),
    /// List all supported targets
    ListTargets,
}

#[derive(Args, Default, Clone)]
#[command(after_help = "Examples:
  ai-rules-convert generate                          # Generate using config file settings (or all targets if no config file)
  ai-rules-convert generate --targets cursor,junie   # Generate for specific targets only
  ai-rules-convert --source-dir docs/rules generate  # Read rules from another directory

Configuration Precedence (highest to lowest):
  1. CLI options (--targets, --skip-update-check)
  2. Config file: <source-dir>/ai-rules-config.yaml (or .json)
  3. Default values (all targets, update check when an update_url is configured)")]
pub struct GenerateArgs {
    #[command(flatten)]
    pub targets_args: TargetsArgs,
    #[arg(
        long,
        help = "Do not follow symlinks when discovering rule files (symlinks are followed by default)"
    )]
    pub no_follow_symlinks: bool,
    #[arg(long, help = "Skip the check for a newer release")]
    pub skip_update_check: bool,
}

#[derive(Args, Default, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub targets_args: TargetsArgs,
    #[arg(
        long,
        help = "Do not follow symlinks when discovering rule files (match the generate run)"
    )]
    pub no_follow_symlinks: bool,
}

#[derive(Args, Default, Clone)]
pub struct TargetsArgs {
    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated list of targets (cursor, copilot, junie)"
    )]
    pub targets: Option<Vec<Target>>,
}

/// Settings for one `generate` run, fixed before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGenerateArgs {
    pub source_dir: PathBuf,
    pub targets: Vec<Target>,
    pub follow_symlinks: bool,
    pub update_check: Option<UpdateCheckSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStatusArgs {
    pub source_dir: PathBuf,
    pub targets: Vec<Target>,
    pub follow_symlinks: bool,
}
