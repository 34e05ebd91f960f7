mod args;
mod config_resolution;


pub use args::*;

use crate::commands::{run_clean, run_generate, run_list_targets, run_status};
use crate::constants::AI_RULE_SOURCE_DIR;
use crate::{config, logging};
use clap::Parser;

const SUMMARY: &str = "Convert shared AI rule documents into Cursor, Copilot and Junie formats";

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.summary {
        println!("{SUMMARY}");
        return Ok(());
    }

    let current_dir = std::env::current_dir()?;
    let source_dir = current_dir.join(
        cli.source_dir
            .unwrap_or_else(|| AI_RULE_SOURCE_DIR.into()),
    );

    let config = config::load_config(&source_dir);

    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => {
            let final_args = args.with_config(source_dir, config.as_ref());
            run_generate(&current_dir, &final_args)
        }
        Commands::Status(args) => {
            let final_args = args.with_config(source_dir, config.as_ref());
            run_status(&current_dir, &final_args)
        }
        Commands::Clean(args) => run_clean(&current_dir, &args.targets_or_all()),
        Commands::ListTargets => run_list_targets(),
    }
}
