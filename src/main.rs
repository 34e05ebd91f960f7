mod cli;
mod commands;
mod config;
mod constants;
mod logging;
mod models;
mod operations;
mod targets;
mod utils;
mod version_check;

use cli::run_cli;

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("❌ Error: {e:?}");
        std::process::exit(1);
    }
}
