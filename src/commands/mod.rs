mod clean;
mod generate;
mod list_targets;
mod status;

pub use clean::run_clean;
pub use generate::run_generate;
pub use list_targets::run_list_targets;
pub use status::run_status;
