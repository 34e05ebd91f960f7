use crate::commands::generate::join_targets;
use crate::models::Target;
use crate::operations;
use crate::targets::TargetRegistry;
use crate::utils::print_utils::print_success;
use anyhow::Result;
use std::path::Path;

pub fn run_clean(project_dir: &Path, targets: &[Target]) -> Result<()> {
    let registry = TargetRegistry::new();

    operations::clean_generated_files(project_dir, targets, &registry)?;

    print_success(&format!(
        "Removed generated files for targets: {}",
        join_targets(targets)
    ));
    Ok(())
}
