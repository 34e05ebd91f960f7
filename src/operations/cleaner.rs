use crate::models::Target;
use crate::targets::TargetRegistry;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn clean_generated_files(
    project_dir: &Path,
    targets: &[Target],
    registry: &TargetRegistry,
) -> Result<()> {
    for target in targets {
        if let Some(generator) = registry.get_generator(*target) {
            debug!(%target, "cleaning generated files");
            generator.clean(project_dir)?;
        }
    }

    Ok(())
}
