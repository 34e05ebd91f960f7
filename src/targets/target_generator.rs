use crate::models::{ParsedDocument, Target};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub trait TargetGenerator {
    fn target(&self) -> Target;

    /// Removes everything a previous run generated for this target.
    fn clean(&self, project_dir: &Path) -> Result<()>;

    /// Maps each output path to the content that should be written there.
    fn generate_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> BTreeMap<PathBuf, String>;

    /// True when the files on disk match what `generate_target_contents` produces.
    fn check_target_contents(&self, documents: &[ParsedDocument], project_dir: &Path)
        -> Result<bool>;
}
