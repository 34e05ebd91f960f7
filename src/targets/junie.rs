use crate::constants::{JUNIE_DIR, JUNIE_GUIDELINES_FILENAME};
use crate::models::{ParsedDocument, Target};
use crate::operations::aggregator::aggregate_documents;
use crate::targets::target_generator::TargetGenerator;
use crate::utils::file_utils::{check_file_content, remove_file_if_exists};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Writes every rule into one combined `guidelines.md`.
pub struct JunieGenerator;

fn get_guidelines_path(project_dir: &Path) -> PathBuf {
    project_dir.join(JUNIE_DIR).join(JUNIE_GUIDELINES_FILENAME)
}

impl TargetGenerator for JunieGenerator {
    fn target(&self) -> Target {
        Target::Junie
    }

    fn clean(&self, project_dir: &Path) -> Result<()> {
        remove_file_if_exists(&get_guidelines_path(project_dir))
    }

    fn generate_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> BTreeMap<PathBuf, String> {
        let mut target_files = BTreeMap::new();

        if !documents.is_empty() {
            target_files.insert(
                get_guidelines_path(project_dir),
                aggregate_documents(documents),
            );
        }

        target_files
    }

    fn check_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> Result<bool> {
        let guidelines_path = get_guidelines_path(project_dir);

        if documents.is_empty() {
            return Ok(!guidelines_path.exists());
        }

        check_file_content(&guidelines_path, &aggregate_documents(documents))
    }
}
