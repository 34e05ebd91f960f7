use crate::models::Target;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct GenerationResult {
    pub documents_processed: usize,
    pub files_by_target: BTreeMap<Target, Vec<PathBuf>>,
}

impl GenerationResult {
    pub fn add_file(&mut self, target: Target, file_path: PathBuf) {
        self.files_by_target
            .entry(target)
            .or_default()
            .push(file_path);
    }

    pub fn file_count(&self) -> usize {
        self.files_by_target.values().map(Vec::len).sum()
    }

    /// Renders the generated files as a tree grouped by target, paths
    /// relative to `project_dir`.
    pub fn render(&self, project_dir: &Path) -> String {
        let mut output = String::new();

        for (target, files) in &self.files_by_target {
            if files.is_empty() {
                continue;
            }

            output.push_str(&format!("{target}:\n"));
            for (i, file) in files.iter().enumerate() {
                let prefix = if i == files.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                let relative_path = file.strip_prefix(project_dir).unwrap_or(file);
                output.push_str(&format!("{prefix}{}\n", relative_path.display()));
            }
        }

        output
    }
}
