use crate::constants::{
    CURSOR_RULES_DIR, CURSOR_RULE_EXTENSION, DEFAULT_GLOB_PATTERN, FRONTMATTER_DELIMITER,
    GENERATED_FILE_WARNING,
};
use crate::models::{ParsedDocument, Target};
use crate::targets::target_generator::TargetGenerator;
use crate::utils::file_utils::{check_directory_exact_match, remove_dir_if_exists};
use crate::utils::frontmatter::{strip_matching_quotes, FrontMatter};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct CursorGenerator;

fn get_cursor_rules_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(CURSOR_RULES_DIR)
}

impl TargetGenerator for CursorGenerator {
    fn target(&self) -> Target {
        Target::Cursor
    }

    fn clean(&self, project_dir: &Path) -> Result<()> {
        remove_dir_if_exists(&get_cursor_rules_dir(project_dir))
    }

    fn generate_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> BTreeMap<PathBuf, String> {
        let cursor_rules_dir = get_cursor_rules_dir(project_dir);

        documents
            .iter()
            .map(|document| {
                let file_name = format!("{}.{}", document.base_file_name, CURSOR_RULE_EXTENSION);
                (
                    cursor_rules_dir.join(file_name),
                    generate_rule_file_content(document),
                )
            })
            .collect()
    }

    fn check_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> Result<bool> {
        let expected_files = self.generate_target_contents(documents, project_dir);
        check_directory_exact_match(&get_cursor_rules_dir(project_dir), &expected_files)
    }
}

/// Renders the `.mdc` header block.
///
/// A `**` glob means the rule covers every file, which Cursor expresses as
/// an empty `globs` with `alwaysApply: true`.
pub fn render_cursor_header(front_matter: &FrontMatter, fallback_name: &str) -> String {
    let description = match front_matter.get("description") {
        Some(description) => description.to_string(),
        None => format!("Generated from {fallback_name}"),
    };
    let pattern = strip_matching_quotes(
        front_matter
            .get("globs")
            .unwrap_or(DEFAULT_GLOB_PATTERN),
    );

    let (globs, always_apply) = if pattern == DEFAULT_GLOB_PATTERN {
        ("", true)
    } else {
        (pattern, false)
    };

    format!(
        "{FRONTMATTER_DELIMITER}\n{GENERATED_FILE_WARNING}\ndescription: {description}\nglobs: {globs}\nalwaysApply: {always_apply}\n{FRONTMATTER_DELIMITER}\n\n"
    )
}

fn generate_rule_file_content(document: &ParsedDocument) -> String {
    let mut content = render_cursor_header(&document.front_matter, &document.file_name);
    content.push_str(&document.body);
    content
}
