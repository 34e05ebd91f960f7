use crate::constants::{
    COPILOT_INSTRUCTIONS_DIR, COPILOT_INSTRUCTIONS_SUFFIX, DEFAULT_GLOB_PATTERN,
    FRONTMATTER_DELIMITER, GENERATED_FILE_WARNING,
};
use crate::models::{ParsedDocument, Target};
use crate::targets::target_generator::TargetGenerator;
use crate::utils::file_utils::{check_directory_exact_match, remove_dir_if_exists};
use crate::utils::frontmatter::FrontMatter;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct CopilotGenerator;

fn get_instructions_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(COPILOT_INSTRUCTIONS_DIR)
}

impl TargetGenerator for CopilotGenerator {
    fn target(&self) -> Target {
        Target::Copilot
    }

    fn clean(&self, project_dir: &Path) -> Result<()> {
        remove_dir_if_exists(&get_instructions_dir(project_dir))
    }

    fn generate_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> BTreeMap<PathBuf, String> {
        let instructions_dir = get_instructions_dir(project_dir);

        documents
            .iter()
            .map(|document| {
                let file_name = format!(
                    "{}{}",
                    document.base_file_name, COPILOT_INSTRUCTIONS_SUFFIX
                );
                let mut content =
                    render_copilot_header(&document.front_matter, &document.file_name);
                content.push_str(&document.body);
                (instructions_dir.join(file_name), content)
            })
            .collect()
    }

    fn check_target_contents(
        &self,
        documents: &[ParsedDocument],
        project_dir: &Path,
    ) -> Result<bool> {
        let expected_files = self.generate_target_contents(documents, project_dir);
        check_directory_exact_match(&get_instructions_dir(project_dir), &expected_files)
    }
}

/// Renders the `.instructions.md` header block.
///
/// The glob is used exactly as parsed and always wrapped in single quotes.
/// `_fallback_name` is unused because Copilot headers carry no description.
pub fn render_copilot_header(front_matter: &FrontMatter, _fallback_name: &str) -> String {
    let pattern = front_matter.get("globs").unwrap_or(DEFAULT_GLOB_PATTERN);

    format!(
        "{FRONTMATTER_DELIMITER}\n{GENERATED_FILE_WARNING}\napplyTo: '{pattern}'\n{FRONTMATTER_DELIMITER}\n\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SourceDocument;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    fn expected_header(apply_to: &str) -> String {
        format!("---\n{GENERATED_FILE_WARNING}\napplyTo: '{apply_to}'\n---\n\n")
    }

    #[test]
    fn test_render_copilot_header_scoped_glob() {
        let front_matter: FrontMatter = [("globs", "**/Api/**/*.cs")].into_iter().collect();

        let header = render_copilot_header(&front_matter, "api.md");

        assert!(header.contains("\napplyTo: '**/Api/**/*.cs'\n"));
        assert_eq!(header, expected_header("**/Api/**/*.cs"));
    }

    #[test]
    fn test_render_copilot_header_default_glob() {
        let header = render_copilot_header(&FrontMatter::default(), "general.md");

        assert_eq!(header, expected_header("**"));
    }

    #[test]
    fn test_render_copilot_header_keeps_residual_quotes() {
        let front_matter: FrontMatter = [("globs", "'**/*.ts'")].into_iter().collect();

        let header = render_copilot_header(&front_matter, "quoted.md");

        assert!(header.contains("\napplyTo: ''**/*.ts''\n"));
    }

    #[test]
    fn test_render_copilot_header_ignores_description() {
        let front_matter: FrontMatter = [("description", "Not rendered")].into_iter().collect();

        let header = render_copilot_header(&front_matter, "desc.md");

        assert!(!header.contains("description"));
    }

    #[test]
    fn test_generate_target_contents_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let document = SourceDocument::new(
            "api.md",
            "---\ndescription: API rules\nglobs: \"**/Controllers/**/*.cs\"\n---\nUse DI for all services.\n",
        )
        .parse();

        let result = CopilotGenerator.generate_target_contents(&[document], temp_dir.path());

        assert_eq!(result.len(), 1);
        let content = result
            .get(&temp_dir.path().join(".github/instructions/api.instructions.md"))
            .unwrap();
        assert_eq!(
            content,
            &format!(
                "{}Use DI for all services.",
                expected_header("**/Controllers/**/*.cs")
            )
        );
    }

    #[test]
    fn test_clean_leaves_other_github_files() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), ".github/workflows/ci.yml", "on: push");
        create_file(
            temp_dir.path(),
            ".github/instructions/old.instructions.md",
            "old",
        );

        CopilotGenerator.clean(temp_dir.path()).unwrap();

        assert_file_not_exists(temp_dir.path(), ".github/instructions");
        assert_file_exists(temp_dir.path(), ".github/workflows/ci.yml");
    }

    #[test]
    fn test_check_target_contents_detects_stale_file() {
        let temp_dir = TempDir::new().unwrap();
        let documents = vec![create_test_document("api", &[], "body")];
        let written = CopilotGenerator.generate_target_contents(&documents, temp_dir.path());
        crate::utils::file_utils::write_directory_files(&written).unwrap();

        assert!(CopilotGenerator
            .check_target_contents(&documents, temp_dir.path())
            .unwrap());

        create_file(
            temp_dir.path(),
            ".github/instructions/removed.instructions.md",
            "stale",
        );
        assert!(!CopilotGenerator
            .check_target_contents(&documents, temp_dir.path())
            .unwrap());
    }
}
