use crate::cli::ResolvedGenerateArgs;
use crate::models::Target;
use crate::operations::{self, GenerationResult};
use crate::targets::TargetRegistry;
use crate::utils::file_utils::write_directory_files;
use crate::utils::print_utils::{print_intro, print_outro, print_remark, print_success};
use crate::version_check::{run_update_check, HttpVersionSource};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run_generate(project_dir: &Path, args: &ResolvedGenerateArgs) -> Result<()> {
    print_intro("ai-rules-convert");

    if let Some(update_check) = &args.update_check {
        run_update_check(update_check, &HttpVersionSource::new(&update_check.url));
    }

    let registry = TargetRegistry::new();
    let result = generate_files(project_dir, args, &registry)?;

    let rendered = result.render(project_dir);
    if !rendered.is_empty() {
        print_remark(rendered.trim_end());
    }
    print_success(&format!(
        "Processed {} rule file(s) for targets: {}",
        result.documents_processed,
        join_targets(&args.targets)
    ));
    print_outro("Done");

    Ok(())
}

pub fn join_targets(targets: &[Target]) -> String {
    if targets.is_empty() {
        return "none".to_string();
    }
    targets
        .iter()
        .map(Target::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads the sources, clears previous output for the enabled targets and
/// writes the new files.
///
/// Sources are read before anything is removed, so a missing source
/// directory leaves existing output untouched.
pub fn generate_files(
    project_dir: &Path,
    args: &ResolvedGenerateArgs,
    registry: &TargetRegistry,
) -> Result<GenerationResult> {
    let documents = operations::find_source_documents(&args.source_dir, args.follow_symlinks)?;
    let parsed_documents = operations::parse_source_documents(&documents);

    operations::clean_generated_files(project_dir, &args.targets, registry)?;

    let mut result = GenerationResult {
        documents_processed: parsed_documents.len(),
        ..Default::default()
    };
    let mut files_to_write: BTreeMap<PathBuf, String> = BTreeMap::new();

    for target in &args.targets {
        if let Some(generator) = registry.get_generator(*target) {
            let target_files = generator.generate_target_contents(&parsed_documents, project_dir);
            for path in target_files.keys() {
                result.add_file(*target, path.clone());
            }
            files_to_write.extend(target_files);
        }
    }

    write_directory_files(&files_to_write)?;

    info!(
        documents = result.documents_processed,
        files = result.file_count(),
        targets = %join_targets(&args.targets),
        "generation finished"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GENERATED_FILE_WARNING;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    const API_RULE: &str = r#"---
description: API rules
globs: "**/Controllers/**/*.cs"
---
Use DI for all services.
"#;

    const GENERAL_RULE: &str = "# General\n\nKeep functions small.\n";

    fn generate_args(project_dir: &Path, targets: Vec<Target>) -> ResolvedGenerateArgs {
        ResolvedGenerateArgs {
            source_dir: project_dir.join("ai-rules"),
            targets,
            follow_symlinks: true,
            update_check: None,
        }
    }

    fn create_rules(project_dir: &Path) {
        create_file(project_dir, "ai-rules/api.md", API_RULE);
        create_file(project_dir, "ai-rules/general.md", GENERAL_RULE);
        create_file(project_dir, "ai-rules/README.md", "# How to write rules");
    }

    #[test]
    fn test_run_generate_all_targets() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_rules(project_dir);

        let result = run_generate(project_dir, &generate_args(project_dir, Target::ALL.to_vec()));
        assert!(result.is_ok());

        assert_file_content(
            project_dir,
            ".cursor/rules/api.mdc",
            &format!(
                "---\n{GENERATED_FILE_WARNING}\ndescription: API rules\nglobs: **/Controllers/**/*.cs\nalwaysApply: false\n---\n\nUse DI for all services."
            ),
        );
        assert_file_content(
            project_dir,
            ".cursor/rules/general.mdc",
            &format!(
                "---\n{GENERATED_FILE_WARNING}\ndescription: Generated from general.md\nglobs: \nalwaysApply: true\n---\n\n# General\n\nKeep functions small."
            ),
        );
        assert_file_content(
            project_dir,
            ".github/instructions/api.instructions.md",
            &format!(
                "---\n{GENERATED_FILE_WARNING}\napplyTo: '**/Controllers/**/*.cs'\n---\n\nUse DI for all services."
            ),
        );
        assert_file_content(
            project_dir,
            ".github/instructions/general.instructions.md",
            &format!(
                "---\n{GENERATED_FILE_WARNING}\napplyTo: '**'\n---\n\n# General\n\nKeep functions small."
            ),
        );
        assert_file_content(
            project_dir,
            ".junie/guidelines.md",
            "# api\n\nUse DI for all services.\n\n---\n\n# general\n\n# General\n\nKeep functions small.\n",
        );

        assert_file_not_exists(project_dir, ".cursor/rules/README.mdc");
        assert_file_not_exists(project_dir, ".github/instructions/README.instructions.md");
    }

    #[test]
    fn test_generate_files_reports_counts() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_rules(project_dir);

        let result = generate_files(
            project_dir,
            &generate_args(project_dir, Target::ALL.to_vec()),
            &TargetRegistry::new(),
        )
        .unwrap();

        assert_eq!(result.documents_processed, 2);
        assert_eq!(result.file_count(), 5);
        assert_eq!(result.files_by_target[&Target::Cursor].len(), 2);
        assert_eq!(result.files_by_target[&Target::Copilot].len(), 2);
        assert_eq!(
            result.files_by_target[&Target::Junie],
            vec![project_dir.join(".junie/guidelines.md")]
        );
    }

    #[test]
    fn test_generate_only_selected_targets() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_rules(project_dir);

        run_generate(project_dir, &generate_args(project_dir, vec![Target::Junie])).unwrap();

        assert_file_exists(project_dir, ".junie/guidelines.md");
        assert_file_not_exists(project_dir, ".cursor/rules");
        assert_file_not_exists(project_dir, ".github/instructions");
    }

    #[test]
    fn test_generate_removes_outputs_of_deleted_rules() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_rules(project_dir);
        let args = generate_args(project_dir, Target::ALL.to_vec());

        run_generate(project_dir, &args).unwrap();
        std::fs::remove_file(project_dir.join("ai-rules/api.md")).unwrap();
        run_generate(project_dir, &args).unwrap();

        assert_file_not_exists(project_dir, ".cursor/rules/api.mdc");
        assert_file_not_exists(project_dir, ".github/instructions/api.instructions.md");
        assert_file_exists(project_dir, ".cursor/rules/general.mdc");
        assert_file_content(
            project_dir,
            ".junie/guidelines.md",
            "# general\n\n# General\n\nKeep functions small.\n",
        );
    }

    #[test]
    fn test_generate_empty_source_dir() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        std::fs::create_dir(project_dir.join("ai-rules")).unwrap();
        create_file(project_dir, ".junie/guidelines.md", "stale");

        let result = generate_files(
            project_dir,
            &generate_args(project_dir, Target::ALL.to_vec()),
            &TargetRegistry::new(),
        )
        .unwrap();

        assert_eq!(result.documents_processed, 0);
        assert_eq!(result.file_count(), 0);
        assert_file_not_exists(project_dir, ".junie/guidelines.md");
    }

    #[test]
    fn test_generate_missing_source_dir_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_file(project_dir, ".cursor/rules/existing.mdc", "existing");

        let result = run_generate(project_dir, &generate_args(project_dir, Target::ALL.to_vec()));

        assert!(result.is_err());
        assert_file_exists(project_dir, ".cursor/rules/existing.mdc");
    }

    #[test]
    fn test_join_targets() {
        assert_eq!(join_targets(&Target::ALL), "cursor, copilot, junie");
        assert_eq!(join_targets(&[]), "none");
    }
}
