use crate::cli::ResolvedStatusArgs;
use crate::commands::generate::join_targets;
use crate::models::Target;
use crate::operations;
use crate::targets::TargetRegistry;
use crate::utils::print_utils::{print_info, print_success, print_warning};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, PartialEq)]
pub struct ProjectStatus {
    pub documents: usize,
    pub target_statuses: BTreeMap<Target, bool>,
}

impl ProjectStatus {
    pub fn all_in_sync(&self) -> bool {
        self.target_statuses.values().all(|in_sync| *in_sync)
    }
}

pub fn run_status(project_dir: &Path, args: &ResolvedStatusArgs) -> Result<()> {
    print_info(&format!(
        "AI rules status for targets: {}",
        join_targets(&args.targets)
    ));

    let status = check_project_status(project_dir, args)?;
    print_status_results(&status);

    Ok(())
}

pub fn check_project_status(project_dir: &Path, args: &ResolvedStatusArgs) -> Result<ProjectStatus> {
    let registry = TargetRegistry::new();
    let documents = operations::find_source_documents(&args.source_dir, args.follow_symlinks)?;
    let parsed_documents = operations::parse_source_documents(&documents);

    let mut target_statuses = BTreeMap::new();
    for target in &args.targets {
        if let Some(generator) = registry.get_generator(*target) {
            let in_sync = generator.check_target_contents(&parsed_documents, project_dir)?;
            target_statuses.insert(*target, in_sync);
        }
    }

    Ok(ProjectStatus {
        documents: parsed_documents.len(),
        target_statuses,
    })
}

fn print_status_results(status: &ProjectStatus) {
    print_info(&format!("Checked {} rule file(s)", status.documents));
    for (target, in_sync) in &status.target_statuses {
        if *in_sync {
            print_success(&format!("{target}: in sync"));
        } else {
            print_warning(&format!("{target}: out of sync"));
        }
    }

    if !status.all_in_sync() {
        print_info("Run 'ai-rules-convert generate' to update the generated files");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ResolvedGenerateArgs;
    use crate::commands::run_generate;
    use crate::utils::test_utils::helpers::*;
    use tempfile::TempDir;

    fn status_args(project_dir: &Path) -> ResolvedStatusArgs {
        ResolvedStatusArgs {
            source_dir: project_dir.join("ai-rules"),
            targets: Target::ALL.to_vec(),
            follow_symlinks: true,
        }
    }

    #[test]
    fn test_status_after_generate_then_edit() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_file(
            project_dir,
            "ai-rules/api.md",
            "---\nglobs: \"**/*.cs\"\n---\nUse DI.",
        );

        let status = check_project_status(project_dir, &status_args(project_dir)).unwrap();
        assert_eq!(status.documents, 1);
        assert!(!status.all_in_sync());

        let generate_args = ResolvedGenerateArgs {
            source_dir: project_dir.join("ai-rules"),
            targets: Target::ALL.to_vec(),
            follow_symlinks: true,
            update_check: None,
        };
        run_generate(project_dir, &generate_args).unwrap();

        let status = check_project_status(project_dir, &status_args(project_dir)).unwrap();
        assert!(status.all_in_sync());

        create_file(project_dir, ".junie/guidelines.md", "hand edited");

        let status = check_project_status(project_dir, &status_args(project_dir)).unwrap();
        assert!(!status.target_statuses[&Target::Junie]);
        assert!(status.target_statuses[&Target::Cursor]);
        assert!(status.target_statuses[&Target::Copilot]);
    }

    #[test]
    fn test_status_only_reports_selected_targets() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        std::fs::create_dir(project_dir.join("ai-rules")).unwrap();

        let args = ResolvedStatusArgs {
            targets: vec![Target::Copilot],
            ..status_args(project_dir)
        };
        let status = check_project_status(project_dir, &args).unwrap();

        assert_eq!(status.target_statuses.len(), 1);
        assert!(status.target_statuses[&Target::Copilot]);
    }

    #[cfg(unix)]
    #[test]
    fn test_status_in_sync_after_generate_without_following_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let project_dir = temp_dir.path();
        create_file(project_dir, "ai-rules/local.md", "Local rule.");
        create_file(project_dir, "shared/linked.md", "Linked rule.");
        std::os::unix::fs::symlink(
            project_dir.join("shared/linked.md"),
            project_dir.join("ai-rules/linked.md"),
        )
        .unwrap();

        let generate_args = ResolvedGenerateArgs {
            source_dir: project_dir.join("ai-rules"),
            targets: Target::ALL.to_vec(),
            follow_symlinks: false,
            update_check: None,
        };
        run_generate(project_dir, &generate_args).unwrap();

        let args = ResolvedStatusArgs {
            follow_symlinks: false,
            ..status_args(project_dir)
        };
        let status = check_project_status(project_dir, &args).unwrap();
        assert_eq!(status.documents, 1);
        assert!(status.all_in_sync());

        let followed = check_project_status(project_dir, &status_args(project_dir)).unwrap();
        assert_eq!(followed.documents, 2);
        assert!(!followed.all_in_sync());
    }

    #[test]
    fn test_status_missing_source_dir() {
        let temp_dir = TempDir::new().unwrap();

        let result = check_project_status(temp_dir.path(), &status_args(temp_dir.path()));

        assert!(result.is_err());
    }
}
