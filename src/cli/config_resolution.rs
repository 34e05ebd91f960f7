use super::args::{
    GenerateArgs, ResolvedGenerateArgs, ResolvedStatusArgs, StatusArgs, TargetsArgs,
};
use crate::config::{self, resolve_config_targets};
use crate::models::Target;
use crate::version_check::UpdateCheckSettings;
use std::collections::BTreeSet;
use std::path::PathBuf;

fn canonical_targets(targets: Vec<Target>) -> Vec<Target> {
    targets
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn resolve_targets(targets: Option<Vec<Target>>, config: Option<&config::Config>) -> Vec<Target> {
    if let Some(targets) = targets {
        return canonical_targets(targets);
    }
    match config.and_then(|c| c.targets.as_ref()) {
        Some(names) => resolve_config_targets(names),
        None => Target::ALL.to_vec(),
    }
}

fn resolve_update_check(
    skip_update_check: bool,
    config: Option<&config::Config>,
) -> Option<UpdateCheckSettings> {
    if skip_update_check {
        return None;
    }
    let config = config?;
    if !config.check_for_updates.unwrap_or(true) {
        return None;
    }
    let url = config.update_url.clone()?;

    Some(UpdateCheckSettings {
        url,
        current_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

impl GenerateArgs {
    pub fn with_config(
        self,
        source_dir: PathBuf,
        config: Option<&config::Config>,
    ) -> ResolvedGenerateArgs {
        ResolvedGenerateArgs {
            source_dir,
            targets: resolve_targets(self.targets_args.targets, config),
            follow_symlinks: !self.no_follow_symlinks,
            update_check: resolve_update_check(self.skip_update_check, config),
        }
    }
}

impl StatusArgs {
    pub fn with_config(
        self,
        source_dir: PathBuf,
        config: Option<&config::Config>,
    ) -> ResolvedStatusArgs {
        ResolvedStatusArgs {
            source_dir,
            targets: resolve_targets(self.targets_args.targets, config),
            follow_symlinks: !self.no_follow_symlinks,
        }
    }
}

impl TargetsArgs {
    /// Targets named on the command line, or every target.
    pub fn targets_or_all(self) -> Vec<Target> {
        resolve_targets(self.targets, None)
    }
}
