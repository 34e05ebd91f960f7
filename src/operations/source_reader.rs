use crate::constants::{MD_EXTENSION, README_FILENAME};
use crate::models::{ParsedDocument, SourceDocument};
use crate::utils::file_utils::find_files_by_extension;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

fn is_readme(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(README_FILENAME))
}

fn get_md_files_in_source_dir(source_dir: &Path, follow_symlinks: bool) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        bail!("Source directory '{}' does not exist", source_dir.display());
    }

    let files = find_files_by_extension(source_dir, MD_EXTENSION, follow_symlinks)?;
    Ok(files.into_iter().filter(|path| !is_readme(path)).collect())
}

/// Reads every rule document in `source_dir`, sorted by file name.
pub fn find_source_documents(
    source_dir: &Path,
    follow_symlinks: bool,
) -> Result<Vec<SourceDocument>> {
    let paths = get_md_files_in_source_dir(source_dir, follow_symlinks)?;
    debug!(count = paths.len(), dir = %source_dir.display(), "discovered rule files");

    paths.iter().map(SourceDocument::from_file).collect()
}

pub fn parse_source_documents(documents: &[SourceDocument]) -> Vec<ParsedDocument> {
    documents
        .iter()
        .map(|document| {
            let parsed = document.parse();
            debug!(
                file = %document.file_name,
                keys = parsed.front_matter.len(),
                "parsed front matter"
            );
            parsed
        })
        .collect()
}
