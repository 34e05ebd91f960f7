use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists files directly inside `dir` with the given extension, sorted by path.
/// Hidden files are skipped.
pub fn find_files_by_extension(
    dir: &Path,
    extension: &str,
    follow_symlinks: bool,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .hidden(true)
        .follow_links(follow_symlinks)
        .max_depth(Some(1))
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to list '{}'", dir.display()))?;
        let path = entry.path();
        let is_file = entry.file_type().is_some_and(|file_type| file_type.is_file());

        if is_file && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    // Sort files alphabetically for deterministic output across filesystems
    files.sort();

    Ok(files)
}

pub fn write_directory_files(files_to_write: &BTreeMap<PathBuf, String>) -> Result<()> {
    for (file_path, content) in files_to_write {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        fs::write(file_path, content)
            .with_context(|| format!("Failed to write '{}'", file_path.display()))?;
    }

    Ok(())
}

pub fn remove_dir_if_exists(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("Failed to remove '{}'", dir.display()))?;
    }
    Ok(())
}

pub fn remove_file_if_exists(file: &Path) -> Result<()> {
    // A broken symlink does not "exist" but still has to go
    if file.exists() || file.is_symlink() {
        fs::remove_file(file).with_context(|| format!("Failed to remove '{}'", file.display()))?;
    }
    Ok(())
}

/// True when `dir` holds exactly the expected files with the expected contents.
pub fn check_directory_exact_match(
    dir: &Path,
    expected_files: &BTreeMap<PathBuf, String>,
) -> Result<bool> {
    if !dir.exists() {
        return Ok(expected_files.is_empty());
    }

    let actual_files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .collect();

    if actual_files.len() != expected_files.len() {
        return Ok(false);
    }

    for (file_path, expected_content) in expected_files {
        if !check_file_content(file_path, expected_content)? {
            return Ok(false);
        }
    }

    Ok(true)
}

pub fn check_file_content(file_path: &Path, expected_content: &str) -> Result<bool> {
    if !file_path.is_file() {
        return Ok(false);
    }
    let actual_content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read '{}'", file_path.display()))?;
    Ok(actual_content == expected_content)
}
