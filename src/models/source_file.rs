use crate::utils::frontmatter::{parse_frontmatter, FrontMatter};
use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// A rule document as read from the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// File name including the extension, e.g. `api-rules.md`.
    pub file_name: String,
    /// File name without the extension, e.g. `api-rules`.
    pub base_file_name: String,
    pub content: String,
}

impl SourceDocument {
    pub fn new(file_name: &str, content: impl Into<String>) -> Self {
        let base_file_name = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
            .to_string();

        Self {
            file_name: file_name.to_string(),
            base_file_name,
            content: content.into(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let path = file_path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file '{}'", path.display()))?;
        let content = match content.strip_prefix('\u{feff}') {
            Some(without_bom) => without_bom.to_string(),
            None => content,
        };
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("Invalid filename for path: {}", path.display()))?;

        Ok(Self::new(file_name, content))
    }

    pub fn parse(&self) -> ParsedDocument {
        let (front_matter, body) = parse_frontmatter(&self.content);
        ParsedDocument {
            file_name: self.file_name.clone(),
            base_file_name: self.base_file_name.clone(),
            front_matter,
            body,
        }
    }
}

/// Front matter and trimmed body of a single source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub file_name: String,
    pub base_file_name: String,
    pub front_matter: FrontMatter,
    pub body: String,
}
