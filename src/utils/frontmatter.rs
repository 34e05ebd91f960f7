use crate::constants::FRONTMATTER_DELIMITER;
use std::collections::BTreeMap;

/// Flat `key: value` metadata scraped from the top of a rule document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    entries: BTreeMap<String, String>,
}

impl FrontMatter {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut front_matter = FrontMatter::default();
        for (key, value) in iter {
            front_matter.insert(key, value);
        }
        front_matter
    }
}

/// Strips a single matching pair of `"` or `'` wrapping the value.
pub fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Splits content into front matter and a trimmed body.
///
/// Best effort: a document without an opening and closing `---` pair is all
/// body, and lines inside the block that are blank or have no `:` are skipped.
pub fn parse_frontmatter(content: &str) -> (FrontMatter, String) {
    let lines: Vec<&str> = content.split('\n').collect();

    if lines.first().map(|line| line.trim()) != Some(FRONTMATTER_DELIMITER) {
        return (FrontMatter::default(), content.trim().to_string());
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == FRONTMATTER_DELIMITER)
        .map(|offset| offset + 1)
    else {
        return (FrontMatter::default(), content.trim().to_string());
    };

    let mut front_matter = FrontMatter::default();
    for line in &lines[1..end] {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        front_matter.insert(key.trim(), strip_matching_quotes(value.trim()));
    }

    let body = lines[end + 1..].join("\n").trim().to_string();
    (front_matter, body)
}
