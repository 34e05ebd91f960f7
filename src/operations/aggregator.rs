use crate::constants::SECTION_SEPARATOR;
use crate::models::ParsedDocument;

/// Concatenates document bodies into one combined document.
///
/// Each document becomes a `# <name>` section followed by a `---` separator.
/// The separator after the last section is dropped. Input order is kept.
pub fn aggregate<'a, I>(documents: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut buffer: Vec<String> = Vec::new();

    for (name, body) in documents {
        buffer.push(format!("# {name}"));
        buffer.push(String::new());
        buffer.push(body.to_string());
        buffer.push(String::new());
        buffer.push(SECTION_SEPARATOR.to_string());
        buffer.push(String::new());
    }

    if buffer.len() >= 2 && buffer[buffer.len() - 2] == SECTION_SEPARATOR {
        buffer.truncate(buffer.len() - 2);
    }

    buffer.join("\n")
}

pub fn aggregate_documents(documents: &[ParsedDocument]) -> String {
    aggregate(
        documents
            .iter()
            .map(|document| (document.base_file_name.as_str(), document.body.as_str())),
    )
}
