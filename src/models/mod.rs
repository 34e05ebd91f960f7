pub mod source_file;
pub mod target;

pub use source_file::{ParsedDocument, SourceDocument};
pub use target::Target;
