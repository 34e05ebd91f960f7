pub mod aggregator;
pub mod cleaner;
pub mod generation_result;
pub mod source_reader;

pub use cleaner::clean_generated_files;
pub use generation_result::GenerationResult;
pub use source_reader::{find_source_documents, parse_source_documents};
