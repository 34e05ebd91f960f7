pub mod copilot;
pub mod cursor;
pub mod junie;
pub mod registry;
pub mod target_generator;

pub use registry::TargetRegistry;
