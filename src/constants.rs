pub const MD_EXTENSION: &str = "md";
pub const AI_RULE_SOURCE_DIR: &str = "ai-rules";
pub const README_FILENAME: &str = "README.md";

pub const AI_RULE_CONFIG_YAML_FILENAME: &str = "ai-rules-config.yaml";
pub const AI_RULE_CONFIG_JSON_FILENAME: &str = "ai-rules-config.json";

pub const FRONTMATTER_DELIMITER: &str = "---";
pub const SECTION_SEPARATOR: &str = "---";

/// Glob used when a rule does not name one. Matches every file.
pub const DEFAULT_GLOB_PATTERN: &str = "**";

pub const GENERATED_FILE_WARNING: &str =
    "# This file is generated by ai-rules-convert. Edit the source rule instead.";

pub const CURSOR_RULES_DIR: &str = ".cursor/rules";
pub const CURSOR_RULE_EXTENSION: &str = "mdc";

pub const COPILOT_INSTRUCTIONS_DIR: &str = ".github/instructions";
pub const COPILOT_INSTRUCTIONS_SUFFIX: &str = ".instructions.md";

pub const JUNIE_DIR: &str = ".junie";
pub const JUNIE_GUIDELINES_FILENAME: &str = "guidelines.md";

pub const UPDATE_CHECK_TIMEOUT_SECS: u64 = 3;
