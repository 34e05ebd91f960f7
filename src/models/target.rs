use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// An assistant that consumes generated rule files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    Cursor,
    Copilot,
    Junie,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Cursor, Target::Copilot, Target::Junie];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Cursor => "cursor",
            Target::Copilot => "copilot",
            Target::Junie => "junie",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cursor" => Ok(Target::Cursor),
            "copilot" => Ok(Target::Copilot),
            "junie" => Ok(Target::Junie),
            other => Err(anyhow!(
                "Unknown target '{other}'. Supported targets: cursor, copilot, junie"
            )),
        }
    }
}
