use crate::constants::UPDATE_CHECK_TIMEOUT_SECS;
use crate::utils::print_utils::{print_info, print_warning};
use anyhow::{anyhow, Context, Result};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheckSettings {
    pub url: String,
    pub current_version: String,
}

pub trait LatestVersionSource {
    fn latest_version(&self) -> Result<String>;
}

/// Reads the latest published version as the plain text body of a URL.
pub struct HttpVersionSource {
    url: String,
    timeout: Duration,
}

impl HttpVersionSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            timeout: Duration::from_secs(UPDATE_CHECK_TIMEOUT_SECS),
        }
    }
}

impl LatestVersionSource for HttpVersionSource {
    fn latest_version(&self) -> Result<String> {
        let body = reqwest::blocking::Client::new()
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .with_context(|| format!("Failed to fetch latest version from {}", self.url))?;

        Ok(body.trim().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate,
    UpdateAvailable { latest: String },
}

fn parse_version(version: &str) -> Option<Vec<u64>> {
    let version = version.trim().trim_start_matches('v');
    // Pre-release and build suffixes do not take part in the comparison
    let core = version.split(['-', '+']).next()?;
    core.split('.').map(|part| part.parse().ok()).collect()
}

fn compare_versions(current: &[u64], latest: &[u64]) -> Ordering {
    let len = current.len().max(latest.len());
    let pad = |parts: &[u64]| -> Vec<u64> {
        let mut padded = parts.to_vec();
        padded.resize(len, 0);
        padded
    };
    pad(current).cmp(&pad(latest))
}

pub fn check_for_update(
    current_version: &str,
    source: &dyn LatestVersionSource,
) -> Result<UpdateStatus> {
    let latest = source.latest_version()?;
    let current_parts = parse_version(current_version)
        .ok_or_else(|| anyhow!("Invalid current version '{current_version}'"))?;
    let latest_parts =
        parse_version(&latest).ok_or_else(|| anyhow!("Invalid published version '{latest}'"))?;

    debug!(current = current_version, latest = %latest, "compared versions");

    match compare_versions(&current_parts, &latest_parts) {
        Ordering::Less => Ok(UpdateStatus::UpdateAvailable { latest }),
        Ordering::Equal | Ordering::Greater => Ok(UpdateStatus::UpToDate),
    }
}

/// Reports whether a newer release exists. Never fails the run.
pub fn run_update_check(settings: &UpdateCheckSettings, source: &dyn LatestVersionSource) {
    match check_for_update(&settings.current_version, source) {
        Ok(UpdateStatus::UpToDate) => debug!("ai-rules-convert is up to date"),
        Ok(UpdateStatus::UpdateAvailable { latest }) => print_info(&format!(
            "A newer version of ai-rules-convert is available: {latest} (running {})",
            settings.current_version
        )),
        Err(e) => {
            warn!("{e:#}");
            print_warning("Could not check for updates");
        }
    }
}
