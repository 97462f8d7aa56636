//! Node.js version comparison

use anyhow::Result;
use semver::Version;

/// Oldest Node.js release webpack-dev-server 5 supports
pub const MINIMUM_NODE_VERSION: &str = "18.12.0";

/// Compare a detected Node.js version against the minimum
/// Returns a warning message if the detected version is older
pub fn check_node_compatibility(found: &str, minimum: &str) -> Option<String> {
    let found_ver = parse_version(found).ok()?; // Can't compare, skip warning
    let minimum_ver = parse_version(minimum).ok()?;

    if found_ver < minimum_ver {
        Some(format!(
            "Node.js {} is older than {}; the dev server may not start",
            found_ver, minimum_ver
        ))
    } else {
        None
    }
}

/// Parse version string, handling the `v` prefix `node --version` prints
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
