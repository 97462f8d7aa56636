//! Runtime detection for Node.js and the package manager

use super::version::{check_node_compatibility, MINIMUM_NODE_VERSION};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// `name (version)` or `name (not installed)`
    pub fn summary(&self) -> String {
        if self.available {
            format!(
                "{} ({})",
                self.name,
                self.version.as_deref().unwrap_or("unknown")
            )
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Outcome of the pre-flight runtime check
///
/// Nothing here is fatal: a missing package manager surfaces later as a failed
/// install step.
#[derive(Debug, Clone)]
pub struct RuntimeReport {
    pub runtimes: Vec<RuntimeInfo>,
    pub warnings: Vec<String>,
}

fn probe(binary: &str, name: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: name.to_string(),
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: name.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("node", "Node.js")
}

/// Check if the given package manager binary is available
pub fn check_package_manager(binary: &str) -> RuntimeInfo {
    probe(binary, binary)
}

/// Check Node.js and the package manager, collecting advisory warnings
pub fn check_runtimes(package_manager: &str) -> RuntimeReport {
    let node = check_node();
    let pm = check_package_manager(package_manager);
    let warnings = advisories(&node, &pm);

    RuntimeReport {
        runtimes: vec![node, pm],
        warnings,
    }
}

fn advisories(node: &RuntimeInfo, pm: &RuntimeInfo) -> Vec<String> {
    let mut warnings = Vec::new();

    if !node.available {
        warnings.push("Node.js not found (install from https://nodejs.org)".to_string());
    } else if let Some(found) = &node.version {
        if let Some(warning) = check_node_compatibility(found, MINIMUM_NODE_VERSION) {
            warnings.push(warning);
        }
    }

    if !pm.available {
        warnings.push(format!(
            "{} not found; dependency installation will fail",
            pm.name
        ));
    }

    warnings
}
