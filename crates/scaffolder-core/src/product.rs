//! Product configuration trait for CLI binaries
//!
//! Each binary built on this library implements this trait to configure the
//! branding, package manager and post-setup instructions.

use crate::config::ProjectConfig;
use std::path::Path;

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - Package manager binary and its override
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Package manager binary used when no override is set
    fn default_package_manager(&self) -> &'static str {
        "npm"
    }

    /// Environment variable name for overriding the package manager binary
    fn package_manager_env(&self) -> String {
        env_var_name(self.name())
    }

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, project: &ProjectConfig) -> Vec<String>;

    /// Package manager binary, honouring the environment override
    fn package_manager(&self) -> String {
        resolve_package_manager(
            std::env::var(self.package_manager_env()).ok(),
            self.default_package_manager(),
        )
    }
}

/// `react-tools` -> `REACT_TOOLS_PACKAGE_MANAGER`
fn env_var_name(product: &str) -> String {
    format!(
        "{}_PACKAGE_MANAGER",
        product.to_ascii_uppercase().replace('-', "_")
    )
}

fn resolve_package_manager(from_env: Option<String>, default: &str) -> String {
    from_env
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
