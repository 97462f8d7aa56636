//! package.json manifest generation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version written into every new manifest
pub const INITIAL_VERSION: &str = "1.0.0";

/// npm scripts wired to the bundler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub start: String,
    pub build: String,
}

impl Default for Scripts {
    fn default() -> Self {
        Self {
            start: "webpack serve --mode development --open".to_string(),
            build: "webpack --mode production".to_string(),
        }
    }
}

/// The generated package.json
///
/// Dependency maps start empty; the install plan fills them in through the
/// package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    pub scripts: Scripts,
}

impl PackageManifest {
    /// Manifest for a freshly scaffolded project
    pub fn for_project(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
            scripts: Scripts::default(),
        }
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn to_json(&self) -> String {
        let mut json =
            serde_json::to_string_pretty(self).expect("package manifest is always serializable");
        json.push('\n');
        json
    }
}
