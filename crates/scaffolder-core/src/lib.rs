//! Scaffolder Core - Shared library for React project scaffolding CLIs
//!
//! This library generates a React project (webpack + Babel) from built-in
//! templates and installs its dependencies through the package manager. It is
//! designed to be used by CLI binaries that differ only in their product
//! configuration.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template rendering, file tree writing, install
//!   planning and sequential install execution
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `ProjectBuilder` for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ProjectBuilder, ProjectConfig, ProcessRunner};
//!
//! let config = ProjectConfig::new("demo")?.with_routing(true);
//! let builder = ProjectBuilder::new(config, &std::env::current_dir()?);
//! let outcome = builder.run(&ProcessRunner, "npm", |_| {}).await?;
//! ```

pub mod config;
pub mod error;
pub mod install;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{LanguageVariant, ProjectConfig, Styling};
pub use error::{RunnerError, ScaffoldError};
pub use install::{build_plan, execute_plan, CommandRunner, InstallEvent, InstallStep, StepKind};
pub use product::ProductConfig;
pub use runtime::{check_runtimes, ProcessRunner, RuntimeInfo};
pub use scaffold::{ProjectBuilder, ScaffoldOutcome};
pub use templates::{render_files, write_tree, FileSpec, PackageManifest};

#[cfg(feature = "tui")]
pub use tui::run;
