//! Runtime detection and package-manager processes
//!
//! This module provides:
//! - Node.js / package manager detection (advisory only)
//! - Node.js version comparison
//! - The process-backed command runner used for installs

pub mod check;
pub mod process;
pub mod version;

pub use check::{check_node, check_package_manager, check_runtimes, RuntimeInfo, RuntimeReport};
pub use process::ProcessRunner;
