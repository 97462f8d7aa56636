//! Dependency planning and installation
//!
//! This module provides:
//! - The ordered install plan derived from a project config (`plan`)
//! - A sequential executor over an abstract command runner (`executor`)

pub mod executor;
pub mod plan;

pub use executor::{execute_plan, CommandRunner, InstallEvent};
pub use plan::{build_plan, InstallStep, StepKind};
