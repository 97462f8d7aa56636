//! Project templates and the file tree they produce
//!
//! This module provides:
//! - The template table and rendering (`store`)
//! - package.json generation (`manifest`)
//! - Writing rendered files under a project root (`writer`)

pub mod manifest;
pub mod store;
pub mod writer;

pub use manifest::PackageManifest;
pub use store::{render_files, FileSpec, TemplateEntry, REQUIRED_DIRS, TEMPLATES};
pub use writer::write_tree;
