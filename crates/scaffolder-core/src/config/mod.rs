//! Project configuration resolved from the user's answers

pub mod project;

pub use project::{LanguageVariant, ProjectConfig, Styling};
