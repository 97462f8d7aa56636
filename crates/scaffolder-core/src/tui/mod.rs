//! Interactive `create` flow built on cliclack
//!
//! Asks for language, CSS framework, routing and state management, then drives
//! a [`ProjectBuilder`](crate::ProjectBuilder) with spinners for each phase.
//! Only compiled with the `tui` feature.

mod prompts;

pub use prompts::{run, CreateArgs};
