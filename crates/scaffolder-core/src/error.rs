//! Error types for the scaffolding engine

use crate::install::plan::StepKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a [`CommandRunner`](crate::install::CommandRunner)
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The process could not be started at all (binary missing, permissions)
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The process ran but exited unsuccessfully
    #[error("`{program}` exited with {}{}", exit_label(.code), stderr_suffix(.stderr))]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.trim().is_empty() {
        String::new()
    } else {
        format!(":\n{}", stderr.trim_end())
    }
}

/// Fatal errors raised while scaffolding a project
///
/// Every variant aborts the rest of the pipeline. Nothing is rolled back: a
/// filesystem error leaves a partial tree, an install error leaves a partially
/// installed project.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The project configuration was rejected before any side effect
    #[error("invalid project configuration: {0}")]
    Config(String),

    /// Creating a directory or writing a file failed
    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A package-manager invocation failed; later steps were not run
    #[error("install step {step}/{total} ({kind}) failed: `{command}`")]
    Install {
        /// 1-based index of the failing step
        step: usize,
        total: usize,
        kind: StepKind,
        command: String,
        #[source]
        source: RunnerError,
    },
}

impl ScaffoldError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}
