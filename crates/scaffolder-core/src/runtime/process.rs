//! Package-manager invocation through real child processes

use crate::error::RunnerError;
use crate::install::CommandRunner;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// How many trailing stderr lines are kept for error reports
const STDERR_TAIL_LINES: usize = 20;

/// Spawns the package manager and waits for it to exit
///
/// Output is captured rather than streamed; on failure the tail of stderr is
/// carried in the error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<(), RunnerError> {
        let executable = platform_executable(program);

        let output = TokioCommand::new(&executable)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| RunnerError::Spawn {
                program: executable.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(RunnerError::Failed {
                program: executable,
                code: output.status.code(),
                stderr: tail(&String::from_utf8_lossy(&output.stderr), STDERR_TAIL_LINES),
            })
        }
    }
}

/// npm ships as a `.cmd` shim on Windows, which `CreateProcess` won't find by bare name
fn platform_executable(program: &str) -> String {
    if cfg!(windows) && Path::new(program).extension().is_none() {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
