//! Sequential execution of an install plan

use super::plan::InstallStep;
use crate::error::{RunnerError, ScaffoldError};
use std::future::Future;
use std::path::Path;

/// Runs one external command to completion
///
/// The production implementation spawns a real process
/// ([`ProcessRunner`](crate::runtime::process::ProcessRunner)); tests substitute
/// a recording fake.
pub trait CommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: &Path,
    ) -> impl Future<Output = Result<(), RunnerError>> + Send;
}

/// Progress notifications emitted while a plan runs
#[derive(Debug, Clone, Copy)]
pub enum InstallEvent<'a> {
    Started {
        /// 1-based
        index: usize,
        total: usize,
        step: &'a InstallStep,
    },
    Finished {
        index: usize,
        total: usize,
        step: &'a InstallStep,
    },
}

/// Run every step in order inside `project_root`
///
/// Stops at the first failing step; the remaining steps never start and
/// nothing already installed is undone. Returns the number of steps run.
pub async fn execute_plan<R, F>(
    runner: &R,
    program: &str,
    project_root: &Path,
    steps: &[InstallStep],
    mut on_event: F,
) -> Result<usize, ScaffoldError>
where
    R: CommandRunner,
    F: FnMut(InstallEvent<'_>),
{
    let total = steps.len();

    for (i, step) in steps.iter().enumerate() {
        let index = i + 1;
        on_event(InstallEvent::Started { index, total, step });

        runner
            .run(program, &step.args, project_root)
            .await
            .map_err(|source| ScaffoldError::Install {
                step: index,
                total,
                kind: step.kind,
                command: step.command_line(program),
                source,
            })?;

        on_event(InstallEvent::Finished { index, total, step });
    }

    Ok(total)
}
