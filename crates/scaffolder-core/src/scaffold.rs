//! Project creation workflow for custom front-ends
//!
//! [`ProjectBuilder`] ties the engine together: render the templates, write them
//! under `<parent>/<name>`, then run the install plan inside that directory.
//! The project root is passed to every step explicitly; the process working
//! directory is never changed.

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::install::{build_plan, execute_plan, CommandRunner, InstallEvent, InstallStep};
use crate::templates::{render_files, write_tree, FileSpec};
use std::path::{Path, PathBuf};

/// Result of a completed scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub project_root: PathBuf,
    pub files: Vec<PathBuf>,
    pub steps_run: usize,
}

/// Drives one project through file generation and dependency installation
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    config: ProjectConfig,
    project_root: PathBuf,
}

impl ProjectBuilder {
    /// The project is created at `parent_dir/<project name>`
    pub fn new(config: ProjectConfig, parent_dir: &Path) -> Self {
        let project_root = parent_dir.join(config.name());
        Self {
            config,
            project_root,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Files that [`write_files`](Self::write_files) will produce
    pub fn files(&self) -> Vec<FileSpec> {
        render_files(&self.config)
    }

    /// Install steps that [`install`](Self::install) will run
    pub fn plan(&self) -> Vec<InstallStep> {
        build_plan(&self.config)
    }

    /// Number of entries already present in the project directory
    pub fn existing_entries(&self) -> usize {
        std::fs::read_dir(&self.project_root)
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    pub async fn write_files(&self) -> Result<Vec<PathBuf>, ScaffoldError> {
        write_tree(&self.project_root, &self.files()).await
    }

    pub async fn install<R, F>(
        &self,
        runner: &R,
        package_manager: &str,
        on_event: F,
    ) -> Result<usize, ScaffoldError>
    where
        R: CommandRunner,
        F: FnMut(InstallEvent<'_>),
    {
        execute_plan(
            runner,
            package_manager,
            &self.project_root,
            &self.plan(),
            on_event,
        )
        .await
    }

    /// Write every file, then run every install step
    ///
    /// Installation never starts if writing fails.
    pub async fn run<R, F>(
        &self,
        runner: &R,
        package_manager: &str,
        on_event: F,
    ) -> Result<ScaffoldOutcome, ScaffoldError>
    where
        R: CommandRunner,
        F: FnMut(InstallEvent<'_>),
    {
        let files = self.write_files().await?;
        let steps_run = self.install(runner, package_manager, on_event).await?;

        Ok(ScaffoldOutcome {
            project_root: self.project_root.clone(),
            files,
            steps_run,
        })
    }
}
