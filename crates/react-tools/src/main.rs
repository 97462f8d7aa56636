//! React Tools CLI - Project scaffolding for React apps

use anyhow::Result;
use clap::{Parser, Subcommand};
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ProjectConfig};
use std::path::Path;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// React product configuration
#[derive(Clone)]
pub struct ReactConfig;

impl ProductConfig for ReactConfig {
    fn name(&self) -> &'static str {
        "react-tools"
    }

    fn display_name(&self) -> &'static str {
        "React Tools"
    }

    fn docs_url(&self) -> &'static str {
        "https://react.dev/learn"
    }

    fn next_steps(&self, dir: &Path, _project: &ProjectConfig) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();
        let package_manager = self.package_manager();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Start the dev server (http://localhost:9000)
        steps.push(format!("{} start", package_manager));

        // Step 3: Production bundle
        steps.push(format!("{} run build", package_manager));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "react-tools")]
#[command(about = "CLI for scaffolding React projects with webpack and Babel")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new React project
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project (also the directory created in the current directory)
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            project_name: args.project_name,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ReactConfig;

    match args.command {
        Command::Create(create_args) => {
            let result = scaffolder_core::run(&config, create_args.into(), CLI_VERSION).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
