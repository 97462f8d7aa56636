//! Charm-style CLI prompts using cliclack

use crate::config::{LanguageVariant, ProjectConfig, Styling};
use crate::install::InstallEvent;
use crate::product::ProductConfig;
use crate::runtime::{check, ProcessRunner};
use crate::scaffold::ProjectBuilder;
use anyhow::{Context, Result};
use colored::Colorize;

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Name of the project directory to create in the current directory
    pub project_name: String,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("{} {}", config.display_name(), cli_version))?;

    // Step 1: Reject a bad name before asking anything
    let project = ProjectConfig::new(args.project_name)?;

    // Step 2: Collect the remaining choices
    let project = select_options(project)?;

    // Step 3: Runtime check (advisory)
    let package_manager = config.package_manager();
    check_runtimes(&package_manager)?;

    // Step 4: Resolve the target directory
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let builder = ProjectBuilder::new(project, &current_dir);
    warn_if_not_empty(&builder)?;

    // Step 5: Write files
    create_files(&builder).await?;

    // Step 6: Install dependencies
    install_dependencies(&builder, &package_manager).await?;

    // Step 7: Show next steps
    print_next_steps(config, &builder)?;

    Ok(())
}

fn select_options(project: ProjectConfig) -> Result<ProjectConfig> {
    let mut language_select = cliclack::select("Choose language");
    for language in LanguageVariant::all() {
        language_select = language_select.item(language, language.display_name(), "");
    }
    let language: LanguageVariant = language_select.interact()?;

    let mut styling_select = cliclack::select("Choose CSS framework");
    for styling in Styling::all() {
        styling_select = styling_select.item(styling, styling.display_name(), "");
    }
    let styling: Styling = styling_select.interact()?;

    if styling == Styling::ComponentStyling {
        cliclack::log::warning(format!(
            "No packages are installed for {}; only the base setup will be added",
            styling
        ))?;
    }

    let include_routing: bool = cliclack::confirm("Include React Router?")
        .initial_value(true)
        .interact()?;

    let include_state_management: bool = cliclack::confirm("Include Redux for state management?")
        .initial_value(true)
        .interact()?;

    Ok(project
        .with_language(language)
        .with_styling(styling)
        .with_routing(include_routing)
        .with_state_management(include_state_management))
}

fn check_runtimes(package_manager: &str) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    let report = check::check_runtimes(package_manager);
    let runtime_info: Vec<String> = report.runtimes.iter().map(|r| r.summary()).collect();
    spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

    for warning in &report.warnings {
        cliclack::log::warning(warning)?;
    }

    Ok(())
}

fn warn_if_not_empty(builder: &ProjectBuilder) -> Result<()> {
    let count = builder.existing_entries();
    if count > 0 {
        cliclack::log::warning(format!(
            "{} already has {} items; matching files will be overwritten",
            builder.project_root().display(),
            count
        ))?;
    }
    Ok(())
}

async fn create_files(builder: &ProjectBuilder) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!(
        "Creating project folder at {}...",
        builder.project_root().display()
    ));

    match builder.write_files().await {
        Ok(files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                files.len(),
                builder.project_root().display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project files");
            cliclack::log::error(format!("{}", e))?;
            Err(e.into())
        }
    }
}

async fn install_dependencies(builder: &ProjectBuilder, package_manager: &str) -> Result<()> {
    let mut current: Option<cliclack::ProgressBar> = None;

    let result = builder
        .install(&ProcessRunner, package_manager, |event| match event {
            InstallEvent::Started { index, total, step } => {
                let spinner = cliclack::spinner();
                spinner.start(format!(
                    "[{}/{}] {}",
                    index,
                    total,
                    step.command_line(package_manager)
                ));
                current = Some(spinner);
            }
            InstallEvent::Finished { index, total, step } => {
                if let Some(spinner) = current.take() {
                    spinner.stop(format!("[{}/{}] {} installed", index, total, step.kind));
                }
            }
        })
        .await;

    match result {
        Ok(_) => {
            cliclack::log::success("React app setup complete!")?;
            Ok(())
        }
        Err(e) => {
            if let Some(spinner) = current.take() {
                spinner.stop("Installation failed");
            }
            cliclack::log::error(format!(
                "Project files were left in {}",
                builder.project_root().display()
            ))?;
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, builder: &ProjectBuilder) -> Result<()> {
    let steps = config.next_steps(builder.project_root(), builder.config());

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}  {}", format!("{}.", i + 1).dimmed(), step.cyan());
    }

    cliclack::outro(format!("Happy coding! Docs: {}", config.docs_url()))?;

    Ok(())
}
