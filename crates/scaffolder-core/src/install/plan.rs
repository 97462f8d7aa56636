//! Dependency install plan

use crate::config::{LanguageVariant, ProjectConfig, Styling};
use std::fmt;

/// Flag that makes an install land in devDependencies
pub const SAVE_DEV: &str = "--save-dev";

/// Which dependency group a step installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    InitManifest,
    Runtime,
    Bundler,
    HtmlPlugin,
    Transpiler,
    TypeScript,
    Tailwind,
    Router,
    StateManagement,
}

impl StepKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            StepKind::InitManifest => "package manifest",
            StepKind::Runtime => "React",
            StepKind::Bundler => "webpack",
            StepKind::HtmlPlugin => "webpack HTML plugin",
            StepKind::Transpiler => "Babel",
            StepKind::TypeScript => "TypeScript",
            StepKind::Tailwind => "TailwindCSS",
            StepKind::Router => "React Router",
            StepKind::StateManagement => "Redux",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One package-manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub kind: StepKind,
    /// Exact argument vector, without the program name
    pub args: Vec<String>,
}

impl InstallStep {
    fn new(kind: StepKind, args: &[&str]) -> Self {
        Self {
            kind,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `npm install <packages>`
    fn runtime(kind: StepKind, packages: &[&str]) -> Self {
        let mut args = vec!["install"];
        args.extend_from_slice(packages);
        Self::new(kind, &args)
    }

    /// `npm install --save-dev <packages>`
    fn dev(kind: StepKind, packages: &[&str]) -> Self {
        let mut args = vec!["install", SAVE_DEV];
        args.extend_from_slice(packages);
        Self::new(kind, &args)
    }

    /// Packages named by this step (flags and subcommand stripped)
    pub fn packages(&self) -> Vec<&str> {
        match self.kind {
            StepKind::InitManifest => Vec::new(),
            _ => self
                .args
                .iter()
                .skip(1)
                .filter(|a| !a.starts_with('-'))
                .map(String::as_str)
                .collect(),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.args.iter().any(|a| a == SAVE_DEV)
    }

    /// Human-readable command line, e.g. `npm install react react-dom`
    pub fn command_line(&self, program: &str) -> String {
        let mut line = program.to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Build the ordered install plan for a project
///
/// Five steps are always present. The optional ones follow in a fixed order:
/// TypeScript, TailwindCSS, React Router, Redux. Styled Components has no step.
pub fn build_plan(config: &ProjectConfig) -> Vec<InstallStep> {
    let mut steps = vec![
        InstallStep::new(StepKind::InitManifest, &["init", "-y"]),
        InstallStep::runtime(StepKind::Runtime, &["react", "react-dom"]),
        InstallStep::dev(
            StepKind::Bundler,
            &["webpack", "webpack-cli", "webpack-dev-server"],
        ),
        InstallStep::dev(StepKind::HtmlPlugin, &["html-webpack-plugin"]),
        InstallStep::dev(
            StepKind::Transpiler,
            &[
                "babel-loader",
                "@babel/core",
                "@babel/preset-env",
                "@babel/preset-react",
            ],
        ),
    ];

    if config.language() == LanguageVariant::Typed {
        steps.push(InstallStep::dev(
            StepKind::TypeScript,
            &["typescript", "@types/react", "@types/react-dom"],
        ));
    }

    match config.styling() {
        Styling::UtilityCss => {
            steps.push(InstallStep::runtime(StepKind::Tailwind, &["tailwindcss"]));
        }
        Styling::None | Styling::ComponentStyling => {}
    }

    if config.include_routing() {
        steps.push(InstallStep::runtime(StepKind::Router, &["react-router-dom"]));
    }

    if config.include_state_management() {
        steps.push(InstallStep::runtime(
            StepKind::StateManagement,
            &["redux", "react-redux"],
        ));
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(steps: &[InstallStep]) -> Vec<StepKind> {
        steps.iter().map(|s| s.kind).collect()
    }

    const FIXED: [StepKind; 5] = [
        StepKind::InitManifest,
        StepKind::Runtime,
        StepKind::Bundler,
        StepKind::HtmlPlugin,
        StepKind::Transpiler,
    ];

    fn every_config() -> Vec<ProjectConfig> {
        let mut configs = Vec::new();
        for language in LanguageVariant::all() {
            for styling in Styling::all() {
                for routing in [false, true] {
                    for state in [false, true] {
                        configs.push(
                            ProjectConfig::new("demo")
                                .unwrap()
                                .with_language(language)
                                .with_styling(styling)
                                .with_routing(routing)
                                .with_state_management(state),
                        );
                    }
                }
            }
        }
        configs
    }

    #[test]
    fn test_minimal_plan() {
        let plan = build_plan(&ProjectConfig::new("demo").unwrap());
        assert_eq!(kinds(&plan), FIXED);

        let args: Vec<Vec<&str>> = plan
            .iter()
            .map(|s| s.args.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(
            args,
            vec![
                vec!["init", "-y"],
                vec!["install", "react", "react-dom"],
                vec![
                    "install",
                    "--save-dev",
                    "webpack",
                    "webpack-cli",
                    "webpack-dev-server"
                ],
                vec!["install", "--save-dev", "html-webpack-plugin"],
                vec![
                    "install",
                    "--save-dev",
                    "babel-loader",
                    "@babel/core",
                    "@babel/preset-env",
                    "@babel/preset-react"
                ],
            ]
        );
    }

    #[test]
    fn test_full_plan_order() {
        let config = ProjectConfig::new("app2")
            .unwrap()
            .with_language(LanguageVariant::Typed)
            .with_styling(Styling::UtilityCss)
            .with_routing(true)
            .with_state_management(true);
        let plan = build_plan(&config);

        assert_eq!(plan.len(), 9);
        assert_eq!(&kinds(&plan)[..5], FIXED);
        assert_eq!(
            &kinds(&plan)[5..],
            [
                StepKind::TypeScript,
                StepKind::Tailwind,
                StepKind::Router,
                StepKind::StateManagement,
            ]
        );
        assert_eq!(
            plan[5].args,
            ["install", "--save-dev", "typescript", "@types/react", "@types/react-dom"]
        );
        assert_eq!(plan[6].args, ["install", "tailwindcss"]);
        assert_eq!(plan[7].args, ["install", "react-router-dom"]);
        assert_eq!(plan[8].args, ["install", "redux", "react-redux"]);
    }

    #[test]
    fn test_fixed_steps_lead_every_plan() {
        for config in every_config() {
            let plan = build_plan(&config);
            assert_eq!(&kinds(&plan)[..5], FIXED, "{:?}", config);
        }
    }

    #[test]
    fn test_typescript_step_placement() {
        for config in every_config() {
            let plan = build_plan(&config);
            let positions: Vec<_> = plan
                .iter()
                .enumerate()
                .filter(|(_, s)| s.kind == StepKind::TypeScript)
                .map(|(i, _)| i)
                .collect();

            if config.language() == LanguageVariant::Typed {
                assert_eq!(positions, [5], "{:?}", config);
            } else {
                assert!(positions.is_empty(), "{:?}", config);
            }
        }
    }

    #[test]
    fn test_no_router_unless_requested() {
        for config in every_config() {
            let installs_router = build_plan(&config)
                .iter()
                .any(|s| s.packages().contains(&"react-router-dom"));
            assert_eq!(installs_router, config.include_routing(), "{:?}", config);
        }
    }

    #[test]
    fn test_component_styling_adds_nothing() {
        let base = ProjectConfig::new("demo").unwrap();
        assert_eq!(
            build_plan(&base.clone().with_styling(Styling::ComponentStyling)),
            build_plan(&base)
        );
    }

    #[test]
    fn test_plan_is_deterministic() {
        for config in every_config() {
            assert_eq!(build_plan(&config), build_plan(&config));
        }
    }

    #[test]
    fn test_step_helpers() {
        let plan = build_plan(&ProjectConfig::new("demo").unwrap());
        assert!(plan[0].packages().is_empty());
        assert!(!plan[1].is_dev());
        assert!(plan[2].is_dev());
        assert_eq!(
            plan[2].packages(),
            ["webpack", "webpack-cli", "webpack-dev-server"]
        );
        assert_eq!(plan[1].command_line("npm"), "npm install react react-dom");
    }
}
