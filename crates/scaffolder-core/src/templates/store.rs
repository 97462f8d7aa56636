//! Built-in React project templates
//!
//! Every generated file is one row in [`TEMPLATES`]: a path relative to the
//! project root and a render function. Only the project name is substituted;
//! the language, styling, routing and state-management choices affect the
//! install plan, not the file contents.

use super::manifest::PackageManifest;
use crate::config::ProjectConfig;

/// Placeholder replaced by the project name in raw templates
pub const PROJECT_NAME_PLACEHOLDER: &str = "{{project_name}}";

/// Directories that exist before any file is written
pub const REQUIRED_DIRS: [&str; 2] = ["public", "src"];

/// A file to materialize under the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Path relative to the project root, `/`-separated
    pub relative_path: String,
    pub content: String,
}

/// One row of the template table
#[derive(Clone, Copy)]
pub struct TemplateEntry {
    pub path: &'static str,
    pub render: fn(&ProjectConfig) -> String,
}

impl std::fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

const INDEX_HTML: &str = include_str!("../../templates/react/public/index.html");
const INDEX_JS: &str = include_str!("../../templates/react/src/index.js");
const APP_JS: &str = include_str!("../../templates/react/src/App.js");
const GITIGNORE: &str = include_str!("../../templates/react/gitignore");
const BABELRC: &str = include_str!("../../templates/react/babelrc");
const WEBPACK_CONFIG: &str = include_str!("../../templates/react/webpack.config.js");

/// Generated files, in write order
pub const TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        path: "public/index.html",
        render: render_index_html,
    },
    TemplateEntry {
        path: "src/index.js",
        render: render_index_js,
    },
    TemplateEntry {
        path: "src/App.js",
        render: render_app_js,
    },
    TemplateEntry {
        path: ".gitignore",
        render: render_gitignore,
    },
    TemplateEntry {
        path: ".babelrc",
        render: render_babelrc,
    },
    TemplateEntry {
        path: "webpack.config.js",
        render: render_webpack_config,
    },
    TemplateEntry {
        path: "package.json",
        render: render_package_json,
    },
];

/// Render every template for the given project
pub fn render_files(config: &ProjectConfig) -> Vec<FileSpec> {
    TEMPLATES
        .iter()
        .map(|entry| FileSpec {
            relative_path: entry.path.to_string(),
            content: (entry.render)(config),
        })
        .collect()
}

fn substitute(raw: &str, config: &ProjectConfig) -> String {
    raw.replace(PROJECT_NAME_PLACEHOLDER, config.name())
}

fn render_index_html(config: &ProjectConfig) -> String {
    substitute(INDEX_HTML, config)
}

fn render_index_js(config: &ProjectConfig) -> String {
    substitute(INDEX_JS, config)
}

fn render_app_js(config: &ProjectConfig) -> String {
    substitute(APP_JS, config)
}

fn render_gitignore(_config: &ProjectConfig) -> String {
    GITIGNORE.to_string()
}

fn render_babelrc(_config: &ProjectConfig) -> String {
    BABELRC.to_string()
}

fn render_webpack_config(_config: &ProjectConfig) -> String {
    WEBPACK_CONFIG.to_string()
}

fn render_package_json(config: &ProjectConfig) -> String {
    PackageManifest::for_project(config.name()).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LanguageVariant, Styling};

    fn demo() -> ProjectConfig {
        ProjectConfig::new("demo").unwrap()
    }

    #[test]
    fn test_seven_files_in_order() {
        let paths: Vec<_> = render_files(&demo())
            .into_iter()
            .map(|f| f.relative_path)
            .collect();
        assert_eq!(
            paths,
            [
                "public/index.html",
                "src/index.js",
                "src/App.js",
                ".gitignore",
                ".babelrc",
                "webpack.config.js",
                "package.json",
            ]
        );
    }

    #[test]
    fn test_paths_stay_inside_project() {
        for entry in TEMPLATES {
            assert!(!entry.path.starts_with('/'), "{}", entry.path);
            assert!(
                !entry.path.split('/').any(|seg| seg == ".." || seg.is_empty()),
                "{}",
                entry.path
            );
        }
    }

    #[test]
    fn test_every_template_renders_without_placeholders() {
        for file in render_files(&demo()) {
            assert!(!file.content.is_empty(), "{} is empty", file.relative_path);
            assert!(
                !file.content.contains(PROJECT_NAME_PLACEHOLDER),
                "{} still has a placeholder",
                file.relative_path
            );
        }
    }

    #[test]
    fn test_project_name_substituted() {
        let files = render_files(&ProjectConfig::new("my-shop").unwrap());
        let get = |path: &str| {
            files
                .iter()
                .find(|f| f.relative_path == path)
                .map(|f| f.content.as_str())
                .unwrap()
        };

        assert!(get("public/index.html").contains("<title>my-shop</title>"));
        assert!(get("src/App.js").contains("<h1>Welcome to my-shop!</h1>"));
        assert!(get("package.json").contains("\"name\": \"my-shop\""));
    }

    #[test]
    fn test_fixed_template_contents() {
        let files = render_files(&demo());
        let get = |path: &str| {
            files
                .iter()
                .find(|f| f.relative_path == path)
                .map(|f| f.content.clone())
                .unwrap()
        };

        assert_eq!(get(".gitignore"), "node_modules\n.env\n");
        assert!(get(".babelrc").contains("\"@babel/preset-env\", \"@babel/preset-react\""));

        let webpack = get("webpack.config.js");
        assert!(webpack.contains("entry: './src/index.js'"));
        assert!(webpack.contains("filename: 'bundle.js'"));
        assert!(webpack.contains("port: 9000"));
        assert!(webpack.contains("loader: 'babel-loader'"));
        assert!(webpack.contains("new HtmlWebpackPlugin"));

        let index_html = get("public/index.html");
        assert!(index_html.contains("<div id=\"root\"></div>"));
        assert!(index_html.contains("<script src=\"bundle.js\"></script>"));

        assert!(get("src/index.js").contains("document.getElementById('root')"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(render_files(&demo()), render_files(&demo()));
    }

    #[test]
    fn test_options_do_not_change_contents() {
        let plain = render_files(&demo());
        let everything = render_files(
            &demo()
                .with_language(LanguageVariant::Typed)
                .with_styling(Styling::ComponentStyling)
                .with_routing(true)
                .with_state_management(true),
        );
        assert_eq!(plain, everything);
    }

    #[test]
    fn test_only_name_differs_between_projects() {
        let a = render_files(&ProjectConfig::new("alpha").unwrap());
        let b = render_files(&ProjectConfig::new("bravo").unwrap());
        for (fa, fb) in a.iter().zip(&b) {
            assert_eq!(fa.content.replace("alpha", "bravo"), fb.content);
        }
    }
}
