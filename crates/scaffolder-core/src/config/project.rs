//! The resolved set of choices that drives file generation and dependency selection

use crate::error::ScaffoldError;
use std::fmt;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageVariant {
    /// JavaScript
    #[default]
    Plain,
    /// TypeScript toolchain added on top of the JavaScript setup
    Typed,
}

impl LanguageVariant {
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageVariant::Plain => "JavaScript",
            LanguageVariant::Typed => "TypeScript",
        }
    }

    pub fn all() -> [LanguageVariant; 2] {
        [LanguageVariant::Plain, LanguageVariant::Typed]
    }
}

impl fmt::Display for LanguageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional styling library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Styling {
    #[default]
    None,
    /// TailwindCSS
    UtilityCss,
    /// Styled Components (no dependency step is planned for it)
    ComponentStyling,
}

impl Styling {
    pub fn display_name(&self) -> &'static str {
        match self {
            Styling::None => "None",
            Styling::UtilityCss => "TailwindCSS",
            Styling::ComponentStyling => "Styled Components",
        }
    }

    pub fn all() -> [Styling; 3] {
        [Styling::None, Styling::UtilityCss, Styling::ComponentStyling]
    }
}

impl fmt::Display for Styling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Project configuration, immutable once built
///
/// The name doubles as the directory name and the display title, so it must be
/// a single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    language: LanguageVariant,
    styling: Styling,
    include_routing: bool,
    include_state_management: bool,
}

impl ProjectConfig {
    /// Create a config with default options, validating the project name
    pub fn new(name: impl Into<String>) -> Result<Self, ScaffoldError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            language: LanguageVariant::default(),
            styling: Styling::default(),
            include_routing: false,
            include_state_management: false,
        })
    }

    pub fn with_language(mut self, language: LanguageVariant) -> Self {
        self.language = language;
        self
    }

    pub fn with_styling(mut self, styling: Styling) -> Self {
        self.styling = styling;
        self
    }

    pub fn with_routing(mut self, include: bool) -> Self {
        self.include_routing = include;
        self
    }

    pub fn with_state_management(mut self, include: bool) -> Self {
        self.include_state_management = include;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> LanguageVariant {
        self.language
    }

    pub fn styling(&self) -> Styling {
        self.styling
    }

    pub fn include_routing(&self) -> bool {
        self.include_routing
    }

    pub fn include_state_management(&self) -> bool {
        self.include_state_management
    }
}

/// Check that a project name is usable as a single directory name
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::Config(
            "project name must not be empty".to_string(),
        ));
    }
    if name != name.trim() {
        return Err(ScaffoldError::Config(format!(
            "project name '{}' must not start or end with whitespace",
            name
        )));
    }
    if name == "." || name == ".." {
        return Err(ScaffoldError::Config(format!(
            "project name '{}' is not a directory name",
            name
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '\0') || c.is_control())
    {
        return Err(ScaffoldError::Config(format!(
            "project name '{}' contains an invalid character {:?}",
            name, c
        )));
    }
    Ok(())
}
