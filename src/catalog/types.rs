//! Core catalog types.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Language tag assumed for snippets that do not name one.
pub const DEFAULT_LANGUAGE: &str = "typescript";

/// One catalog row: a design principle and its demonstrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principle {
    /// Short stable key, unique across the catalog
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub how_to_demonstrate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_example: Option<ExampleSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_example: Option<ExampleSet>,
}

impl Principle {
    /// Create a principle with no examples attached.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        full_name: impl Into<String>,
        description: impl Into<String>,
        how_to_demonstrate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            full_name: full_name.into(),
            description: description.into(),
            how_to_demonstrate: how_to_demonstrate.into(),
            bad_example: None,
            good_example: None,
        }
    }

    #[must_use]
    pub fn with_bad_example(mut self, example: ExampleSet) -> Self {
        self.bad_example = Some(example);
        self
    }

    #[must_use]
    pub fn with_good_example(mut self, example: ExampleSet) -> Self {
        self.good_example = Some(example);
        self
    }

    /// The authored example for `variant`, if any.
    pub const fn example(&self, variant: Variant) -> Option<&ExampleSet> {
        match variant {
            Variant::Bad => self.bad_example.as_ref(),
            Variant::Good => self.good_example.as_ref(),
        }
    }

    /// Returns true if at least one example variant was authored.
    pub const fn is_navigable(&self) -> bool {
        self.bad_example.is_some() || self.good_example.is_some()
    }
}

/// The "bad" or "good" demonstration of a principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Snippets in display order
    pub code_snippets: Vec<Snippet>,
}

impl ExampleSet {
    pub const fn new(code_snippets: Vec<Snippet>) -> Self {
        Self {
            title: None,
            description: None,
            code_snippets,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One highlighted code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Raw source text, possibly empty
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Line emphasis spec such as `"23-32"` or `"17,19-21"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

impl Snippet {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
            explanation: None,
            highlight: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: impl Into<String>) -> Self {
        self.highlight = Some(highlight.into());
        self
    }

    /// The grammar tag to highlight with, falling back to [`DEFAULT_LANGUAGE`].
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Which demonstration of a principle to show.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Bad,
    Good,
}

impl Variant {
    /// Route segment used by the navigation layer.
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::Bad => "bad-example",
            Self::Good => "good-example",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown example variant '{0}' (expected bad-example or good-example)")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bad" | "bad-example" => Ok(Self::Bad),
            "good" | "good-example" => Ok(Self::Good),
            _ => Err(ParseVariantError(s.to_string())),
        }
    }
}
