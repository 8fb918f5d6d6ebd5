//! Grammar registry mapping language tags to syntect syntaxes.
//!
//! The registry is filled from a fixed tag table at startup. New grammars can
//! be registered through `&mut self` methods, so all registration is done
//! before the registry is handed to a [`Highlighter`](super::Highlighter).

use std::collections::HashMap;

use syntect::parsing::{SyntaxDefinition, SyntaxReference, SyntaxSet};

use super::HighlightError;

/// Tag of the generic-text grammar used when a tag is not registered.
pub const FALLBACK_LANGUAGE: &str = "plaintext";

/// Built-in tags and the syntect grammar each one binds to.
///
/// syntect does not bundle TypeScript or SCSS, so those tags use the closest
/// bundled grammar.
const DEFAULT_GRAMMARS: &[(&[&str], &str)] = &[
    (&["typescript", "ts"], "JavaScript"),
    (&["javascript", "js"], "JavaScript"),
    (&["css"], "CSS"),
    (&["scss"], "CSS"),
    (&["markup", "html", "svg"], "HTML"),
    (&["xml"], "XML"),
    (&["rust", "rs"], "Rust"),
    (&["json"], "JSON"),
];

pub struct GrammarRegistry {
    syntaxes: SyntaxSet,
    /// Lowercase tag to syntect syntax name
    tags: HashMap<String, String>,
}

impl GrammarRegistry {
    /// Registry with only the fallback grammar.
    pub fn plain() -> Self {
        let syntaxes = {
            let mut builder = syntect::parsing::SyntaxSetBuilder::new();
            builder.add_plain_text_syntax();
            builder.build()
        };
        Self::with_syntaxes(syntaxes)
    }

    /// Registry over syntect's bundled syntaxes with the built-in tag table.
    pub fn with_defaults() -> Self {
        let syntaxes = {
            let _scope = crate::perf::scope("highlight.syntax_set.load_defaults");
            SyntaxSet::load_defaults_newlines()
        };
        let mut registry = Self::with_syntaxes(syntaxes);
        for (tags, syntax_name) in DEFAULT_GRAMMARS {
            for tag in *tags {
                if let Err(err) = registry.register_alias(tag, syntax_name) {
                    tracing::debug!(%err, "skipping built-in grammar");
                }
            }
        }
        registry
    }

    fn with_syntaxes(syntaxes: SyntaxSet) -> Self {
        let mut tags = HashMap::new();
        let plain = syntaxes.find_syntax_plain_text().name.clone();
        tags.insert(FALLBACK_LANGUAGE.to_string(), plain.clone());
        tags.insert("text".to_string(), plain);
        Self { syntaxes, tags }
    }

    pub(crate) const fn syntaxes(&self) -> &SyntaxSet {
        &self.syntaxes
    }

    /// Bind `tag` to an already loaded syntax, by syntect name.
    ///
    /// # Errors
    /// Fails if the tag is blank or no loaded syntax has that name.
    pub fn register_alias(&mut self, tag: &str, syntax_name: &str) -> Result<(), HighlightError> {
        let tag = normalize_tag(tag)?;
        if self.syntaxes.find_syntax_by_name(syntax_name).is_none() {
            return Err(HighlightError::UnknownSyntax(syntax_name.to_string()));
        }
        self.tags.insert(tag, syntax_name.to_string());
        Ok(())
    }

    /// Load a `.sublime-syntax` definition and bind it to `tag`.
    ///
    /// # Errors
    /// Fails if the tag is blank or the definition does not parse.
    pub fn register_definition(&mut self, tag: &str, source: &str) -> Result<(), HighlightError> {
        let tag = normalize_tag(tag)?;
        let definition = SyntaxDefinition::load_from_str(source, true, None)
            .map_err(|err| HighlightError::InvalidDefinition(err.to_string()))?;
        let name = definition.name.clone();

        let mut builder = self.syntaxes.clone().into_builder();
        builder.add(definition);
        self.syntaxes = builder.build();
        tracing::debug!(%tag, syntax = %name, "registered grammar");
        self.tags.insert(tag, name);
        Ok(())
    }

    /// Grammar registered for `tag`, matched case-insensitively.
    pub fn lookup(&self, tag: &str) -> Option<&SyntaxReference> {
        let name = self.tags.get(tag.trim().to_ascii_lowercase().as_str())?;
        self.syntaxes.find_syntax_by_name(name)
    }

    /// The generic-text grammar.
    pub fn fallback(&self) -> Option<&SyntaxReference> {
        self.lookup(FALLBACK_LANGUAGE)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }

    #[cfg(test)]
    pub(crate) fn tags_mut_for_test(&mut self) -> &mut HashMap<String, String> {
        &mut self.tags
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for GrammarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarRegistry")
            .field("tags", &self.tags())
            .finish_non_exhaustive()
    }
}

fn normalize_tag(tag: &str) -> Result<String, HighlightError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(HighlightError::EmptyTag);
    }
    Ok(tag.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY_SYNTAX: &str = r#"%YAML 1.2
---
name: Toy
scope: source.toy
contexts:
  main:
    - match: '\b(let|fn)\b'
      scope: keyword.control.toy
"#;

    #[test]
    fn test_defaults_register_fixed_tags() {
        let registry = GrammarRegistry::with_defaults();
        for tag in ["typescript", "ts", "javascript", "css", "scss", "markup", "html", "rust"] {
            assert!(registry.contains(tag), "missing built-in tag {tag}");
        }
        assert_eq!(registry.lookup("typescript").unwrap().name, "JavaScript");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = GrammarRegistry::with_defaults();
        assert_eq!(registry.lookup("TypeScript").unwrap().name, "JavaScript");
        assert_eq!(registry.lookup(" CSS ").unwrap().name, "CSS");
    }

    #[test]
    fn test_unknown_tag_is_absent_and_fallback_present() {
        let registry = GrammarRegistry::with_defaults();
        assert!(registry.lookup("cobol-2077").is_none());
        assert_eq!(registry.fallback().unwrap().name, "Plain Text");
    }

    #[test]
    fn test_plain_registry_only_has_fallback() {
        let registry = GrammarRegistry::plain();
        assert!(registry.lookup("rust").is_none());
        assert!(registry.fallback().is_some());
        assert_eq!(registry.tags(), ["plaintext", "text"]);
    }

    #[test]
    fn test_register_alias_requires_loaded_syntax() {
        let mut registry = GrammarRegistry::with_defaults();
        registry.register_alias("py", "Python").unwrap();
        assert_eq!(registry.lookup("py").unwrap().name, "Python");

        let err = registry.register_alias("klingon", "Klingon").unwrap_err();
        assert!(matches!(err, HighlightError::UnknownSyntax(name) if name == "Klingon"));
        assert!(matches!(
            registry.register_alias("  ", "Rust"),
            Err(HighlightError::EmptyTag)
        ));
    }

    #[test]
    fn test_register_definition_adds_grammar() {
        let mut registry = GrammarRegistry::with_defaults();
        registry.register_definition("toy", TOY_SYNTAX).unwrap();
        assert_eq!(registry.lookup("toy").unwrap().name, "Toy");
        // Existing grammars survive the rebuild
        assert!(registry.contains("rust"));
    }

    #[test]
    fn test_register_definition_rejects_garbage() {
        let mut registry = GrammarRegistry::plain();
        let err = registry.register_definition("bad", "not: [valid").unwrap_err();
        assert!(matches!(err, HighlightError::InvalidDefinition(_)));
        assert!(!registry.contains("bad"));
    }
}
