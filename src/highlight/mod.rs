//! Syntax highlighting for catalog snippets.
//!
//! Uses syntect with Sublime Text syntax definitions and produces HTML with a
//! line-number gutter and per-line emphasis. Highlighting is a pure function
//! of its inputs; the only shared state is the grammar registry and theme,
//! both fixed before the first call.

mod registry;
mod spec;

pub use registry::{FALLBACK_LANGUAGE, GrammarRegistry};
pub use spec::{HighlightSpec, compress_lines};

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::{Mutex, OnceLock};

use serde::Serialize;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxReference;

/// Errors from grammar registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    #[error("grammar tag must not be blank")]
    EmptyTag,
    #[error("no loaded syntax named '{0}'")]
    UnknownSyntax(String),
    #[error("invalid syntax definition: {0}")]
    InvalidDefinition(String),
}

/// Highlighted markup for one snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub markup: String,
    /// Tag of the grammar actually used; empty when nothing was rendered
    pub applied_language: String,
    pub line_count: usize,
    /// Emphasized lines after clamping to `line_count`
    pub highlighted_lines: Vec<usize>,
}

impl RenderOutput {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// Highlights source text against a fixed registry and theme.
#[derive(Debug)]
pub struct Highlighter {
    registry: GrammarRegistry,
    theme: Theme,
}

impl Highlighter {
    pub fn new(registry: GrammarRegistry, background: HighlightBackground) -> Self {
        Self {
            registry,
            theme: theme_for(background),
        }
    }

    pub const fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Highlight `code` with the grammar for `language`, emphasizing the lines
    /// named by `highlight`.
    ///
    /// Empty code produces empty output. Unknown languages are rendered with
    /// the generic-text grammar. Identical inputs give identical markup.
    pub fn highlight(&self, code: &str, language: &str, highlight: Option<&str>) -> RenderOutput {
        let (syntax, applied_language) = match self.registry.lookup(language) {
            Some(syntax) => (Some(syntax), language.trim().to_ascii_lowercase()),
            None => {
                tracing::warn!(
                    language,
                    fallback = FALLBACK_LANGUAGE,
                    "grammar not registered, using fallback"
                );
                crate::perf::log_event("highlight.fallback", format!("language={language}"));
                (self.registry.fallback(), FALLBACK_LANGUAGE.to_string())
            }
        };

        if code.is_empty() {
            return RenderOutput {
                applied_language,
                ..RenderOutput::default()
            };
        }

        let lines = split_lines(code);
        let line_count = lines.len();
        let emphasized = highlight
            .map(|spec| HighlightSpec::parse(spec).lines(line_count))
            .unwrap_or_default();

        let Some(syntax) = syntax else {
            tracing::error!("fallback grammar missing from registry; emitting raw text");
            return RenderOutput {
                markup: escape_html(code),
                applied_language: String::new(),
                line_count,
                highlighted_lines: emphasized.into_iter().collect(),
            };
        };

        let markup = self.markup(syntax, &applied_language, &lines, &emphasized);
        RenderOutput {
            markup,
            applied_language,
            line_count,
            highlighted_lines: emphasized.into_iter().collect(),
        }
    }

    fn markup(
        &self,
        syntax: &SyntaxReference,
        language: &str,
        lines: &[&str],
        emphasized: &BTreeSet<usize>,
    ) -> String {
        let mut out = String::from("<pre class=\"line-numbers\"");
        if !emphasized.is_empty() {
            let _ = write!(out, " data-line=\"{}\"", compress_lines(emphasized));
        }
        let _ = write!(out, "><code class=\"language-{}\">", escape_html(language));

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        for (index, line) in lines.iter().enumerate() {
            let number = index + 1;
            if index > 0 {
                out.push('\n');
            }
            let class = if emphasized.contains(&number) {
                "line line-highlight"
            } else {
                "line"
            };
            let _ = write!(out, "<span class=\"{class}\" data-line-number=\"{number}\">");
            out.push_str(&self.line_html(&mut highlighter, line));
            out.push_str("</span>");
        }
        out.push_str("</code></pre>");
        out
    }

    fn line_html(&self, highlighter: &mut HighlightLines<'_>, line: &str) -> String {
        let ranges = match highlighter.highlight_line(line, self.registry.syntaxes()) {
            Ok(ranges) => ranges,
            Err(err) => {
                tracing::warn!(%err, "failed to tokenize line");
                return escape_html(strip_line_ending(line));
            }
        };
        let ranges: Vec<(Style, &str)> = ranges
            .into_iter()
            .map(|(style, text)| (style, strip_line_ending(text)))
            .filter(|(_, text)| !text.is_empty())
            .collect();
        styled_line_to_highlighted_html(&ranges, IncludeBackground::No).unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to render highlighted line");
            escape_html(strip_line_ending(line))
        })
    }
}

/// Split into lines that keep their `\n`, with a trailing empty line when the
/// text ends in a newline. The result has `newline count + 1` entries.
fn split_lines(code: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = code.split_inclusive('\n').collect();
    if code.ends_with('\n') {
        lines.push("");
    }
    lines
}

fn strip_line_ending(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Process-wide highlighter over the default registry, created on first use.
pub fn default_highlighter() -> &'static Highlighter {
    static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();
    HIGHLIGHTER.get_or_init(|| Highlighter::new(GrammarRegistry::with_defaults(), background_mode()))
}

fn theme_set() -> &'static ThemeSet {
    static THEMES: OnceLock<ThemeSet> = OnceLock::new();
    THEMES.get_or_init(|| {
        let _scope = crate::perf::scope("highlight.theme.load_defaults");
        ThemeSet::load_defaults()
    })
}

fn theme_for(background: HighlightBackground) -> Theme {
    let preferred = match background {
        HighlightBackground::Dark => [
            "base16-ocean.dark",
            "Solarized (dark)",
            "base16-eighties.dark",
        ]
        .as_slice(),
        HighlightBackground::Light => [
            "InspiredGitHub",
            "Solarized (light)",
            "base16-ocean.light",
        ]
        .as_slice(),
    };

    let themes = &theme_set().themes;
    preferred
        .iter()
        .find_map(|name| themes.get(*name))
        .or_else(|| themes.values().next())
        .cloned()
        .unwrap_or_default()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightBackground {
    Light,
    Dark,
}

static BACKGROUND_OVERRIDE: Mutex<Option<HighlightBackground>> = Mutex::new(None);

/// Force the background used by [`default_highlighter`]. Must be called before
/// the first highlight to take effect.
pub fn set_background_mode(mode: Option<HighlightBackground>) {
    if let Ok(mut guard) = BACKGROUND_OVERRIDE.lock() {
        *guard = mode;
    }
}

pub fn background_mode() -> HighlightBackground {
    if let Ok(guard) = BACKGROUND_OVERRIDE.lock() {
        if let Some(mode) = *guard {
            return mode;
        }
    }
    background_mode_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn background_mode_from_colorfgbg(colorfgbg: Option<&str>) -> HighlightBackground {
    let Some(value) = colorfgbg else {
        return HighlightBackground::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    match bg_str.parse::<u8>() {
        Ok(bg) if bg >= 7 => HighlightBackground::Light,
        _ => HighlightBackground::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> &'static Highlighter {
        static HIGHLIGHTER: OnceLock<Highlighter> = OnceLock::new();
        HIGHLIGHTER.get_or_init(|| {
            Highlighter::new(GrammarRegistry::with_defaults(), HighlightBackground::Dark)
        })
    }

    fn line_spans(markup: &str) -> usize {
        markup.matches("data-line-number=").count()
    }

    #[test]
    fn test_empty_code_produces_empty_output() {
        let cases = [
            ("typescript", "typescript"),
            ("nope", FALLBACK_LANGUAGE),
            ("", FALLBACK_LANGUAGE),
        ];
        for (language, applied) in cases {
            for spec in [None, Some("1-3"), Some("garbage")] {
                let output = highlighter().highlight("", language, spec);
                assert!(output.is_empty());
                assert_eq!(output.line_count, 0);
                assert!(output.highlighted_lines.is_empty());
                assert_eq!(output.applied_language, applied);
            }
        }
    }

    #[test]
    fn test_empty_code_still_reports_resolved_language() {
        let output = highlighter().highlight("", " CSS ", None);
        assert_eq!(output.applied_language, "css");
        assert!(output.markup.is_empty());
    }

    #[test]
    fn test_line_count_is_newlines_plus_one() {
        let output = highlighter().highlight("let a = 1;\nlet b = 2;", "typescript", None);
        assert_eq!(output.line_count, 2);
        assert_eq!(line_spans(&output.markup), 2);

        let output = highlighter().highlight("\nlet a = 1;\n", "typescript", None);
        assert_eq!(output.line_count, 3);
        assert_eq!(line_spans(&output.markup), 3);
    }

    #[test]
    fn test_known_language_produces_colored_spans() {
        let output = highlighter().highlight("fn main() {\n    let x = 1;\n}", "rust", None);
        assert_eq!(output.applied_language, "rust");
        assert!(output.markup.contains("<code class=\"language-rust\">"));
        assert!(output.markup.contains("color:#"), "{}", output.markup);
    }

    #[test]
    fn test_language_tag_is_case_insensitive() {
        let output = highlighter().highlight("const x = 1;", "TypeScript", None);
        assert_eq!(output.applied_language, "typescript");
    }

    #[test]
    fn test_unknown_language_falls_back_with_markup() {
        let code = "just <text> & more";
        let output = highlighter().highlight(code, "nope", None);
        assert_eq!(output.applied_language, FALLBACK_LANGUAGE);
        assert_ne!(output.markup, code);
        assert!(output.markup.starts_with("<pre class=\"line-numbers\">"));
        assert!(output.markup.contains("just &lt;text&gt; &amp; more"));
    }

    #[test]
    fn test_missing_fallback_emits_escaped_raw_text() {
        let mut registry = GrammarRegistry::plain();
        // Shadow the fallback tag with a syntax that cannot be found.
        registry.tags_mut_for_test().insert(FALLBACK_LANGUAGE.into(), "Gone".into());
        let highlighter = Highlighter::new(registry, HighlightBackground::Dark);
        let output = highlighter.highlight("a < b\nc", "nope", Some("2"));
        assert_eq!(output.markup, "a &lt; b\nc");
        assert_eq!(output.line_count, 2);
        assert_eq!(output.highlighted_lines, [2]);
    }

    #[test]
    fn test_highlight_spec_marks_lines() {
        let code = (1..=6).map(|n| format!("line{n}")).collect::<Vec<_>>().join("\n");
        let output = highlighter().highlight(&code, "text", Some("2, 4-5"));
        assert_eq!(output.highlighted_lines, [2, 4, 5]);
        assert!(output.markup.contains("data-line=\"2,4-5\""));
        assert_eq!(output.markup.matches("line line-highlight").count(), 3);
        assert!(
            output
                .markup
                .contains("<span class=\"line line-highlight\" data-line-number=\"4\">")
        );
        assert!(output.markup.contains("<span class=\"line\" data-line-number=\"3\">"));
    }

    #[test]
    fn test_spec_beyond_code_is_clamped() {
        let output = highlighter().highlight("a\nb\nc", "text", Some("0-2,3-40,50"));
        assert_eq!(output.highlighted_lines, [1, 2, 3]);
        assert!(output.markup.contains("data-line=\"1-3\""));
    }

    #[test]
    fn test_no_spec_means_no_data_line_attribute() {
        let output = highlighter().highlight("a\nb", "text", None);
        assert!(!output.markup.contains("data-line="));
        let output = highlighter().highlight("a\nb", "text", Some("9"));
        assert!(!output.markup.contains("data-line="));
        assert!(output.highlighted_lines.is_empty());
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let code = "\nexport class A {\n  run(): void {}\n}\n";
        let first = highlighter().highlight(code, "typescript", Some("2-3"));
        let second = highlighter().highlight(code, "typescript", Some("2-3"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_lines_do_not_carry_newlines_inside_spans() {
        let output = highlighter().highlight("a\r\nb", "text", None);
        assert!(!output.markup.contains("\r"));
        assert_eq!(output.markup.matches('\n').count(), 1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_colorfgbg_dark_background() {
        assert_eq!(background_mode_from_colorfgbg(Some("15;0")), HighlightBackground::Dark);
        assert_eq!(background_mode_from_colorfgbg(None), HighlightBackground::Dark);
        assert_eq!(background_mode_from_colorfgbg(Some("junk")), HighlightBackground::Dark);
    }

    #[test]
    fn test_colorfgbg_light_background() {
        assert_eq!(background_mode_from_colorfgbg(Some("0;15")), HighlightBackground::Light);
    }

    #[test]
    fn test_background_override() {
        set_background_mode(Some(HighlightBackground::Light));
        assert_eq!(background_mode(), HighlightBackground::Light);
        set_background_mode(Some(HighlightBackground::Dark));
        assert_eq!(background_mode(), HighlightBackground::Dark);
        set_background_mode(None);
    }

    #[test]
    fn test_light_and_dark_themes_differ() {
        let light = theme_for(HighlightBackground::Light);
        let dark = theme_for(HighlightBackground::Dark);
        assert_ne!(light.settings.background, dark.settings.background);
    }
}
