// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. render::RenderedSnippet)
    clippy::module_name_repetitions
)]

//! # solidex
//!
//! A catalog of SOLID design principles, each with a "bad" and a "good"
//! example, rendered as syntax-highlighted, line-numbered code.
//!
//! ## Architecture
//!
//! Data flows one way:
//! route path → [`navigation`] → [`catalog`] lookup → one
//! [`render::SnippetRenderer`] per snippet → [`highlight`] → markup.
//!
//! ## Modules
//!
//! - [`catalog`]: The frozen principle table and its lookups
//! - [`navigation`]: Route paths and the pages they resolve to
//! - [`highlight`]: Grammar registry, line emphasis specs, HTML highlighting
//! - [`render`]: Stateful snippet renderers with coalesced updates
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing scopes and the render debug log
//! - [`watcher`]: File watching for live preview

pub mod catalog;
pub mod config;
pub mod highlight;
pub mod navigation;
pub mod perf;
pub mod render;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, ExampleSet, Principle, Snippet, Variant};
    pub use crate::highlight::{Highlighter, RenderOutput};
    pub use crate::navigation::{Page, Route};
    pub use crate::render::{MemoryRegion, OutputRegion, SnippetInput, SnippetRenderer};
}
