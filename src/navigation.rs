//! Route paths and the pages they resolve to.
//!
//! Paths follow the layout `/principles/:id/(bad-example|good-example)`.
//! A bare `/principles/:id` redirects to the bad example and any other path
//! redirects home, so parsing never fails.

use crate::catalog::{Catalog, ExampleSet, Principle, Variant};

/// A parsed navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Example { id: String, variant: Variant },
}

impl Route {
    pub fn example(id: impl Into<String>, variant: Variant) -> Self {
        Self::Example {
            id: id.into(),
            variant,
        }
    }

    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["principles", id] => Self::example(*id, Variant::Bad),
            ["principles", id, child] => match child.parse::<Variant>() {
                Ok(variant) if child.to_ascii_lowercase().ends_with("-example") => {
                    Self::example(*id, variant)
                }
                _ => Self::Home,
            },
            _ => Self::Home,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Example { id, variant } => {
                format!("/principles/{id}/{}", variant.route_segment())
            }
        }
    }
}

/// What the view layer should show for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Home(&'a [Principle]),
    Example {
        principle: &'a Principle,
        variant: Variant,
        /// `None` when the variant was never authored; renders empty.
        example: Option<&'a ExampleSet>,
    },
}

/// Resolve a route against the catalog. Unknown principles fall back to home.
pub fn resolve<'a>(catalog: &'a Catalog, route: &Route) -> Page<'a> {
    match route {
        Route::Home => Page::Home(catalog.principles()),
        Route::Example { id, variant } => {
            let Some(principle) = catalog.find_by_id(id) else {
                tracing::info!(%id, "unknown principle, redirecting home");
                return Page::Home(catalog.principles());
            };
            Page::Example {
                principle,
                variant: *variant,
                example: principle.example(*variant),
            }
        }
    }
}
