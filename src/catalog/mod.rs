//! The principle catalog and its lookup functions.
//!
//! The catalog is built once and never mutated afterwards. Lookups are pure
//! reads over the frozen table:
//! - [`Catalog::find_by_id`] for the principle page
//! - [`Catalog::find_example`] for the bad/good example pages

mod data;
mod types;

pub use types::{DEFAULT_LANGUAGE, ExampleSet, ParseVariantError, Principle, Snippet, Variant};

use std::collections::HashMap;
use std::sync::OnceLock;

/// Errors raised while freezing a catalog table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate principle id '{0}'")]
    DuplicateId(String),
    #[error("principle at position {0} has an empty id")]
    EmptyId(usize),
}

/// Immutable table of principles keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    principles: Vec<Principle>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Freeze `principles` into a catalog, preserving authoring order.
    ///
    /// # Errors
    /// Returns an error if an id is empty or appears more than once.
    pub fn new(principles: Vec<Principle>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(principles.len());
        for (position, principle) in principles.iter().enumerate() {
            if principle.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if index.insert(principle.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(principle.id.clone()));
            }
            if !principle.is_navigable() {
                tracing::debug!(id = %principle.id, "principle has no examples");
            }
        }
        Ok(Self { principles, index })
    }

    /// All principles in authoring order.
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    pub fn len(&self) -> usize {
        self.principles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principles.is_empty()
    }

    /// Look up a principle by id. A miss is not an error; callers pick the fallback.
    pub fn find_by_id(&self, id: &str) -> Option<&Principle> {
        self.index.get(id).map(|&position| &self.principles[position])
    }

    /// Look up one example variant of a principle.
    ///
    /// Returns `None` both for an unknown id and for a variant that was never
    /// authored; the two cases are deliberately not distinguished.
    pub fn find_example(&self, id: &str, variant: Variant) -> Option<&ExampleSet> {
        self.find_by_id(id)
            .and_then(|principle| principle.example(variant))
    }
}

/// The compiled-in SOLID catalog, frozen on first use.
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let _scope = crate::perf::scope("catalog.builtin.load");
        Catalog::new(data::principles()).expect("built-in principle ids are unique")
    })
}
