//! Search/category filter over the catalog.
//!
//! [`FilterController`] owns the search text, the active category, and the
//! visible item list derived from both. The inputs are private and every
//! setter ends in a `derive` step, so the visible list is
//! always a pure function of `(search_text, active_category, catalog)`:
//!
//! - non-empty search: items whose name contains the text (case-insensitive)
//! - empty search, category "All": the full catalog
//! - empty search, other category: items in that category
//!
//! Search always wins over category. Clearing the search resets the
//! category to "All" and shows the full catalog again.

use std::sync::Arc;

use super::catalog::CatalogStore;
use super::error::SessionError;
use crate::models::{CatalogItem, CategoryLabel};

/// Filter inputs plus the derived visible list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterController {
    catalog: Arc<CatalogStore>,
    search_text: String,
    active_category: String,
    /// Indices into `catalog.all_items()`, in catalog order.
    visible: Vec<usize>,
}

impl FilterController {
    /// Start with no search, category "All", and every item visible.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let mut filter = Self {
            catalog,
            search_text: String::new(),
            active_category: CategoryLabel::ALL.to_string(),
            visible: Vec::new(),
        };
        filter.derive();
        filter
    }

    /// Replace the search text. Any string is accepted.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() && !self.search_text.is_empty() {
            // Leaving search mode drops back to the unfiltered catalog.
            self.active_category = CategoryLabel::ALL.to_string();
        }
        self.search_text = text;
        self.derive();
    }

    /// Select a category.
    ///
    /// Unknown categories are rejected and leave the state unchanged. While
    /// search text is present the selection is recorded but has no visible
    /// effect.
    pub fn set_category(&mut self, category: &str) -> Result<(), SessionError> {
        if !self.catalog.is_known_category(category) {
            return Err(SessionError::InvalidCategory(category.to_string()));
        }
        self.active_category = category.to_string();
        self.derive();
        Ok(())
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// True while search text governs the visible list.
    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// Items currently eligible for display, in catalog order.
    pub fn visible_items(&self) -> impl Iterator<Item = &CatalogItem> + '_ {
        let items = self.catalog.all_items();
        self.visible.iter().filter_map(move |&i| items.get(i))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Recompute the visible list from the current inputs.
    fn derive(&mut self) {
        let items = self.catalog.all_items().iter().enumerate();
        self.visible = if self.is_searching() {
            let needle = self.search_text.to_lowercase();
            items
                .filter(|(_, item)| item.name_matches(&needle))
                .map(|(i, _)| i)
                .collect()
        } else if self.active_category == CategoryLabel::ALL {
            items.map(|(i, _)| i).collect()
        } else {
            items
                .filter(|(_, item)| item.category == self.active_category)
                .map(|(i, _)| i)
                .collect()
        };
    }
}
