//! Session store: the single interaction surface for the UI.
//!
//! [`SessionState`] composes the filter and the cart flag. Presentation code
//! never mutates either directly; it sends a [`SessionEvent`] to
//! [`SessionState::apply`], which updates the inputs and the derived visible
//! list in one step.

use std::sync::Arc;

use leptos::logging;

use super::cart::CartVisibility;
use super::catalog::CatalogStore;
use super::error::SessionError;
use super::filter::FilterController;
use crate::models::{CatalogItem, CategoryLabel};

/// Events emitted by presentation components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Search box contents changed.
    SearchTextChanged(String),
    /// A category tile was clicked.
    CategorySelected(String),
    /// The cart icon in the nav bar was clicked.
    CartIconClicked,
    /// The close button of the cart panel was clicked.
    CartCloseClicked,
}

/// Per-session UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    filter: FilterController,
    cart: CartVisibility,
}

impl SessionState {
    /// Fresh session over `catalog`: no search, "All", cart closed.
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            filter: FilterController::new(Arc::new(catalog)),
            cart: CartVisibility::default(),
        }
    }

    /// Apply one event. A rejected event leaves the state unchanged.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        #[cfg(debug_assertions)]
        logging::log!("session: {:?}", event);
        match event {
            SessionEvent::SearchTextChanged(text) => self.on_search_text_changed(text),
            SessionEvent::CategorySelected(category) => self.on_category_selected(&category)?,
            SessionEvent::CartIconClicked => self.on_cart_icon_clicked(),
            SessionEvent::CartCloseClicked => self.on_cart_close_clicked(),
        }
        Ok(())
    }

    pub fn on_search_text_changed(&mut self, text: impl Into<String>) {
        self.filter.set_search_text(text);
    }

    pub fn on_category_selected(&mut self, category: &str) -> Result<(), SessionError> {
        self.filter.set_category(category).inspect_err(|err| {
            logging::warn!("session: rejected category selection: {}", err);
        })
    }

    pub fn on_cart_icon_clicked(&mut self) {
        self.cart.open();
    }

    pub fn on_cart_close_clicked(&mut self) {
        self.cart.close();
    }

    /// Items to render, in catalog order.
    pub fn current_visible_items(&self) -> Vec<CatalogItem> {
        self.filter.visible_items().cloned().collect()
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart.is_open()
    }

    pub fn search_text(&self) -> &str {
        self.filter.search_text()
    }

    pub fn active_category(&self) -> &str {
        self.filter.active_category()
    }

    /// Category tiles are only offered while no search is active.
    pub fn categories_visible(&self) -> bool {
        !self.filter.is_searching()
    }

    pub fn categories(&self) -> &[CategoryLabel] {
        self.filter.catalog().all_categories()
    }
}
