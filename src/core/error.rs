//! Error types for the catalog core.
//!
//! - [`CatalogError`] - Bundled dataset parsing and validation failures
//! - [`SessionError`] - Events rejected by the session store
//!
//! An empty search result is not an error; it is a valid visible list.

use thiserror::Error;

use crate::models::ItemId;

/// Failures while loading the catalog dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The dataset is not valid TOML or does not match the expected shape.
    #[error("catalog parse error: {0}")]
    Parse(String),
    /// The category list lacks the reserved "All" entry.
    #[error("category list must contain \"All\"")]
    MissingAllCategory,
    /// The same category name appears twice.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
    /// Two items share an id.
    #[error("duplicate item id: {0}")]
    DuplicateItemId(ItemId),
    /// An item has a zero price.
    #[error("item {0} must have a positive price")]
    NonPositivePrice(ItemId),
    /// An item references a category that is not in the list (or uses "All").
    #[error("item {id} has unknown category '{category}'")]
    UnknownCategory { id: ItemId, category: String },
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Events the session store refuses to apply.
///
/// A rejected event leaves the session state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Category selection named a category that is not in the catalog.
    #[error("unknown category '{0}'")]
    InvalidCategory(String),

    /// Event sent after the reactive session was disposed.
    #[error("session is no longer active")]
    SessionClosed,
}
