//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`CatalogItem`], [`ItemId`], [`DietType`] - Dishes in the catalog
//! - [`CategoryLabel`] - Category tiles, including the "All" sentinel

mod catalog;

pub use catalog::{CatalogItem, CategoryLabel, DietType, ItemId};
