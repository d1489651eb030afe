//! Core state logic for the catalog page.
//!
//! This module provides:
//! - [`CatalogStore`] read-only dishes and categories
//! - `FilterController` search/category filtering with a derived visible list
//! - `CartVisibility` the cart panel open/closed flag
//! - [`SessionState`] and [`SessionEvent`] the store the UI dispatches into

mod cart;
mod catalog;
pub mod error;
mod filter;
mod session;

pub use catalog::CatalogStore;
pub use session::{SessionEvent, SessionState};
