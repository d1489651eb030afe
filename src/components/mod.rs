//! UI components built with Leptos.
//!
//! - [`Home`] - Catalog page (entry point)
//! - [`Nav`] - Logo, search box, and cart button
//! - [`CategoryGrid`] - Category tiles
//! - [`ItemCard`] - A single dish
//! - [`CartPanel`] - Slide-in cart panel
//! - [`icons`] - Centralized icon definitions (change theme here)

mod cart_panel;
mod category_grid;
mod home;
pub mod icons;
mod item_card;
mod nav;

pub use cart_panel::CartPanel;
pub use category_grid::CategoryGrid;
pub use home::Home;
pub use item_card::ItemCard;
pub use nav::Nav;
