//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Catalog dataset: category list and dishes, in display order.
pub const CATALOG_DATA: &str = include_str!("../assets/data/catalog.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name used for the logo tile title.
pub const APP_NAME: &str = "Food Catalog";

/// Placeholder text of the nav search box.
pub const SEARCH_PLACEHOLDER: &str = "Search Items ..";

/// Base path that item `image_ref`s are resolved against.
///
/// Trunk copies `assets/images` to `images/` in the served bundle.
pub const IMAGE_BASE_PATH: &str = "images";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

/// Resolve an item image handle to a URL.
pub fn image_url(image_ref: &str) -> String {
    format!("{}/{}", IMAGE_BASE_PATH, image_ref)
}
