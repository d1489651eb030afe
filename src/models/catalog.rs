//! Catalog data types: items, diet types, and category labels.

use std::fmt;

use serde::Deserialize;

/// Stable identifier of a catalog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dietary classification shown on every item card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    /// Vegetarian
    Veg,
    /// Contains meat, fish, or egg
    NonVeg,
}

impl DietType {
    /// Label as printed on the card ("veg" / "non-veg").
    pub fn label(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
        }
    }
}

/// A single purchasable dish.
///
/// Items are immutable once the catalog is loaded; the filter only ever
/// selects and orders them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Price in whole rupees. Always positive.
    pub price: u32,
    #[serde(rename = "diet")]
    pub diet_type: DietType,
    pub category: String,
    /// Opaque image handle, resolved by the presentation layer.
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl CatalogItem {
    /// Price formatted the way item cards show it (e.g. `Rs 499/-`).
    pub fn display_price(&self) -> String {
        format!("Rs {}/-", self.price)
    }

    /// Case-insensitive substring match against the item name.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}

/// A category tile: name plus an opaque icon handle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryLabel {
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_ref: String,
}

impl CategoryLabel {
    /// Reserved category name meaning "no category filtering".
    pub const ALL: &'static str = "All";

    /// Returns true for the "All" sentinel.
    pub fn is_all(&self) -> bool {
        self.name == Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CatalogItem {
        CatalogItem {
            id: ItemId(1),
            name: name.to_string(),
            price: 499,
            diet_type: DietType::Veg,
            category: "Breakfast".to_string(),
            image_ref: "pancake.avif".to_string(),
        }
    }

    #[test]
    fn test_display_price() {
        assert_eq!(item("Pancake").display_price(), "Rs 499/-");
    }

    #[test]
    fn test_name_matches_case_insensitive() {
        let pancake = item("Pancake");
        assert!(pancake.name_matches("pan"));
        assert!(pancake.name_matches("cake"));
        assert!(pancake.name_matches(""));
        assert!(!pancake.name_matches("PAN"));
        assert!(!pancake.name_matches("pizza"));
    }

    #[test]
    fn test_diet_labels() {
        assert_eq!(DietType::Veg.label(), "veg");
        assert_eq!(DietType::NonVeg.label(), "non-veg");
    }

    #[test]
    fn test_all_sentinel() {
        let all = CategoryLabel {
            name: "All".to_string(),
            icon_ref: "grid".to_string(),
        };
        let soups = CategoryLabel {
            name: "Soups".to_string(),
            icon_ref: "soup".to_string(),
        };
        assert!(all.is_all());
        assert!(!soups.is_all());
    }
}
