//! Read-only catalog store.
//!
//! Holds the dish list and the category list for the lifetime of a session.
//! Data is injected at construction; [`CatalogStore::bundled`] loads the
//! dataset shipped in `assets/data/catalog.toml`.

use std::collections::HashSet;

use leptos::logging;
use serde::Deserialize;

use super::error::CatalogError;
use crate::config;
use crate::models::{CatalogItem, CategoryLabel};

/// On-disk shape of the dataset.
#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryLabel>,
    #[serde(default)]
    items: Vec<CatalogItem>,
}

/// Immutable catalog and category list.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
    categories: Vec<CategoryLabel>,
}

impl CatalogStore {
    /// Build a store from already-loaded data, validating it first.
    pub fn new(
        items: Vec<CatalogItem>,
        categories: Vec<CategoryLabel>,
    ) -> Result<Self, CatalogError> {
        validate(&items, &categories)?;
        Ok(Self { items, categories })
    }

    /// Parse and validate a TOML dataset.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.items, file.categories)
    }

    /// Load the dataset bundled with the application.
    pub fn bundled() -> Result<Self, CatalogError> {
        let store = Self::from_toml(config::CATALOG_DATA)?;
        logging::log!(
            "catalog: loaded {} items in {} categories",
            store.items.len(),
            store.categories.len()
        );
        Ok(store)
    }

    /// Every item, in catalog order.
    pub fn all_items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Every category, in display order, including "All".
    pub fn all_categories(&self) -> &[CategoryLabel] {
        &self.categories
    }

    /// Whether `name` is a selectable category ("All" included).
    pub fn is_known_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

fn validate(items: &[CatalogItem], categories: &[CategoryLabel]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for category in categories {
        if !names.insert(category.name.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.name.clone()));
        }
    }
    if !categories.iter().any(CategoryLabel::is_all) {
        return Err(CatalogError::MissingAllCategory);
    }

    let mut ids = HashSet::new();
    for item in items {
        if !ids.insert(item.id) {
            return Err(CatalogError::DuplicateItemId(item.id));
        }
        if item.price == 0 {
            return Err(CatalogError::NonPositivePrice(item.id));
        }
        // Items belong to a concrete category, never to the sentinel.
        if item.category == CategoryLabel::ALL || !names.contains(item.category.as_str()) {
            return Err(CatalogError::UnknownCategory {
                id: item.id,
                category: item.category.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{DietType, ItemId};

    pub(crate) fn category(name: &str) -> CategoryLabel {
        CategoryLabel {
            name: name.to_string(),
            icon_ref: name.to_lowercase(),
        }
    }

    pub(crate) fn dish(id: u32, name: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: ItemId(id),
            name: name.to_string(),
            price: 100 + id,
            diet_type: DietType::Veg,
            category: category.to_string(),
            image_ref: format!("{}.avif", name.to_lowercase()),
        }
    }

    /// Two-item catalog: Pancake (Breakfast), Pizza (Dinner).
    pub(crate) fn pancake_pizza() -> CatalogStore {
        CatalogStore::new(
            vec![dish(1, "Pancake", "Breakfast"), dish(2, "Pizza", "Dinner")],
            vec![category("All"), category("Breakfast"), category("Dinner")],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors_preserve_order() {
        let store = pancake_pizza();
        let names: Vec<_> = store.all_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pancake", "Pizza"]);
        let cats: Vec<_> = store
            .all_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(cats, ["All", "Breakfast", "Dinner"]);
    }

    #[test]
    fn test_known_category() {
        let store = pancake_pizza();
        assert!(store.is_known_category("All"));
        assert!(store.is_known_category("Dinner"));
        assert!(!store.is_known_category("Snacks"));
        assert!(!store.is_known_category("dinner"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let store = CatalogStore::new(vec![], vec![category("All")]).unwrap();
        assert!(store.all_items().is_empty());
    }

    #[test]
    fn test_missing_all_category() {
        let err = CatalogStore::new(vec![], vec![category("Breakfast")]).unwrap_err();
        assert_eq!(err, CatalogError::MissingAllCategory);
    }

    #[test]
    fn test_duplicate_category() {
        let err = CatalogStore::new(vec![], vec![category("All"), category("All")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCategory("All".to_string()));
    }

    #[test]
    fn test_duplicate_item_id() {
        let err = CatalogStore::new(
            vec![dish(1, "Pancake", "Breakfast"), dish(1, "Waffle", "Breakfast")],
            vec![category("All"), category("Breakfast")],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItemId(ItemId(1)));
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut free = dish(3, "Water", "Breakfast");
        free.price = 0;
        let err =
            CatalogStore::new(vec![free], vec![category("All"), category("Breakfast")]).unwrap_err();
        assert_eq!(err, CatalogError::NonPositivePrice(ItemId(3)));
    }

    #[test]
    fn test_unknown_item_category() {
        let err = CatalogStore::new(vec![dish(1, "Chips", "Snacks")], vec![category("All")])
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { category, .. } if category == "Snacks"));
    }

    #[test]
    fn test_item_in_all_category_rejected() {
        let err =
            CatalogStore::new(vec![dish(1, "Chips", "All")], vec![category("All")]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[categories]]
            name = "All"
            icon = "grid"

            [[categories]]
            name = "Soups"
            icon = "soup"

            [[items]]
            id = 7
            name = "Tomato Soup"
            price = 199
            diet = "veg"
            category = "Soups"
            image = "tomato_soup.avif"

            [[items]]
            id = 8
            name = "Chicken Soup"
            price = 249
            diet = "non-veg"
            category = "Soups"
            image = "chicken_soup.avif"
        "#;
        let store = CatalogStore::from_toml(source).unwrap();
        assert_eq!(store.all_items().len(), 2);
        assert_eq!(store.all_items()[1].diet_type, DietType::NonVeg);
        assert_eq!(store.all_items()[0].image_ref, "tomato_soup.avif");
        assert_eq!(store.all_categories()[1].icon_ref, "soup");
    }

    #[test]
    fn test_from_toml_bad_diet() {
        let source = r#"
            [[categories]]
            name = "All"
            icon = "grid"

            [[items]]
            id = 1
            name = "Mystery"
            price = 10
            diet = "vegan"
            category = "All"
            image = "x.avif"
        "#;
        assert!(matches!(
            CatalogStore::from_toml(source),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_dataset_is_valid() {
        let store = CatalogStore::bundled().unwrap();
        assert!(!store.all_items().is_empty());
        assert!(store.all_categories()[0].is_all());
        for item in store.all_items() {
            assert!(store.is_known_category(&item.category));
        }
    }
}
