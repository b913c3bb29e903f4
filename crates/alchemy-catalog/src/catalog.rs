//! The element catalog: read-only display metadata keyed by element id.

use std::collections::BTreeMap;

use alchemy_types::{Element, ElementId, Language};

use crate::error::CatalogError;

/// Icon shown for identifiers missing from the catalog.
pub const UNKNOWN_ICON: &str = "❓";

/// Base shop price for elements without an explicit price.
pub const DEFAULT_BASE_PRICE: u32 = 15;

/// Static mapping from element id to display metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementCatalog {
    elements: BTreeMap<ElementId, Element>,
}

impl ElementCatalog {
    /// Create an empty catalog.
    pub const fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
        }
    }

    /// Add an element. Keys must be unique.
    pub fn insert(&mut self, element: Element) -> Result<(), CatalogError> {
        if self.elements.contains_key(&element.id) {
            return Err(CatalogError::DuplicateElement(element.id));
        }
        self.elements.insert(element.id.clone(), element);
        Ok(())
    }

    /// Look up an element by id.
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Whether the id resolves to a catalog entry.
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of elements in the catalog.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate elements in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Localized name, or the raw id for unknown elements.
    pub fn display_name(&self, id: &str, lang: Language) -> String {
        self.get(id)
            .map_or_else(|| id.to_owned(), |e| e.name.get(lang).to_owned())
    }

    /// Icon, or [`UNKNOWN_ICON`] for unknown elements.
    pub fn icon(&self, id: &str) -> &str {
        self.get(id).map_or(UNKNOWN_ICON, |e| e.icon.as_str())
    }

    /// Shop list price: base price scaled by the category multiplier.
    ///
    /// Returns `None` for unknown elements.
    pub fn list_price(&self, id: &str) -> Option<u64> {
        let element = self.get(id)?;
        let base = u64::from(element.price.unwrap_or(DEFAULT_BASE_PRICE));
        let tenths = u64::from(element.category.price_multiplier_tenths());
        base.checked_mul(tenths)?.checked_div(10)
    }
}

#[cfg(test)]
mod tests {
    use alchemy_types::{Category, LocalizedText};

    use super::*;

    fn element(id: &str, category: Category, price: Option<u32>) -> Element {
        Element {
            id: ElementId::from(id),
            icon: "🔥".to_owned(),
            name: LocalizedText::new("Огонь", "Fire"),
            category,
            description: None,
            price,
        }
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut catalog = ElementCatalog::new();
        assert!(catalog.insert(element("fire", Category::Basic, Some(5))).is_ok());
        let again = catalog.insert(element("fire", Category::Basic, Some(5)));
        assert!(matches!(again, Err(CatalogError::DuplicateElement(_))));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut catalog = ElementCatalog::new();
        assert!(catalog.insert(element("fire", Category::Basic, Some(5))).is_ok());
        assert_eq!(catalog.display_name("fire", Language::Ru), "Огонь");
        assert_eq!(catalog.display_name("fire", Language::En), "Fire");
        assert_eq!(catalog.display_name("mystery", Language::En), "mystery");
        assert_eq!(catalog.icon("mystery"), UNKNOWN_ICON);
    }

    #[test]
    fn list_price_applies_category_multiplier() {
        let mut catalog = ElementCatalog::new();
        assert!(catalog.insert(element("fire", Category::Basic, Some(5))).is_ok());
        assert!(catalog.insert(element("gold", Category::Materials, None)).is_ok());
        assert!(catalog.insert(element("dragon", Category::Legendary, None)).is_ok());
        assert_eq!(catalog.list_price("fire"), Some(5));
        // 15 * 1.5 = 22.5, truncated
        assert_eq!(catalog.list_price("gold"), Some(22));
        assert_eq!(catalog.list_price("dragon"), Some(75));
        assert_eq!(catalog.list_price("nothing"), None);
    }
}
