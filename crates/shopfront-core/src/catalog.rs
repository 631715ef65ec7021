//! Catalog data model as served in `products.json`.
//!
//! ## Shape
//!
//! The document is a bare JSON array of products. Field names are camelCase.
//! `images` and `note` are optional and default to empty; older catalogs name
//! the specs link `specs` instead of `specsPage`, so both are accepted.
//!
//! Prices are whole numbers in the display currency. A fractional or negative
//! price is a deserialization error, which fails the whole catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A swatch offered on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    /// CSS color used to paint the swatch and tint the color label.
    pub code: String,
}

/// One purchasable SKU: a concrete color × storage × RAM combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableVariant {
    pub color: String,
    pub storage: String,
    pub ram: String,
    pub price: u64,
}

impl AvailableVariant {
    #[must_use]
    pub fn matches(&self, color: &str, storage: &str, ram: &str) -> bool {
        self.color == color && self.storage == storage && self.ram == ram
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub colors: Vec<Color>,
    #[serde(default)]
    pub note: String,
    pub storage_options: Vec<String>,
    pub ram_options: Vec<String>,
    #[serde(alias = "specs")]
    pub specs_page: String,
    pub available_variants: Vec<AvailableVariant>,
}

impl Product {
    /// Returns the cheapest variant of this product, if it has any.
    #[must_use]
    pub fn cheapest_variant(&self) -> Option<&AvailableVariant> {
        cheapest(&self.available_variants)
    }

    /// Looks up a swatch by color name.
    #[must_use]
    pub fn color(&self, name: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.name == name)
    }

    /// All variants offered in `color`, in catalog order.
    pub fn variants_in_color<'a>(
        &'a self,
        color: &'a str,
    ) -> impl Iterator<Item = &'a AvailableVariant> + 'a {
        self.available_variants
            .iter()
            .filter(move |v| v.color == color)
    }

    /// Finds the variant matching the full triple.
    #[must_use]
    pub fn find_variant(&self, color: &str, storage: &str, ram: &str) -> Option<&AvailableVariant> {
        self.available_variants
            .iter()
            .find(|v| v.matches(color, storage, ram))
    }

    /// Checks the invariants a product must satisfy to be displayed.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoVariants`] when `availableVariants` is empty.
    /// - [`CatalogError::DuplicateVariant`] when two variants share a
    ///   `(color, storage, ram)` triple.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.available_variants.is_empty() {
            return Err(CatalogError::NoVariants {
                product: self.name.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(self.available_variants.len());
        for v in &self.available_variants {
            if !seen.insert((v.color.as_str(), v.storage.as_str(), v.ram.as_str())) {
                return Err(CatalogError::DuplicateVariant {
                    product: self.name.clone(),
                    color: v.color.clone(),
                    storage: v.storage.clone(),
                    ram: v.ram.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Returns the variant with the lowest price.
///
/// Ties go to the variant encountered first, so the result depends on the
/// iteration order of `variants` and not on price alone.
pub fn cheapest<'a, I>(variants: I) -> Option<&'a AvailableVariant>
where
    I: IntoIterator<Item = &'a AvailableVariant>,
{
    // `min_by_key` keeps the first of several equal minimums.
    variants.into_iter().min_by_key(|v| v.price)
}

/// A validated product collection, ordered by cheapest variant price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates every product and sorts the collection ascending by each
    /// product's cheapest price. The sort is stable: products with equal
    /// cheapest prices keep their input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] encountered. A single bad product
    /// rejects the whole collection.
    pub fn from_products(mut products: Vec<Product>) -> Result<Self, CatalogError> {
        for product in &products {
            product.validate()?;
        }

        // Every product has at least one variant after validation.
        products.sort_by_key(|p| p.cheapest_variant().map_or(0, |v| v.price));

        Ok(Self { products })
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds a product by exact name, returning its position in display order.
    #[must_use]
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
