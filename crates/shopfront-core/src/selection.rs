//! Variant resolution: the per-card selection and its transitions.
//!
//! Choices narrow left to right. Storage options are judged against the
//! selected color only, RAM options against color and storage together. The
//! transitions are pure: each takes the product and the current [`Selection`]
//! and returns the next one. [`refresh`] derives the [`VariantView`] from a
//! selection without changing it.
//!
//! Two repair policies are fixed and depend on catalog order, not price alone:
//!
//! - picking a color resets storage and RAM to the cheapest variant of that
//!   color (first one wins on a price tie);
//! - picking a storage resets RAM to the first variant listed for
//!   `(color, storage)`, even when the current RAM would still be valid.

use serde::{Deserialize, Serialize};

use crate::catalog::{cheapest, AvailableVariant, Product};
use crate::view::{ColorLabel, OptionView, PriceDisplay, SwatchView, VariantView};

/// The shopper's current choice on one card. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub color: Option<String>,
    pub storage: Option<String>,
    pub ram: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn from_variant(variant: &AvailableVariant) -> Self {
        Self {
            color: Some(variant.color.clone()),
            storage: Some(variant.storage.clone()),
            ram: Some(variant.ram.clone()),
        }
    }

    /// The selection a freshly rendered card starts with: the product's
    /// cheapest variant, or nothing when the product has no variants.
    #[must_use]
    pub fn initial(product: &Product) -> Self {
        product
            .cheapest_variant()
            .map(Self::from_variant)
            .unwrap_or_default()
    }

    /// The variant this selection resolves to, if all three fields match one.
    #[must_use]
    pub fn resolve<'a>(&self, product: &'a Product) -> Option<&'a AvailableVariant> {
        match (&self.color, &self.storage, &self.ram) {
            (Some(color), Some(storage), Some(ram)) => product.find_variant(color, storage, ram),
            _ => None,
        }
    }
}

/// A shopper action on the variant region of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SelectionCommand {
    SelectColor(String),
    SelectStorage(String),
    SelectRam(String),
}

/// Dispatches `command` to its transition.
#[must_use]
pub fn apply(product: &Product, selection: &Selection, command: &SelectionCommand) -> Selection {
    match command {
        SelectionCommand::SelectColor(color) => select_color(product, selection, color),
        SelectionCommand::SelectStorage(storage) => select_storage(product, selection, storage),
        SelectionCommand::SelectRam(ram) => select_ram(product, selection, ram),
    }
}

/// Switches to `color` and re-seats storage and RAM on that color's cheapest
/// variant. A color with no variants clears storage and RAM.
///
/// Colors the product does not offer are ignored.
#[must_use]
pub fn select_color(product: &Product, selection: &Selection, color: &str) -> Selection {
    if product.color(color).is_none() {
        return selection.clone();
    }

    match cheapest(product.variants_in_color(color)) {
        Some(variant) => Selection::from_variant(variant),
        None => Selection {
            color: Some(color.to_owned()),
            storage: None,
            ram: None,
        },
    }
}

/// Switches to `storage` and takes RAM from the first variant of
/// `(color, storage)`. No-op when the option is not selectable.
#[must_use]
pub fn select_storage(product: &Product, selection: &Selection, storage: &str) -> Selection {
    if !storage_selectable(product, selection, storage) {
        return selection.clone();
    }

    let mut next = selection.clone();
    next.storage = Some(storage.to_owned());

    let color = selection.color.as_deref().unwrap_or_default();
    if let Some(first) = product
        .variants_in_color(color)
        .find(|v| v.storage == storage)
    {
        next.ram = Some(first.ram.clone());
    }

    next
}

/// Switches to `ram`, but only when that yields an exact variant.
#[must_use]
pub fn select_ram(product: &Product, selection: &Selection, ram: &str) -> Selection {
    if !ram_selectable(product, selection, ram) {
        return selection.clone();
    }

    Selection {
        ram: Some(ram.to_owned()),
        ..selection.clone()
    }
}

/// Whether a storage option can currently be picked.
#[must_use]
pub fn storage_selectable(product: &Product, selection: &Selection, storage: &str) -> bool {
    let Some(color) = selection.color.as_deref() else {
        return false;
    };
    product.storage_options.iter().any(|s| s == storage)
        && product.variants_in_color(color).any(|v| v.storage == storage)
}

/// Whether a RAM option can currently be picked.
#[must_use]
pub fn ram_selectable(product: &Product, selection: &Selection, ram: &str) -> bool {
    let (Some(color), Some(storage)) = (selection.color.as_deref(), selection.storage.as_deref())
    else {
        return false;
    };
    product.ram_options.iter().any(|r| r == ram) && product.find_variant(color, storage, ram).is_some()
}

/// Derives the variant region of a card from `selection`.
///
/// Calling it twice on the same inputs yields the same view.
#[must_use]
pub fn refresh(product: &Product, selection: &Selection) -> VariantView {
    let selected_color = selection.color.as_deref();

    let swatches = product
        .colors
        .iter()
        .map(|c| SwatchView {
            name: c.name.clone(),
            code: c.code.clone(),
            active: selected_color == Some(c.name.as_str()),
        })
        .collect();

    let color_label = selected_color
        .and_then(|name| product.color(name))
        .map(|c| ColorLabel {
            name: c.name.clone(),
            tint: c.code.clone(),
        });

    let has_color_variants =
        selected_color.is_some_and(|color| product.variants_in_color(color).next().is_some());

    if !has_color_variants {
        return VariantView {
            swatches,
            color_label,
            price: PriceDisplay::NotAvailable,
            storage: disabled_options(&product.storage_options),
            ram: disabled_options(&product.ram_options),
        };
    }

    let storage = product
        .storage_options
        .iter()
        .map(|value| OptionView {
            value: value.clone(),
            selectable: storage_selectable(product, selection, value),
            active: selection.storage.as_deref() == Some(value.as_str()),
        })
        .collect();

    let ram = product
        .ram_options
        .iter()
        .map(|value| OptionView {
            value: value.clone(),
            selectable: ram_selectable(product, selection, value),
            active: selection.ram.as_deref() == Some(value.as_str()),
        })
        .collect();

    let price = selection
        .resolve(product)
        .map_or(PriceDisplay::SelectVariant, |v| PriceDisplay::Price { amount: v.price });

    VariantView {
        swatches,
        color_label,
        price,
        storage,
        ram,
    }
}

fn disabled_options(values: &[String]) -> Vec<OptionView> {
    values
        .iter()
        .map(|value| OptionView {
            value: value.clone(),
            selectable: false,
            active: false,
        })
        .collect()
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
