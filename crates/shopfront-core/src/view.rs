//! View-model types derived from a [`Selection`](crate::Selection) on every refresh.
//!
//! These carry no state of their own: render them, then throw them away.

use serde::Serialize;

/// Status text shown when the selection does not resolve to one variant.
pub const SELECT_VARIANT_LABEL: &str = "Select Variant";
/// Status text shown when the selected color has no variants at all.
pub const NOT_AVAILABLE_LABEL: &str = "Not available.";

/// What the price region of a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceDisplay {
    Price { amount: u64 },
    SelectVariant,
    NotAvailable,
}

impl PriceDisplay {
    /// Renders the display text, prefixing prices with `currency_prefix`.
    #[must_use]
    pub fn label(&self, currency_prefix: &str) -> String {
        match self {
            Self::Price { amount } => format_price(*amount, currency_prefix),
            Self::SelectVariant => SELECT_VARIANT_LABEL.to_owned(),
            Self::NotAvailable => NOT_AVAILABLE_LABEL.to_owned(),
        }
    }

    #[must_use]
    pub fn amount(&self) -> Option<u64> {
        match self {
            Self::Price { amount } => Some(*amount),
            Self::SelectVariant | Self::NotAvailable => None,
        }
    }
}

/// Formats an integer price with comma thousands separators, e.g.
/// `format_price(12999, "₱")` → `"₱12,999"`.
#[must_use]
pub fn format_price(amount: u64, currency_prefix: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{currency_prefix}{grouped}")
}

/// One storage or RAM option button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub selectable: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchView {
    pub name: String,
    pub code: String,
    pub active: bool,
}

/// The color label next to the price, tinted with the swatch color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorLabel {
    pub name: String,
    pub tint: String,
}

/// Everything the variant region of a card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantView {
    pub swatches: Vec<SwatchView>,
    pub color_label: Option<ColorLabel>,
    pub price: PriceDisplay,
    pub storage: Vec<OptionView>,
    pub ram: Vec<OptionView>,
}

impl VariantView {
    #[must_use]
    pub fn storage_option(&self, value: &str) -> Option<&OptionView> {
        self.storage.iter().find(|o| o.value == value)
    }

    #[must_use]
    pub fn ram_option(&self, value: &str) -> Option<&OptionView> {
        self.ram.iter().find(|o| o.value == value)
    }
}
