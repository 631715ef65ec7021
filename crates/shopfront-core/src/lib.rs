pub mod app_config;
pub mod card;
pub mod catalog;
pub mod config;
pub mod selection;
pub mod slider;
pub mod view;

pub use app_config::{AppConfig, Environment};
pub use card::{Card, CardCommand, CardState, CardView, ImageView};
pub use catalog::{cheapest, AvailableVariant, Catalog, Color, Product};
pub use config::{load_app_config, load_app_config_from_env};
pub use selection::{Selection, SelectionCommand};
pub use slider::{Slider, SliderCommand};
pub use view::{format_price, OptionView, PriceDisplay, VariantView};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A product collection that cannot be displayed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product \"{product}\" has no available variants")]
    NoVariants { product: String },

    #[error("product \"{product}\" lists variant {color}/{storage}/{ram} more than once")]
    DuplicateVariant {
        product: String,
        color: String,
        storage: String,
        ram: String,
    },
}
