//! A rendered product card: one product plus the card-local state.
//!
//! [`CardState`] is everything a card remembers between clicks. Surfaces keep
//! one per card (or ship it with each request) and never share it.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::selection::{self, Selection, SelectionCommand};
use crate::slider::{Slider, SliderCommand};
use crate::view::VariantView;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub image: usize,
}

/// Any click a card responds to.
///
/// Serialized as `{"type": "select_color", "value": "Black"}` or
/// `{"type": "next_image"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardCommand {
    Select(SelectionCommand),
    Slide(SliderCommand),
}

impl From<SelectionCommand> for CardCommand {
    fn from(command: SelectionCommand) -> Self {
        Self::Select(command)
    }
}

impl From<SliderCommand> for CardCommand {
    fn from(command: SliderCommand) -> Self {
        Self::Slide(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub active: bool,
}

/// The full view-model of a card, rebuilt after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub index: usize,
    pub name: String,
    pub note: String,
    pub specs_page: String,
    pub images: Vec<ImageView>,
    pub slider_controls: bool,
    pub variant: VariantView,
    pub state: CardState,
}

#[derive(Debug, Clone)]
pub struct Card<'a> {
    product: &'a Product,
    selection: Selection,
    slider: Slider,
}

impl<'a> Card<'a> {
    /// A card as first rendered: cheapest variant selected, first image shown.
    #[must_use]
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            selection: Selection::initial(product),
            slider: Slider::new(product.images.len()),
        }
    }

    /// Restores a card from previously emitted state.
    #[must_use]
    pub fn with_state(product: &'a Product, state: CardState) -> Self {
        Self {
            product,
            selection: state.selection,
            slider: Slider::at(state.image, product.images.len()),
        }
    }

    #[must_use]
    pub fn product(&self) -> &'a Product {
        self.product
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> CardState {
        CardState {
            selection: self.selection.clone(),
            image: self.slider.index(),
        }
    }

    /// Applies a command. Returns `false` when the command had no effect.
    pub fn dispatch(&mut self, command: &CardCommand) -> bool {
        match command {
            CardCommand::Select(cmd) => {
                let next = selection::apply(self.product, &self.selection, cmd);
                let changed = next != self.selection;
                self.selection = next;
                changed
            }
            CardCommand::Slide(cmd) => {
                let before = self.slider.index();
                self.slider.apply(*cmd);
                before != self.slider.index()
            }
        }
    }

    #[must_use]
    pub fn refresh(&self) -> VariantView {
        selection::refresh(self.product, &self.selection)
    }

    /// Builds the view-model for the card at `index` in display order.
    #[must_use]
    pub fn view(&self, index: usize) -> CardView {
        let active = self.slider.index();
        CardView {
            index,
            name: self.product.name.clone(),
            note: self.product.note.clone(),
            specs_page: self.product.specs_page.clone(),
            images: self
                .product
                .images
                .iter()
                .enumerate()
                .map(|(i, url)| ImageView {
                    url: url.clone(),
                    active: i == active,
                })
                .collect(),
            slider_controls: self.slider.controls_visible(),
            variant: self.refresh(),
            state: self.state(),
        }
    }
}
