//! HTML routes: the catalog page, single-card interaction, specs navigation.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shopfront_core::{Card, CardCommand, CardState, Selection, SelectionCommand, SliderCommand};

use crate::api::AppState;
use crate::render;

/// The action a card link carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CardAction {
    Color,
    Storage,
    Ram,
    Next,
    Prev,
}

/// Query string of `GET /cards/{index}`: the card's state before the click,
/// plus the click itself.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CardQuery {
    color: Option<String>,
    storage: Option<String>,
    ram: Option<String>,
    image: Option<usize>,
    action: Option<CardAction>,
    value: Option<String>,
}

impl CardQuery {
    /// The carried state, or `None` when the link carries no selection.
    fn state(&self) -> Option<CardState> {
        if self.color.is_none() && self.storage.is_none() && self.ram.is_none() {
            return None;
        }
        Some(CardState {
            selection: Selection {
                color: self.color.clone(),
                storage: self.storage.clone(),
                ram: self.ram.clone(),
            },
            image: self.image.unwrap_or_default(),
        })
    }

    /// Maps `action`/`value` to a card command. `Err` names what is missing.
    fn command(&self) -> Result<Option<CardCommand>, &'static str> {
        let Some(action) = self.action else {
            return Ok(None);
        };
        let value = || self.value.clone().ok_or("action requires a value");
        let command: CardCommand = match action {
            CardAction::Color => SelectionCommand::SelectColor(value()?).into(),
            CardAction::Storage => SelectionCommand::SelectStorage(value()?).into(),
            CardAction::Ram => SelectionCommand::SelectRam(value()?).into(),
            CardAction::Next => SliderCommand::NextImage.into(),
            CardAction::Prev => SliderCommand::PrevImage.into(),
        };
        Ok(Some(command))
    }
}

fn unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(render::render_error_page()),
    )
        .into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html("<p>Product not found.</p>")).into_response()
}

pub(crate) async fn catalog_page(State(state): State<AppState>) -> Response {
    let Some(catalog) = state.catalog.catalog() else {
        return unavailable();
    };

    let views: Vec<_> = catalog
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| Card::new(product).view(index))
        .collect();

    Html(render::render_catalog_page(&views, &state.currency_prefix)).into_response()
}

pub(crate) async fn card_page(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<CardQuery>,
) -> Response {
    let Some(catalog) = state.catalog.catalog() else {
        return unavailable();
    };
    let Some(product) = catalog.get(index) else {
        return not_found();
    };

    let command = match query.command() {
        Ok(command) => command,
        Err(reason) => {
            return (StatusCode::BAD_REQUEST, Html(format!("<p>{reason}</p>"))).into_response();
        }
    };

    let card_state = query.state().unwrap_or_else(|| CardState {
        selection: Selection::initial(product),
        image: query.image.unwrap_or_default(),
    });
    let mut card = Card::with_state(product, card_state);

    if let Some(command) = command {
        if !card.dispatch(&command) {
            tracing::debug!(index, ?command, "card command had no effect");
        }
    }

    Html(render::render_card_page(&card.view(index), &state.currency_prefix)).into_response()
}

/// Navigates to the product's specs page.
pub(crate) async fn view_specs(State(state): State<AppState>, Path(index): Path<usize>) -> Response {
    let Some(catalog) = state.catalog.catalog() else {
        return unavailable();
    };
    match catalog.get(index) {
        Some(product) => Redirect::to(&product.specs_page).into_response(),
        None => not_found(),
    }
}
