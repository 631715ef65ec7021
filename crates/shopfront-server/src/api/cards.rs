use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use shopfront_core::{Card, CardCommand, CardState, CardView};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CardItem {
    #[serde(flatten)]
    view: CardView,
    price_label: String,
    /// `false` when the command was ignored (non-selectable option, RAM with
    /// no exact variant, unknown color, single-image slider).
    changed: bool,
}

/// Body of `POST /api/v1/cards/{index}/commands`.
///
/// `state` is what the previous response returned; omit it to start from the
/// card's initial state.
#[derive(Debug, Deserialize)]
pub(super) struct CommandRequest {
    #[serde(default)]
    state: Option<CardState>,
    command: CardCommand,
}

pub(super) async fn get_card(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(index): Path<usize>,
) -> Result<Json<ApiResponse<CardItem>>, ApiError> {
    let product = state.product(&req_id.0, index)?;
    let view = Card::new(product).view(index);

    Ok(Json(ApiResponse {
        data: CardItem {
            price_label: view.variant.price.label(&state.currency_prefix),
            view,
            changed: false,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn run_command(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(index): Path<usize>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<ApiResponse<CardItem>>, ApiError> {
    let product = state.product(&req_id.0, index)?;

    let mut card = match request.state {
        Some(card_state) => Card::with_state(product, card_state),
        None => Card::new(product),
    };
    let changed = card.dispatch(&request.command);
    if !changed {
        tracing::debug!(index, command = ?request.command, "card command had no effect");
    }

    let view = card.view(index);
    Ok(Json(ApiResponse {
        data: CardItem {
            price_label: view.variant.price.label(&state.currency_prefix),
            view,
            changed,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
