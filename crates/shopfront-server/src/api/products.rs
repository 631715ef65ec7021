use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    index: usize,
    name: String,
    primary_image_url: Option<String>,
    note: String,
    specs_page: String,
    variant_count: usize,
    color_count: usize,
    cheapest_price: u64,
    cheapest_price_label: String,
}

/// Lists products in display order (cheapest variant price ascending).
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<ProductItem>>>, ApiError> {
    let Some(catalog) = state.catalog.catalog() else {
        return Err(ApiError::new(
            req_id.0,
            "catalog_unavailable",
            crate::render::CATALOG_ERROR_MESSAGE,
        ));
    };

    let data = catalog
        .products()
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let cheapest_price = product.cheapest_variant().map_or(0, |v| v.price);
            ProductItem {
                index,
                name: product.name.clone(),
                primary_image_url: product.images.first().cloned(),
                note: product.note.clone(),
                specs_page: product.specs_page.clone(),
                variant_count: product.available_variants.len(),
                color_count: product.colors.len(),
                cheapest_price,
                cheapest_price_label: shopfront_core::format_price(
                    cheapest_price,
                    &state.currency_prefix,
                ),
            }
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
