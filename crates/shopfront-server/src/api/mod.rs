mod cards;
mod products;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shopfront_core::{AppConfig, Catalog, Product};
use shopfront_loader::{CatalogClient, CatalogSource, LoaderError};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};
use crate::pages;

/// The product collection as loaded at startup. Never reloaded.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Ready(Arc<Catalog>),
    Unavailable,
}

impl CatalogState {
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Ready(catalog) => Some(catalog),
            Self::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub currency_prefix: Arc<str>,
}

impl AppState {
    /// Looks up the product at `index`, mapping an unloaded catalog and an
    /// unknown index to API errors.
    pub(crate) fn product(&self, request_id: &str, index: usize) -> Result<&Product, ApiError> {
        let catalog = self.catalog.catalog().ok_or_else(|| {
            ApiError::new(
                request_id,
                "catalog_unavailable",
                crate::render::CATALOG_ERROR_MESSAGE,
            )
        })?;
        catalog
            .get(index)
            .ok_or_else(|| ApiError::new(request_id, "not_found", format!("no product at index {index}")))
    }
}

/// Loads the catalog once. Any failure is logged and yields
/// [`CatalogState::Unavailable`]; no partial catalog is kept.
pub async fn load_catalog_state(config: &AppConfig) -> CatalogState {
    match try_load_catalog(config).await {
        Ok(catalog) => CatalogState::Ready(Arc::new(catalog)),
        Err(e) => {
            tracing::error!(error = %e, source = %config.catalog_source, "failed to load catalog");
            CatalogState::Unavailable
        }
    }
}

async fn try_load_catalog(config: &AppConfig) -> Result<Catalog, LoaderError> {
    let source = CatalogSource::parse(&config.catalog_source)?;
    let client = CatalogClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
    client.load(&source).await
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    catalog: &'static str,
    products: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "catalog_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, REQUEST_ID_HEADER])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route("/api/v1/cards/{index}", get(cards::get_card))
        .route("/api/v1/cards/{index}/commands", post(cards::run_command))
}

fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::catalog_page))
        .route("/cards/{index}", get(pages::card_page))
        .route("/specs/{index}", get(pages::view_specs))
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(page_router())
        .merge(api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match state.catalog.catalog() {
        Some(catalog) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    catalog: "ready",
                    products: catalog.len(),
                },
                meta,
            }),
        ),
        None => {
            tracing::warn!("health check: catalog unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        catalog: "unavailable",
                        products: 0,
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "../api_test.rs"]
mod tests;
