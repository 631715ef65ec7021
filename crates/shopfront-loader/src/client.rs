//! Client that reads the product collection from its static source.

use std::time::Duration;

use reqwest::Client;
use shopfront_core::{Catalog, Product};

use crate::error::LoaderError;
use crate::source::CatalogSource;

/// Fetches and validates the product collection.
///
/// One request per load, no retries: a failure rejects the whole catalog and
/// it is up to the caller to show the error state.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the configured request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Loads the collection from `source`, validates it, and sorts it by
    /// cheapest variant price.
    ///
    /// # Errors
    ///
    /// Any error from [`fetch_products`](Self::fetch_products), or
    /// [`LoaderError::Catalog`] when a product fails validation.
    pub async fn load(&self, source: &CatalogSource) -> Result<Catalog, LoaderError> {
        let products = self.fetch_products(source).await?;
        let count = products.len();
        let catalog = Catalog::from_products(products)?;
        tracing::info!(%source, products = count, "catalog loaded");
        Ok(catalog)
    }

    /// Reads the raw product list from `source` in document order.
    ///
    /// # Errors
    ///
    /// - [`LoaderError::NotFound`]: HTTP 404.
    /// - [`LoaderError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`LoaderError::Http`]: network or TLS failure.
    /// - [`LoaderError::Io`]: the file cannot be read.
    /// - [`LoaderError::Deserialize`]: the body is not a JSON product array.
    pub async fn fetch_products(&self, source: &CatalogSource) -> Result<Vec<Product>, LoaderError> {
        let body = match source {
            CatalogSource::Url(url) => self.fetch_url(url).await?,
            CatalogSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| LoaderError::Io {
                        path: path.clone(),
                        source: e,
                    })?
            }
        };

        parse_products(&body, &source.to_string())
    }

    async fn fetch_url(&self, url: &str) -> Result<String, LoaderError> {
        tracing::debug!(url, "fetching catalog");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoaderError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(LoaderError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Parses a `products.json` body.
///
/// # Errors
///
/// Returns [`LoaderError::Deserialize`] with `context` naming the source.
pub fn parse_products(body: &str, context: &str) -> Result<Vec<Product>, LoaderError> {
    serde_json::from_str::<Vec<Product>>(body).map_err(|e| LoaderError::Deserialize {
        context: format!("products from {context}"),
        source: e,
    })
}
