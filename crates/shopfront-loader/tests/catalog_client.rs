//! Integration tests for `CatalogClient::load`.
//!
//! HTTP sources are served by `wiremock`; file sources are written to a
//! `tempfile` directory. Covers the happy paths (URL and file, sorted output)
//! and every failure that rejects the whole catalog.

use std::io::Write;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_core::CatalogError;
use shopfront_loader::{CatalogClient, CatalogSource, LoaderError};

fn test_client() -> CatalogClient {
    CatalogClient::new(5, "shopfront-test/0.1").expect("failed to build test CatalogClient")
}

fn product_json(name: &str, prices: &[u64]) -> serde_json::Value {
    let variants: Vec<serde_json::Value> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            json!({
                "color": "Black",
                "storage": format!("{}GB", 128 << i),
                "ram": "8GB",
                "price": price,
            })
        })
        .collect();

    json!({
        "name": name,
        "images": [format!("https://cdn.example.com/{name}.png")],
        "colors": [{"name": "Black", "code": "#000000"}],
        "note": "",
        "storageOptions": ["128GB", "256GB", "512GB"],
        "ramOptions": ["8GB"],
        "specsPage": format!("https://example.com/{name}"),
        "availableVariants": variants,
    })
}

async fn serve(body: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(body)
        .mount(&server)
        .await;
    server
}

fn url_source(server: &MockServer) -> CatalogSource {
    CatalogSource::parse(&format!("{}/products.json", server.uri())).expect("valid url")
}

// ---------------------------------------------------------------------------
// Happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_from_url_sorts_by_cheapest_variant() {
    let body = json!([
        product_json("pro", &[1_500, 1_100]),
        product_json("lite", &[400]),
        product_json("mid", &[800, 700, 900]),
    ]);
    let server = serve(ResponseTemplate::new(200).set_body_json(&body)).await;

    let catalog = test_client()
        .load(&url_source(&server))
        .await
        .expect("catalog should load");

    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["lite", "mid", "pro"]);
}

#[tokio::test]
async fn load_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(header("user-agent", "shopfront-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = test_client()
        .load(&url_source(&server))
        .await
        .expect("catalog should load");
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn load_from_file_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("products.json");
    let mut file = std::fs::File::create(&file_path).expect("create fixture");
    let body = json!([product_json("b", &[900]), product_json("a", &[300])]);
    file.write_all(body.to_string().as_bytes())
        .expect("write fixture");

    let source = CatalogSource::parse(file_path.to_str().expect("utf-8 path")).expect("path");
    let catalog = test_client().load(&source).await.expect("catalog should load");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.products()[0].name, "a");
}

#[tokio::test]
async fn load_bundled_sample_catalog() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json");
    let catalog = test_client()
        .load(&CatalogSource::File(path))
        .await
        .expect("sample catalog should load");

    let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Pixel Lite 8", "Nimbus 12", "Aurora X5 Pro", "Terra Fold"]
    );
    // Tied minimums resolve to the first listed variant.
    let pixel = &catalog.products()[0];
    assert_eq!(
        pixel.cheapest_variant().map(|v| v.color.as_str()),
        Some("Coral")
    );
}

// ---------------------------------------------------------------------------
// Failure paths: the whole catalog is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_returns_not_found_on_404() {
    let server = serve(ResponseTemplate::new(404)).await;
    let err = test_client().load(&url_source(&server)).await.unwrap_err();
    assert!(
        matches!(err, LoaderError::NotFound { .. }),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn load_returns_unexpected_status_on_500() {
    let server = serve(ResponseTemplate::new(500)).await;
    let err = test_client().load(&url_source(&server)).await.unwrap_err();
    assert!(
        matches!(err, LoaderError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn load_does_not_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client().load(&url_source(&server)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn load_returns_deserialize_error_on_malformed_body() {
    let server = serve(ResponseTemplate::new(200).set_body_string("not json")).await;
    let err = test_client().load(&url_source(&server)).await.unwrap_err();
    assert!(
        matches!(err, LoaderError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn load_rejects_catalog_with_variantless_product() {
    let body = json!([product_json("ok", &[500]), product_json("empty", &[])]);
    let server = serve(ResponseTemplate::new(200).set_body_json(&body)).await;

    let err = test_client().load(&url_source(&server)).await.unwrap_err();
    assert!(
        matches!(
            err,
            LoaderError::Catalog(CatalogError::NoVariants { ref product }) if product == "empty"
        ),
        "expected NoVariants(empty), got: {err:?}"
    );
}

#[tokio::test]
async fn load_returns_io_error_for_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = CatalogSource::File(dir.path().join("missing.json"));
    let err = test_client().load(&source).await.unwrap_err();
    assert!(
        matches!(err, LoaderError::Io { .. }),
        "expected Io, got: {err:?}"
    );
}
