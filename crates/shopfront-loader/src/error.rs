use std::path::PathBuf;

use shopfront_core::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog source \"{raw}\": {reason}")]
    InvalidSource { raw: String, reason: String },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}
