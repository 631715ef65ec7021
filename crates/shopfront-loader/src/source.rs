use std::fmt;
use std::path::PathBuf;

use crate::error::LoaderError;

/// Where the product collection is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A statically served document fetched over HTTP(S).
    Url(String),
    /// A document on the local filesystem.
    File(PathBuf),
}

impl CatalogSource {
    /// Interprets `raw` as a URL when it has an `http://` or `https://`
    /// scheme, otherwise as a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`LoaderError::InvalidSource`] if `raw` is blank or looks like
    /// a URL but does not parse as one.
    pub fn parse(raw: &str) -> Result<Self, LoaderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoaderError::InvalidSource {
                raw: raw.to_owned(),
                reason: "source is empty".to_owned(),
            });
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = reqwest::Url::parse(trimmed).map_err(|e| LoaderError::InvalidSource {
                raw: raw.to_owned(),
                reason: e.to_string(),
            })?;
            return Ok(Self::Url(url.to_string()));
        }

        Ok(Self::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
