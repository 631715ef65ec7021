pub mod client;
pub mod error;
pub mod source;

pub use client::CatalogClient;
pub use error::LoaderError;
pub use source::CatalogSource;
