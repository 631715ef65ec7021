use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Where the product collection comes from: an `http(s)://` URL or a file path.
    pub catalog_source: String,
    /// Literal prefix for displayed prices, e.g. `"₱"`.
    pub currency_prefix: String,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
}
