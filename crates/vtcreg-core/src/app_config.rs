use std::net::SocketAddr;

/// Public root of the VTC operator registry.
pub const DEFAULT_REGISTRY_BASE_URL: &str =
    "https://registre-vtc.developpement-durable.gouv.fr/public";

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
    pub registry_base_url: String,
    /// Bound applied to every outbound registry request.
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
