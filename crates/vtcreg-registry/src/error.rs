use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Network, DNS, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The page or the label selector could not be processed.
    #[error("HTML parse error: {reason}")]
    Parse { reason: String },

    /// The registry answered with a status other than 200, or with a page that
    /// carries no SIREN number. The site renders both as plain HTML, so they
    /// are not told apart.
    #[error("not found")]
    NotFound,

    #[error("invalid registry base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
