//! Domain types and configuration shared by the VTC registry crates.

mod app_config;
mod config;
pub mod record;
pub mod vocab;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, DEFAULT_REGISTRY_BASE_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use record::{
    Address, CompanyPayload, IndividualPayload, LegalEntity, LicenseeRecord, PersonName,
};
pub use vocab::{BusinessEntityType, LegalEntityKind, PersonTitle, Vocabulary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
