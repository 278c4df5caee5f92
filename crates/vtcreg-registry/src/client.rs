//! HTTP client for the public VTC operator registry.
//!
//! Each lookup sends exactly one request and runs the returned page through
//! [`extract_label_map`] and [`map_record`]. There is no retry, no
//! pagination and no caching: a lookup either yields the single record on
//! the page or fails.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use vtcreg_core::{AppConfig, LicenseeRecord, DEFAULT_REGISTRY_BASE_URL};

use crate::criteria::SearchCriteria;
use crate::error::RegistryError;
use crate::extract::extract_label_map;
use crate::mapper::map_record;

const DETAILS_PATH: &str = "rechercheExploitant.exploitantDetails.action";
const ADVANCED_SEARCH_PATH: &str = "rechercheExploitant.avancee.action";

/// Client for the registry's detail and advanced-search pages.
///
/// Holds no per-query state, so one instance can serve concurrent lookups.
/// Use [`RegistryClient::new`] for production or
/// [`RegistryClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    base_url: Url,
}

impl RegistryClient {
    /// Creates a client pointed at the public registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, RegistryError> {
        Self::with_base_url(DEFAULT_REGISTRY_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`RegistryClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, RegistryError> {
        Self::with_base_url(
            &config.registry_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with a custom base URL.
    ///
    /// `timeout_secs` bounds every request; the registry itself imposes none.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RegistryError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RegistryError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RegistryError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Fetches the detail page of the registry entry with internal id `record_id`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] on any status other than 200 or a page without a
    ///   SIREN number.
    /// - [`RegistryError::Http`] on network failure.
    /// - [`RegistryError::Parse`] if the page cannot be processed.
    pub async fn fetch_by_record_id(
        &self,
        record_id: u64,
    ) -> Result<LicenseeRecord, RegistryError> {
        let url = self.details_url(record_id);
        tracing::debug!(%url, record_id, "fetching registry detail page");

        let response = self.client.get(url).send().await?;
        Self::read_record(response).await
    }

    /// Submits the advanced-search form and reads the single result page.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryClient::fetch_by_record_id`].
    pub async fn fetch_by_advanced_search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<LicenseeRecord, RegistryError> {
        let url = self.endpoint(ADVANCED_SEARCH_PATH);
        tracing::debug!(%url, ?criteria, "submitting registry advanced search");

        let response = self
            .client
            .post(url)
            .form(&criteria.form_fields())
            .send()
            .await?;
        Self::read_record(response).await
    }

    /// Looks up a licensee by SIREN number.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryClient::fetch_by_advanced_search`].
    pub async fn fetch_by_company_number(
        &self,
        company_number: &str,
    ) -> Result<LicenseeRecord, RegistryError> {
        self.fetch_by_advanced_search(&SearchCriteria::by_company_number(company_number))
            .await
    }

    /// Looks up a licensee by registry registration number.
    ///
    /// # Errors
    ///
    /// Same as [`RegistryClient::fetch_by_advanced_search`].
    pub async fn fetch_by_registration_number(
        &self,
        registration_number: &str,
    ) -> Result<LicenseeRecord, RegistryError> {
        self.fetch_by_advanced_search(&SearchCriteria::by_registration_number(
            registration_number,
        ))
        .await
    }

    fn details_url(&self, record_id: u64) -> Url {
        let mut url = self.endpoint(DETAILS_PATH);
        url.query_pairs_mut()
            .append_pair("dossier.id", &record_id.to_string());
        url
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        // `with_base_url` rejected cannot-be-a-base URLs, so this always applies.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url
    }

    /// Turns a registry response into a record.
    ///
    /// Only a 200 carries a record; the body of any other response is never
    /// read or parsed.
    async fn read_record(response: Response) -> Result<LicenseeRecord, RegistryError> {
        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(
                %status,
                url = %response.url(),
                "registry returned non-200 status"
            );
            return Err(RegistryError::NotFound);
        }

        let body = response.text().await?;
        let labels = extract_label_map(&body)?;
        map_record(&labels)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
