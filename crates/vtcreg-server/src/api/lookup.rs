use axum::{
    extract::{Path, State},
    Extension, Json,
};
use vtcreg_core::LicenseeRecord;
use vtcreg_registry::RegistryError;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) async fn by_registration_number(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(input): Path<String>,
) -> Result<Json<LicenseeRecord>, ApiError> {
    state
        .registry
        .fetch_by_registration_number(&input)
        .await
        .map(Json)
        .map_err(|e| lookup_failed(&req_id, "registration_number", &e))
}

pub(super) async fn by_company_number(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(input): Path<String>,
) -> Result<Json<LicenseeRecord>, ApiError> {
    state
        .registry
        .fetch_by_company_number(&input)
        .await
        .map(Json)
        .map_err(|e| lookup_failed(&req_id, "company_number", &e))
}

pub(super) async fn by_record_id(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(input): Path<String>,
) -> Result<Json<LicenseeRecord>, ApiError> {
    let record_id = input
        .parse::<u64>()
        .map_err(|e| ApiError::new(format!("invalid record id \"{input}\": {e}")))?;

    state
        .registry
        .fetch_by_record_id(record_id)
        .await
        .map(Json)
        .map_err(|e| lookup_failed(&req_id, "record_id", &e))
}

fn lookup_failed(req_id: &RequestId, lookup: &'static str, error: &RegistryError) -> ApiError {
    match error {
        RegistryError::NotFound => {
            tracing::debug!(
                request_id = %req_id.0,
                lookup,
                "registry lookup found nothing"
            );
        }
        _ => {
            tracing::warn!(
                request_id = %req_id.0,
                lookup,
                error = %error,
                "registry lookup failed"
            );
        }
    }
    ApiError::new(error.to_string())
}
