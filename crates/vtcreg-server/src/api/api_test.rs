use super::*;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDIVIDUAL_PAGE: &str = r#"<html><body>
  <div><label class="cLabel">Numéro SIREN</label>123456789</div>
  <div><label class="cLabel">Numéro d'inscription</label>EVTC069190007</div>
  <div><label class="cLabel">Statut</label>Personne physique</div>
  <div><label class="cLabel">Civilité</label>Mme</div>
  <div><label class="cLabel">Nom d'usage</label>Dupont</div>
  <div><label class="cLabel">Prénom principal</label>Claire</div>
  <div><label class="cLabel">Valide jusqu'au</label>01/01/2026</div>
</body></html>"#;

fn app_for(server: &MockServer) -> Router {
    let registry = RegistryClient::with_base_url(&server.uri(), 5, "vtcreg-test/0.1")
        .expect("client construction should not fail");
    build_app(AppState { registry })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let request_id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, request_id, json)
}

#[test]
fn api_error_maps_to_bad_request() {
    let response = ApiError::new("not found").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start().await;
    let (status, request_id, json) = get_json(app_for(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(request_id.is_some(), "x-request-id should be set");
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn company_number_route_returns_record_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rechercheExploitant.avancee.action"))
        .and(body_string_contains("rechercheCriteres.numeroSiren=123456789"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(INDIVIDUAL_PAGE, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, json) = get_json(app_for(&server), "/company_number/123456789").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["legal_entity_type"], "INDIVIDUAL");
    assert_eq!(json["company_number"], "123456789");
    assert_eq!(json["registration_number"], "EVTC069190007");
    assert_eq!(json["expiration_date"], "2026-01-01");
    assert_eq!(json["individual"]["title"], "MRS");
    assert_eq!(json["individual"]["name"]["first_name"], "Claire");
    assert_eq!(json["individual"]["name"]["last_name"], "Dupont");
    assert!(json.get("company").is_none());
}

#[tokio::test]
async fn registration_number_route_reports_not_found_as_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rechercheExploitant.avancee.action"))
        .and(body_string_contains(
            "rechercheCriteres.numeroInscription=EVTC000000000",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, json) =
        get_json(app_for(&server), "/registration_number/EVTC000000000").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "message": "not found" }));
}

#[tokio::test]
async fn record_route_fetches_detail_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rechercheExploitant.exploitantDetails.action"))
        .and(query_param("dossier.id", "77"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(INDIVIDUAL_PAGE, "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, _, json) = get_json(app_for(&server), "/record/77").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["company_number"], "123456789");
}

#[tokio::test]
async fn record_route_rejects_non_numeric_id() {
    let server = MockServer::start().await;

    let (status, _, json) = get_json(app_for(&server), "/record/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["message"].as_str().expect("message string");
    assert!(message.starts_with("invalid record id \"abc\""), "{message}");
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let server = MockServer::start().await;
    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "req-123")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(
        response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
}
