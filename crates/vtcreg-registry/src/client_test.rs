use super::*;

fn test_client(base_url: &str) -> RegistryClient {
    RegistryClient::with_base_url(base_url, 30, "vtcreg-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn details_url_keeps_base_path() {
    let client = test_client(DEFAULT_REGISTRY_BASE_URL);
    assert_eq!(
        client.details_url(4242).as_str(),
        "https://registre-vtc.developpement-durable.gouv.fr/public/rechercheExploitant.exploitantDetails.action?dossier.id=4242"
    );
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let client = test_client("https://registre.example/public/");
    assert_eq!(
        client.endpoint(ADVANCED_SEARCH_PATH).as_str(),
        "https://registre.example/public/rechercheExploitant.avancee.action"
    );
}

#[test]
fn endpoint_on_bare_host() {
    let client = test_client("http://127.0.0.1:8081");
    assert_eq!(
        client.endpoint(ADVANCED_SEARCH_PATH).as_str(),
        "http://127.0.0.1:8081/rechercheExploitant.avancee.action"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = RegistryClient::with_base_url("not a url", 30, "vtcreg-test/0.1");
    assert!(
        matches!(result, Err(RegistryError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got: {result:?}"
    );
}

#[test]
fn with_base_url_rejects_non_base_scheme() {
    let result = RegistryClient::with_base_url("mailto:registre@example.org", 30, "ua");
    assert!(
        matches!(result, Err(RegistryError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got: {result:?}"
    );
}
