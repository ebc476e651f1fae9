//! Language resolution against a mocked profile service.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fintrack_bot::i18n::Lang;
use fintrack_bot::profile::ProfileClient;
use fintrack_bot::resolver::LanguageResolver;

const USER_ID: i64 = 987654321;

fn user_path() -> String {
    format!("/api/v1/users/telegram/{USER_ID}")
}

fn resolver_for(server: &MockServer) -> LanguageResolver {
    let client = ProfileClient::new(&server.uri(), Duration::from_secs(2));
    LanguageResolver::new(Arc::new(client))
}

#[tokio::test]
async fn stored_language_wins_and_triggers_no_write() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "language_code": "ru" })))
        .mount(&server)
        .await;
    // A stored language must never be overwritten by detection.
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);

    // The hint disagrees with the store; the store wins.
    assert_eq!(resolver.resolve(USER_ID, Some("en")).await, Lang::Ru);
    assert_eq!(resolver.resolve(USER_ID, None).await, Lang::Ru);
}

#[tokio::test]
async fn absent_language_is_detected_and_persisted_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "language_code": null })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .and(body_json(serde_json::json!({ "language_code": "ru" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    assert_eq!(resolver.resolve(USER_ID, Some("ru")).await, Lang::Ru);
}

#[tokio::test]
async fn dialect_hints_collapse_to_english() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .and(body_json(serde_json::json!({ "language_code": "en" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);

    // "ru-RU" is not an exact "ru"; detection is deliberately coarse.
    assert_eq!(resolver.resolve(USER_ID, Some("ru-RU")).await, Lang::En);
}

#[tokio::test]
async fn unsupported_stored_code_falls_back_to_detection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "language_code": "de" })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .and(body_json(serde_json::json!({ "language_code": "ru" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    assert_eq!(resolver.resolve(USER_ID, Some("ru")).await, Lang::Ru);
}

#[tokio::test]
async fn profile_service_down_still_yields_a_language() {
    // Nothing is listening here; both the fetch and the best-effort store
    // fail, and the response language comes from the hint alone.
    let client = ProfileClient::new("http://127.0.0.1:9", Duration::from_millis(200));
    let resolver = LanguageResolver::new(Arc::new(client));

    assert_eq!(resolver.resolve(USER_ID, Some("ru")).await, Lang::Ru);
    assert_eq!(resolver.resolve(USER_ID, Some("fr")).await, Lang::En);
}

#[tokio::test]
async fn store_failure_is_swallowed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "language_code": null })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    // The write failed but the derived language still drives this response.
    assert_eq!(resolver.resolve(USER_ID, Some("ru")).await, Lang::Ru);
}

#[tokio::test]
async fn malformed_profile_body_is_treated_as_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    assert_eq!(resolver.resolve(USER_ID, None).await, Lang::En);
}

#[tokio::test]
async fn explicit_choice_writes_the_requested_code() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .and(body_json(serde_json::json!({ "language_code": "en" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    assert!(resolver.set_language(USER_ID, Lang::En).await);
}

#[tokio::test]
async fn explicit_choice_reports_store_failure() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(user_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    assert!(!resolver.set_language(USER_ID, Lang::Ru).await);
}
