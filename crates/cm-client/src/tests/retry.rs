use crate::tests::{client_for, fast_retry};
use crate::{
    ClientError, MAX_RETRY_AFTER, ManagementApi, RetryDecision, Retryable, parse_retry_after,
    with_retry,
};

use cm_config::RetryConfig;

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tokio::time::timeout;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_error(status: u16) -> ClientError {
    ClientError::api_error(status, "0".to_string(), "failure".to_string())
}

#[test]
fn given_rate_limit_or_server_error_when_decided_then_backoff() {
    assert_that!(api_error(429).retry_decision(), eq(RetryDecision::Backoff));
    assert_that!(api_error(500).retry_decision(), eq(RetryDecision::Backoff));
    assert_that!(api_error(503).retry_decision(), eq(RetryDecision::Backoff));
}

#[test]
fn given_client_error_status_when_decided_then_stop() {
    assert_that!(api_error(400).retry_decision(), eq(RetryDecision::Stop));
    assert_that!(api_error(404).retry_decision(), eq(RetryDecision::Stop));
}

#[test]
fn given_rate_limit_with_retry_after_when_decided_then_waits_as_asked() {
    // Given
    let asked = api_error(429).with_retry_after(Some(Duration::from_secs(2)));
    let excessive = api_error(429).with_retry_after(Some(Duration::from_secs(3600)));
    let server_error = api_error(503).with_retry_after(Some(Duration::from_secs(2)));

    // Then
    assert_that!(
        asked.retry_decision(),
        eq(RetryDecision::After(Duration::from_secs(2)))
    );
    assert_that!(
        excessive.retry_decision(),
        eq(RetryDecision::After(MAX_RETRY_AFTER))
    );
    assert_that!(server_error.retry_decision(), eq(RetryDecision::Backoff));
}

#[test]
fn given_retry_after_header_values_when_parsed_then_only_seconds_accepted() {
    assert_that!(parse_retry_after(" 7 "), some(eq(Duration::from_secs(7))));
    assert_that!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), none());
}

#[tokio::test]
async fn given_transient_failures_when_with_retry_then_succeeds_on_third_attempt() {
    // Given
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    // When
    let result = with_retry(&fast_retry(3), "flaky", move || async move {
        let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt < 3 {
            Err(api_error(503))
        } else {
            Ok(attempt)
        }
    })
    .await;

    // Then
    assert_that!(result.unwrap(), eq(3));
    assert_that!(attempts.load(Ordering::SeqCst), eq(3));
}

#[tokio::test]
async fn given_permanent_failure_when_with_retry_then_single_attempt() {
    // Given
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    // When
    let result: Result<(), ClientError> = with_retry(&fast_retry(5), "rejected", move || async move {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(api_error(400))
    })
    .await;

    // Then
    assert!(result.is_err());
    assert_that!(attempts.load(Ordering::SeqCst), eq(1));
}

#[tokio::test]
async fn given_persistent_server_error_when_with_retry_then_gives_up_after_max_attempts() {
    // Given
    let counter = AtomicU32::new(0);
    let attempts = &counter;

    // When
    let result: Result<(), ClientError> = with_retry(&fast_retry(4), "down", move || async move {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(api_error(500))
    })
    .await;

    // Then
    assert!(result.is_err());
    assert_that!(attempts.load(Ordering::SeqCst), eq(4));
}

#[tokio::test]
async fn given_service_unavailable_once_when_list_collections_then_retried() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/env-1/collections"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/env-1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collections": [{"id": "c1", "name": "Default", "codename": "default"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server.uri(), fast_retry(3));

    // When
    let collections = client.list_collections().await.unwrap();

    // Then
    assert_that!(collections.len(), eq(1));
    assert_that!(collections[0].codename.as_str(), eq("default"));
}

#[tokio::test]
async fn given_rate_limit_with_retry_after_when_list_collections_then_header_delay_used() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/env-1/collections"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/env-1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collections": [{"id": "c1", "name": "Default", "codename": "default"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let slow_backoff = RetryConfig {
        initial_delay_ms: 10_000,
        max_delay_secs: 60,
        ..fast_retry(2)
    };
    let client = client_for(&server.uri(), slow_backoff);

    // When
    let collections = timeout(Duration::from_secs(5), client.list_collections())
        .await
        .expect("Retry-After should replace the 10s backoff")
        .unwrap();

    // Then
    assert_that!(collections.len(), eq(1));
}
