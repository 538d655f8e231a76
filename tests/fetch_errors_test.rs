use anyhow::Result;
use country_fetch::core::fetcher::{fetch_countries, fetch_countries_blocking};
use country_fetch::core::orchestrator::run_concurrent;
use country_fetch::{BlockingHttpTransport, DemoConfig, DemoRunner, FetchError, HttpTransport, Offsets};
use httpmock::prelude::*;
use serde_json::json;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[test]
fn test_blocking_fetch_decodes_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/geo/countries")
            .query_param("offset", "0")
            .query_param("limit", "1");
        then.status(200).json_body(json!({
            "data": [{"code": "US", "currencyCodes": ["USD"], "name": "United States", "wikiDataId": "Q30"}]
        }));
    });

    let transport = BlockingHttpTransport::new(server.url("/v1"));
    let countries = fetch_countries_blocking(&transport, 0, 1).unwrap();

    mock.assert();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name, "United States");
    assert_eq!(countries[0].currency_codes, vec!["USD".to_string()]);
}

#[tokio::test]
async fn test_server_error_is_transport_error() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/geo/countries");
            then.status(500);
        })
        .await;

    let transport = HttpTransport::new(server.url("/v1"));
    let result = fetch_countries(&transport, 0, 1).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/geo/countries");
            then.status(200)
                .header("Content-Type", "text/html")
                .body("<html>maintenance</html>");
        })
        .await;

    let transport = HttpTransport::new(server.url("/v1"));
    match fetch_countries(&transport, 0, 1).await {
        Err(FetchError::Parse { url, .. }) => {
            assert!(url.ends_with("/v1/geo/countries?offset=0&limit=1"));
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_decode_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/geo/countries");
            then.status(200).json_body(json!({
                "data": [{"code": "US", "currencyCodes": ["USD"], "wikiDataId": "Q30"}]
            }));
        })
        .await;

    let transport = HttpTransport::new(server.url("/v1"));
    let result = fetch_countries(&transport, 0, 1).await;

    assert!(matches!(result, Err(FetchError::Decode { .. })));
    Ok(())
}

#[tokio::test]
async fn test_one_failing_page_fails_concurrent_batch() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/geo/countries")
                .query_param("offset", "1");
            then.status(503);
        })
        .await;
    for offset in [0, 2, 3] {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/geo/countries")
                    .query_param("offset", offset.to_string());
                then.status(200).json_body(json!({"data": []}));
            })
            .await;
    }

    let transport = Arc::new(HttpTransport::new(server.url("/v1")));
    let one = NonZeroUsize::new(1).unwrap();
    let four = NonZeroUsize::new(4).unwrap();
    let result = run_concurrent(transport, Offsets::new(4, one), four).await;

    let err = result.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(err.severity().exit_code(), 2);
    Ok(())
}

#[tokio::test]
async fn test_runner_propagates_sequential_failure() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/geo/countries");
            then.status(200).body("not json");
        })
        .await;

    let runner = DemoRunner::new(DemoConfig {
        api_root: server.url("/v1"),
        items_to_fetch: 2,
        ..DemoConfig::default()
    });
    let mut out = Vec::new();
    let result = runner.run(&mut out).await;

    assert!(matches!(result, Err(FetchError::Parse { .. })));
    assert!(out.is_empty());
    Ok(())
}
