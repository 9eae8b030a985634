//! Pagination and truncation against a stubbed SerpApi.

mod common;

use common::*;
use localrank_core::domains::rankings::{AggregatorConfig, SerpType};
use localrank_core::kernel::SerpError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn ten_pages_yield_ninety_five_positions() {
    let server = MockServer::start().await;
    for page in 0..9u32 {
        mount_page(&server, page * 10, organic_page(page as usize * 10, 10)).await;
    }
    mount_page(&server, 90, organic_page(90, 5)).await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator.collect("plumber", Some("Miami, FL")).await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 10);
    assert_eq!(collected.results.len(), 95);
    assert_eq!(collected.pages_fetched, 10);
    assert!(collected.upstream_failure.is_none());

    let positions: Vec<u32> = collected.results.iter().map(|r| r.position).collect();
    assert_eq!(positions, (1..=95).collect::<Vec<_>>());
    assert_eq!(collected.results[94].url, "https://site95.example");
}

#[tokio::test]
async fn organic_position_thirteen_is_on_page_two() {
    let server = MockServer::start().await;
    mount_page(&server, 0, organic_page(0, 10)).await;
    mount_page(&server, 10, organic_page(10, 4)).await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator.collect("plumber", None).await.unwrap();

    let thirteenth = &collected.results[12];
    assert_eq!(thirteenth.position, 13);
    assert_eq!(thirteenth.serp_type, SerpType::Organic);
    assert_eq!(thirteenth.page, 2);
}

#[tokio::test]
async fn first_page_server_error_gives_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator.collect("plumber", None).await.unwrap();

    assert!(collected.results.is_empty());
    let failure = collected.rejected_outright().unwrap();
    assert_eq!(failure.status, 500);
    assert_eq!(failure.body, "internal");
}

#[tokio::test]
async fn failure_after_two_pages_keeps_what_was_collected() {
    let server = MockServer::start().await;
    mount_page(&server, 0, organic_page(0, 10)).await;
    mount_page(&server, 10, organic_page(10, 10)).await;
    mount_failure(&server, 20, 503, "try later").await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator.collect("plumber", None).await.unwrap();

    assert_eq!(collected.results.len(), 20);
    assert!(collected.rejected_outright().is_none());
    assert_eq!(collected.upstream_failure.unwrap().page_index, 2);
}

#[tokio::test]
async fn location_is_sent_normalized_with_country_hints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "emergency plumber"))
        .and(query_param("location", "Miami, Florida, United States"))
        .and(query_param("hl", "en"))
        .and(query_param("gl", "us"))
        .and(query_param("engine", "google"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic_page(0, 3)))
        .expect(1)
        .mount(&server)
        .await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator
        .collect("emergency plumber", Some("Miami, FL"))
        .await
        .unwrap();

    assert_eq!(collected.results.len(), 3);
}

#[tokio::test]
async fn local_pack_counts_toward_a_full_page_and_stays_on_page_one() {
    let server = MockServer::start().await;
    let mut first = organic_page(0, 7);
    first["local_results"] = json!({
        "places": [
            { "title": "Pack A", "website": "https://pack-a.example" },
            { "title": "Pack B", "link": "https://pack-b.example" },
            { "title": "Pack C", "address": "3 Bay Rd" }
        ]
    });
    mount_page(&server, 0, first).await;

    let mut second = organic_page(7, 2);
    second["local_results"] = json!([{ "title": "Pack D", "website": "https://pack-d.example" }]);
    mount_page(&server, 10, second).await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let collected = aggregator.collect("plumber", None).await.unwrap();

    // 7 + 3 fills the first page, 2 + 1 on the second ends the run.
    assert_eq!(collected.results.len(), 13);

    let pack_d = collected.results.last().unwrap();
    assert_eq!(pack_d.serp_type, SerpType::Maps);
    assert_eq!(pack_d.position, 13);
    assert_eq!(pack_d.page, 1);

    let pack_c = &collected.results[9];
    assert_eq!(pack_c.url, "");
    assert_eq!(pack_c.snippet.as_deref(), Some("3 Bay Rd"));
}

#[tokio::test]
async fn single_shot_mode_requests_twenty_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("num", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic_page(0, 20)))
        .expect(1)
        .mount(&server)
        .await;

    let aggregator = aggregator_for(&server, AggregatorConfig::single_shot());
    let collected = aggregator.collect("plumber", None).await.unwrap();

    assert_eq!(collected.results.len(), 20);
    assert_eq!(collected.search_metadata.unwrap().id.as_deref(), Some("search-1"));
}

#[tokio::test]
async fn unreachable_provider_is_an_error() {
    let client = localrank_core::kernel::SerpApiClient::with_base_url(
        "test-key".to_string(),
        "http://127.0.0.1:1",
    )
    .unwrap();
    let aggregator = localrank_core::domains::rankings::RankingAggregator::new(
        std::sync::Arc::new(client),
        AggregatorConfig::paginated(),
    );

    let result = aggregator.collect("plumber", None).await;

    assert!(matches!(result, Err(SerpError::Http(_))));
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let aggregator = aggregator_for(&server, AggregatorConfig::paginated());
    let result = aggregator.collect("plumber", None).await;

    assert!(matches!(result, Err(SerpError::Decode(_))));
}
