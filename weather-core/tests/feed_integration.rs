//! Integration tests for FeedProvider using wiremock.
//!
//! These tests run the full fetch, parse and assemble path against a mock feed.

use std::sync::{Arc, Mutex};

use weather_feed_core::{
    Config, FeedProvider, WeatherError, WeatherProvider, WeatherRequest, WeatherSnapshot,
    fetch_weather, provider_from_config,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAN_FRANCISCO: &str = include_str!("fixtures/san_francisco.xml");
const MISSING_CURRENT: &str = include_str!("fixtures/missing_current.xml");

fn provider_for(server: &MockServer) -> FeedProvider {
    let cfg = Config { endpoint: format!("{}/ig/api", server.uri()), ..Config::default() };
    provider_from_config(&cfg).unwrap()
}

async fn mount_feed(server: &MockServer, location: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/ig/api"))
        .and(query_param("weather", location))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/xml")
                .set_body_string(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

type Outcome = Arc<Mutex<Vec<Result<WeatherSnapshot, WeatherError>>>>;

async fn run_fetch(
    provider: FeedProvider,
    location: &str,
) -> Vec<Result<WeatherSnapshot, WeatherError>> {
    let outcome: Outcome = Arc::new(Mutex::new(Vec::new()));
    let (ok, err) = (outcome.clone(), outcome.clone());

    fetch_weather(
        Arc::new(provider),
        location,
        move |snapshot| ok.lock().unwrap().push(Ok(snapshot)),
        move |failure| err.lock().unwrap().push(Err(failure)),
    )
    .await
    .unwrap();

    let mut settled = outcome.lock().unwrap();
    std::mem::take(&mut *settled)
}

#[tokio::test]
async fn test_fetch_weather_success() {
    let server = MockServer::start().await;
    mount_feed(&server, "San Francisco", 200, SAN_FRANCISCO).await;

    let mut outcome = run_fetch(provider_for(&server), "San Francisco").await;

    assert_eq!(outcome.len(), 1);
    let snapshot = outcome.pop().unwrap().unwrap();
    assert_eq!(snapshot.forecast_info().city(), Some("San Francisco, CA"));
    assert_eq!(snapshot.current_conditions().icon(), Some("resources/mostly_cloudy.gif"));
    assert_eq!(snapshot.forecast_conditions().len(), 3);
    assert_eq!(snapshot.forecast_conditions()[0].get("day_of_week"), Some("Tue"));
    assert_eq!(snapshot.forecast_conditions()[2].get("day_of_week"), Some("Thu"));
}

#[tokio::test]
async fn test_location_query_decodes_to_input() {
    let server = MockServer::start().await;
    mount_feed(&server, "Washington DC", 200, SAN_FRANCISCO).await;

    let provider = provider_for(&server);
    let result = provider.get_weather(&WeatherRequest::new("Washington DC")).await;
    assert!(result.is_ok(), "unexpected failure: {result:?}");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<_> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(pairs, [("weather".to_string(), "Washington DC".to_string())]);
}

#[tokio::test]
async fn test_missing_section_reaches_on_failure() {
    let server = MockServer::start().await;
    mount_feed(&server, "Montreal", 200, MISSING_CURRENT).await;

    let outcome = run_fetch(provider_for(&server), "Montreal").await;

    assert_eq!(outcome.len(), 1);
    assert!(matches!(
        &outcome[0],
        Err(WeatherError::MissingSection(section)) if section == "current_conditions"
    ));
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let server = MockServer::start().await;
    mount_feed(&server, "Boston", 500, "Internal Server Error").await;

    let outcome = run_fetch(provider_for(&server), "Boston").await;

    assert_eq!(outcome.len(), 1);
    match &outcome[0] {
        Err(WeatherError::Transport(msg)) => {
            assert!(msg.contains("500"), "message should mention status: {msg}")
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_failure() {
    let server = MockServer::start().await;
    mount_feed(&server, "Tampa", 200, "<xml_api_reply><weather></xml_api_reply>").await;

    let outcome = run_fetch(provider_for(&server), "Tampa").await;

    assert_eq!(outcome.len(), 1);
    assert!(matches!(outcome[0], Err(WeatherError::Parse(_))));
}

#[tokio::test]
async fn test_malformed_icon_fails_whole_fetch() {
    let server = MockServer::start().await;
    let body = SAN_FRANCISCO.replace("/ig/images/weather/rain.gif", "/ig/images/weather/rain.png");
    mount_feed(&server, "Houston", 200, &body).await;

    let outcome = run_fetch(provider_for(&server), "Houston").await;

    assert_eq!(outcome.len(), 1);
    assert!(matches!(
        &outcome[0],
        Err(WeatherError::MalformedIconReference(raw)) if raw.ends_with("rain.png")
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_failure() {
    let server = MockServer::start().await;
    let provider = provider_for(&server);
    drop(server);

    let outcome = run_fetch(provider, "Miami").await;

    assert_eq!(outcome.len(), 1);
    assert!(matches!(outcome[0], Err(WeatherError::Transport(_))));
}

#[tokio::test]
async fn test_deeply_nested_body_is_parse_failure() {
    let server = MockServer::start().await;
    let depth = 20_000;
    let body = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
    mount_feed(&server, "Los Angeles", 200, &body).await;

    let outcome = run_fetch(provider_for(&server), "Los Angeles").await;

    assert_eq!(outcome.len(), 1);
    assert!(matches!(outcome[0], Err(WeatherError::Parse(_))));
}
