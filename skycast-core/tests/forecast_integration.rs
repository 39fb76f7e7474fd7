//! Integration tests for the fetch-and-parse pipeline against a mock
//! forecast endpoint.

use skycast_core::{FetchError, ForecastClient, WeatherError, WeatherIcon};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_forecast() -> serde_json::Value {
    serde_json::json!({
        "latitude": 37.8267,
        "longitude": -122.4233,
        "timezone": "America/Los_Angeles",
        "currently": {
            "time": 1_609_459_200,
            "summary": "Partly Cloudy",
            "icon": "partly-cloudy-day",
            "precipProbability": 0.25,
            "temperature": 57.3,
            "humidity": 0.88,
            "windSpeed": 5.06
        }
    })
}

fn client_for(server: &MockServer) -> ForecastClient {
    ForecastClient::with_base_url("test-key".to_string(), server.uri())
}

#[tokio::test]
async fn successful_fetch_yields_a_snapshot() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast/test-key/37.8267,-122.4233"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let snapshot = client
        .current_conditions(37.8267, -122.4233)
        .await
        .expect("pipeline must succeed");

    assert_eq!(snapshot.temperature(), 57.3);
    assert_eq!(snapshot.humidity(), 0.88);
    assert_eq!(snapshot.precip_percent(), 25.0);
    assert_eq!(snapshot.icon(), WeatherIcon::PartlyCloudyDay);
    assert_eq!(snapshot.summary(), "Partly Cloudy");
    assert_eq!(snapshot.formatted_time(), "4:00 PM");
}

#[tokio::test]
async fn fetch_raw_returns_the_body_untouched() {
    let server = MockServer::start().await;
    let body = sample_forecast().to_string();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let raw = client.fetch_raw(37.8267, -122.4233).await.expect("fetch must succeed");

    assert_eq!(raw, body);
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.current_conditions(37.8267, -122.4233).await.unwrap_err();

    match err {
        WeatherError::Fetch(FetchError::Status { status, body }) => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "permission denied");
        }
        other => panic!("expected a status fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Bind to grab a free port, then drop the listener so nothing answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ForecastClient::with_base_url("test-key".to_string(), format!("http://{addr}"));
    let err = client.current_conditions(37.8267, -122.4233).await.unwrap_err();

    assert!(matches!(err, WeatherError::Fetch(FetchError::Network(_))));
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"timezone\": \"Amer"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.current_conditions(37.8267, -122.4233).await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
}
