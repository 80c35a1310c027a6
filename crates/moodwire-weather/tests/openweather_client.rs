//! Integration tests for `OpenWeatherClient` and `IpApiLocator` using wiremock HTTP mocks.

use moodwire_core::{Coordinates, TemperatureUnit};
use moodwire_weather::{
    IpApiLocator, LocationError, LocationProvider, OpenWeatherClient, WeatherError,
    WeatherProvider,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KOLKATA: Coordinates = Coordinates {
    latitude: 22.57,
    longitude: 88.36,
};

fn test_client(base_url: &str) -> OpenWeatherClient {
    OpenWeatherClient::with_base_url("owm-test", 5, "moodwire-test/0.1", base_url)
        .expect("failed to build test OpenWeatherClient")
}

fn weather_json(temp: f64) -> serde_json::Value {
    json!({
        "weather": [{ "id": 721, "main": "Haze", "description": "haze", "icon": "50d" }],
        "main": { "temp": temp, "feels_like": temp + 2.0, "temp_min": temp - 1.0,
                  "temp_max": temp + 1.0, "pressure": 1004, "humidity": 70 },
        "wind": { "speed": 2.6 },
        "dt": 1_720_000_000,
        "name": "Kolkata"
    })
}

#[tokio::test]
async fn current_weather_sends_coordinates_key_and_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "22.57"))
        .and(query_param("lon", "88.36"))
        .and(query_param("appid", "owm-test"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_json(33.4)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let weather = client
        .current_weather(KOLKATA, TemperatureUnit::Celsius)
        .await
        .expect("should parse weather");

    assert_eq!(weather.name, "Kolkata");
    assert!((weather.main.temp - 33.4).abs() < f64::EPSILON);
    assert_eq!(weather.summary(), Some("haze"));
}

#[tokio::test]
async fn forecast_requests_imperial_units_for_fahrenheit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [
                { "dt": 1_720_000_000, "main": { "temp": 91.2 }, "weather": [] },
                { "dt": 1_720_010_800, "main": { "temp": 88.0 }, "weather": [] }
            ],
            "city": { "name": "Kolkata", "country": "IN" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let forecast = client
        .forecast(KOLKATA, TemperatureUnit::Fahrenheit)
        .await
        .expect("should parse forecast");

    assert_eq!(forecast.list.len(), 2);
    assert_eq!(forecast.city.name, "Kolkata");
}

#[tokio::test]
async fn unauthorized_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .current_weather(KOLKATA, TemperatureUnit::Celsius)
        .await
        .expect_err("401 should fail");

    assert!(
        matches!(err, WeatherError::UnexpectedStatus { status: 401, ref endpoint } if endpoint == "weather"),
        "expected UnexpectedStatus, got: {err:?}"
    );
}

#[tokio::test]
async fn body_without_temperature_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Kolkata" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .current_weather(KOLKATA, TemperatureUnit::Celsius)
        .await
        .expect_err("missing main should fail");

    assert!(matches!(err, WeatherError::Deserialize { .. }));
}

#[tokio::test]
async fn ip_api_success_yields_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "city": "Pune",
            "lat": 18.52,
            "lon": 73.85
        })))
        .mount(&server)
        .await;

    let locator = IpApiLocator::with_url(5, "moodwire-test/0.1", &format!("{}/json", server.uri()))
        .expect("locator");
    let coords = locator.current_location().await.expect("should locate");

    assert!((coords.latitude - 18.52).abs() < f64::EPSILON);
    assert!((coords.longitude - 73.85).abs() < f64::EPSILON);
}

#[tokio::test]
async fn ip_api_fail_status_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "reserved range"
        })))
        .mount(&server)
        .await;

    let locator = IpApiLocator::with_url(5, "moodwire-test/0.1", &format!("{}/json", server.uri()))
        .expect("locator");
    let err = locator.current_location().await.expect_err("fail status");

    assert!(
        matches!(err, LocationError::Unavailable(ref msg) if msg == "reserved range"),
        "expected Unavailable, got: {err:?}"
    );
}

#[tokio::test]
async fn transport_error_does_not_reveal_api_key() {
    let client = OpenWeatherClient::with_base_url(
        "SECRET-OWM-KEY",
        2,
        "moodwire-test/0.1",
        "http://127.0.0.1:1/data/2.5",
    )
    .expect("client should build");

    let err = client
        .get_current_weather(KOLKATA, TemperatureUnit::Celsius)
        .await
        .expect_err("nothing listens on port 1");
    assert!(matches!(err, WeatherError::Http(_)), "got: {err:?}");

    let mut current: Option<&dyn std::error::Error> = Some(&err);
    while let Some(e) = current {
        assert!(
            !e.to_string().contains("SECRET-OWM-KEY"),
            "api key leaked in error: {e}"
        );
        current = e.source();
    }
    assert!(!format!("{err:?}").contains("SECRET-OWM-KEY"));
}
