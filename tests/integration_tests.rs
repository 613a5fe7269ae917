//! End-to-end tests for `WeatherService` against mocked providers

use serde_json::{Value, json};
use skycast::{SkycastConfig, WeatherResult, WeatherService};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing all three providers at the mock server
fn config_for(server: &MockServer) -> SkycastConfig {
    let mut config = SkycastConfig::default();
    config.providers.geocoding_url = format!("{}/v1/search", server.uri());
    config.providers.nominatim_url = server.uri();
    config.providers.forecast_url = format!("{}/v1/forecast", server.uri());
    config
}

fn service(server: &MockServer) -> WeatherService {
    WeatherService::from_config(&config_for(server)).unwrap()
}

fn forecast_body() -> Value {
    json!({
        "latitude": 48.86,
        "longitude": 2.34,
        "timezone": "Europe/Paris",
        "current": {
            "temperature_2m": 18.25,
            "relative_humidity_2m": 71,
            "apparent_temperature": 17.61,
            "precipitation": 0.0,
            "weather_code": 3,
            "surface_pressure": 1009.84,
            "wind_speed_10m": 7.42,
            "wind_direction_10m": 190,
            "is_day": 0
        },
        "daily": {
            "time": ["2024-08-07", "2024-08-08", "2024-08-09", "2024-08-10", "2024-08-11"],
            "weather_code": [3, 61, 80, 95, 0],
            "temperature_2m_max": [22.1, 19.96, 21.04, 25.3, 27.0],
            "temperature_2m_min": [14.2, 13.0, 12.55, 16.1, 17.9],
            "precipitation_sum": [0.0, 5.62, 1.1, 12.35, 0.0],
            "wind_speed_10m_max": [12.3, 20.16, 15.0, 31.74, 9.9]
        }
    })
}

async fn mount_forecast(server: &MockServer, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(forecast_body())
    } else {
        ResponseTemplate::new(status)
    };

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_empty_geocoding(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_city_name_resolves_and_forecasts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Paris", "latitude": 48.85, "longitude": 2.35, "country": "France"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let result = service(&server).resolve_weather("Paris").await;
    let report = result.report().expect("expected a weather report");

    assert_eq!(report.coordinates.lat(), 48.85);
    assert_eq!(report.coordinates.lon(), 2.35);
    assert_eq!(report.current.location, "Paris, France");
    assert_eq!(report.current.condition, "Overcast");
    assert_eq!(report.current.temperature_c, 18.3);
    assert!(!report.current.is_day);
    assert_eq!(report.forecast.len(), 5);
    assert!(report.forecast[0].label.starts_with("Today"));
    assert_eq!(report.forecast[1].condition, "Slight rain");
    assert_eq!(report.forecast[3].condition, "Thunderstorm");

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["coordinates"], json!({"lat": 48.85, "lon": 2.35}));
    assert_eq!(value["forecast"][1]["icon"], json!("🌧️"));
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn test_coordinates_without_reverse_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "Unable to geocode"})))
        .mount(&server)
        .await;
    mount_forecast(&server, 200).await;

    let result = service(&server).resolve_weather("40.7128,-74.0060").await;
    let report = result.report().expect("expected a weather report");

    assert_eq!(report.current.location, "40.7128, -74.0060");
    assert_eq!(report.coordinates.lat(), 40.7128);
    assert_eq!(report.coordinates.lon(), -74.006);
}

#[tokio::test]
async fn test_coordinates_with_reverse_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "51.5074"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": {"city": "London", "state": "England", "country": "United Kingdom"}
        })))
        .mount(&server)
        .await;
    mount_forecast(&server, 200).await;

    let result = service(&server).resolve_weather("51.5074, -0.1278").await;
    let report = result.report().expect("expected a weather report");

    assert_eq!(report.current.location, "London, United Kingdom");
    assert_eq!(report.coordinates.lat(), 51.5074);
}

#[tokio::test]
async fn test_postal_code_falls_back_to_address_search() {
    let server = MockServer::start().await;

    mount_empty_geocoding(&server).await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "90210"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "lat": "34.0901",
                "lon": "-118.4065",
                "address": {"city": "Beverly Hills", "state": "California", "country": "United States"}
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    mount_forecast(&server, 200).await;

    let result = service(&server).resolve_weather("90210").await;
    let report = result.report().expect("expected a weather report");

    assert_eq!(report.current.location, "Beverly Hills, United States");
    assert_eq!(report.coordinates.lat(), 34.0901);
}

#[tokio::test]
async fn test_unknown_place_is_not_found() {
    let server = MockServer::start().await;

    mount_empty_geocoding(&server).await;
    // Not postal-code-like, so the address search must not be queried
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&server)
        .await;

    let result = service(&server).resolve_weather("Atlantis").await;

    assert!(result.is_error());
    assert!(result.error_message().unwrap().starts_with("Location not found"));
}

#[tokio::test]
async fn test_forecast_failure_returns_error_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Paris", "latitude": 48.85, "longitude": 2.35, "country": "France"}]
        })))
        .mount(&server)
        .await;
    mount_forecast(&server, 500).await;

    let result = service(&server).resolve_weather("Paris").await;

    assert!(matches!(result, WeatherResult::Error { .. }));
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({"error": "Could not fetch weather data. Please try again."})
    );
}

#[tokio::test]
async fn test_geocoder_outage_still_tries_postal_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "75001, France"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"lat": "48.8638", "lon": "2.3361", "address": {"city": "Paris", "state": "Île-de-France"}}
        ])))
        .mount(&server)
        .await;
    mount_forecast(&server, 200).await;

    let result = service(&server).resolve_weather("75001, France").await;
    let report = result.report().expect("expected a weather report");

    assert_eq!(report.current.location, "Paris, France");
}
