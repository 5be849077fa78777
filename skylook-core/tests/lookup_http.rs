//! Integration tests for the Open-Meteo and Nominatim clients using wiremock.

use skylook_core::{
    Config, Coordinates, LocationQuery, WeatherError, WeatherLookup,
    config::Endpoints,
};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    let base = server.uri();
    Config {
        forecast_days: 3,
        timeout_secs: 5,
        endpoints: Endpoints {
            geocoding: format!("{base}/v1/search"),
            forecast: format!("{base}/v1/forecast"),
            reverse_geocoding: format!("{base}/reverse"),
        },
        ..Config::default()
    }
}

fn seoul_search() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "id": 1835848,
            "name": "Seoul",
            "latitude": 37.566,
            "longitude": 126.9784,
            "country_code": "KR"
        }]
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "latitude": 37.55,
        "longitude": 127.0,
        "timezone": "Asia/Seoul",
        "current_weather": {
            "temperature": 22.0,
            "windspeed": 7.2,
            "weathercode": 61,
            "time": "2024-05-01T14:00"
        },
        "daily": {
            "time": ["2024-05-01", "2024-05-02", "2024-05-03"],
            "weathercode": [61, 0, 95],
            "temperature_2m_max": [23.4, 25.1, 19.9],
            "temperature_2m_min": [14.0, 13.2, 12.5]
        }
    })
}

async fn mount_forecast(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("current_weather", "true"))
        .and(query_param("daily", "weathercode,temperature_2m_max,temperature_2m_min"))
        .and(query_param("timezone", "auto"))
        .and(query_param("forecast_days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_city_lookup_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Seoul"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seoul_search()))
        .expect(1)
        .mount(&server)
        .await;
    mount_forecast(&server).await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let report = lookup
        .lookup(&LocationQuery::City("Seoul".into()))
        .await
        .unwrap();

    assert_eq!(report.location.display_name(), "Seoul, KR");
    assert_eq!(report.timezone.as_deref(), Some("Asia/Seoul"));
    assert_eq!(report.current.temperature_c, 22.0);
    assert_eq!(report.current_weather.description, "Light rain");
    assert_eq!(report.current_color.to_array(), [255, 255, 0, 160]);
    assert_eq!(report.daily.len(), 3);
    assert_eq!(report.daily[2].descriptor().description, "Thunderstorm");
}

#[tokio::test]
async fn test_city_not_found_when_results_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "generationtime_ms": 0.3
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&server)
        .await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Nowhereville".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::NotFound(ref name) if name == "Nowhereville"));
}

#[tokio::test]
async fn test_city_not_found_when_results_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})))
        .mount(&server)
        .await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Nowhereville".into()))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_forecast_server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seoul_search()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Seoul".into()))
        .await
        .unwrap_err();

    match err {
        WeatherError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_forecast_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seoul_search()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Cannot initialize WeatherVariable from invalid String value"
        })))
        .mount(&server)
        .await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Seoul".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Parse { .. }));
}

#[tokio::test]
async fn test_point_lookup_reverse_geocodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "display_name": "Jung-gu, Busan, South Korea",
            "address": {"city": "Busan", "country": "South Korea"}
        })))
        .mount(&server)
        .await;
    mount_forecast(&server).await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let point = Coordinates::new(35.1796, 129.0756).unwrap();
    let report = lookup.lookup(&LocationQuery::Point(point)).await.unwrap();

    assert_eq!(report.location.name, "Busan, South Korea");
    assert_eq!(report.location.coordinates, point);
    assert_eq!(report.daily.len(), 3);
}

#[tokio::test]
async fn test_point_lookup_falls_back_to_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    mount_forecast(&server).await;

    let lookup = WeatherLookup::from_config(&config_for(&server)).unwrap();
    let point = Coordinates::new(35.1796, 129.0756).unwrap();
    let report = lookup.lookup(&LocationQuery::Point(point)).await.unwrap();

    assert_eq!(report.location.name, "35.1796, 129.0756");
}

#[tokio::test]
async fn test_slow_geocoding_times_out_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(seoul_search())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        timeout_secs: 1,
        ..config_for(&server)
    };
    let lookup = WeatherLookup::from_config(&config).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Seoul".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let server = MockServer::start().await;

    let mut config = config_for(&server);
    config.endpoints.geocoding = "http://127.0.0.1:1/v1/search".to_string();

    let lookup = WeatherLookup::from_config(&config).unwrap();
    let err = lookup
        .lookup(&LocationQuery::City("Seoul".into()))
        .await
        .unwrap_err();

    assert!(matches!(err, WeatherError::Network { .. }), "got {err:?}");
}
