//! Integration tests for the transit client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_transit::{
    HafasTransitClient, LocationsQuery, NearbyQuery, TransitClient, TransitConfig, TransitError,
};

fn config_for_mock(base_url: &str) -> TransitConfig {
    TransitConfig {
        timeout_secs: 5,
        ..TransitConfig::with_base_url(base_url)
    }
}

const fn sample_locations_json() -> &'static str {
    r#"[
        {
            "type": "stop",
            "id": "900000100003",
            "name": "S+U Alexanderplatz",
            "location": { "type": "location", "latitude": 52.521508, "longitude": 13.411267 },
            "products": { "suburban": true, "subway": true, "tram": true, "bus": true }
        },
        {
            "type": "stop",
            "id": "900000100024",
            "name": "S+U Alexanderplatz/Dircksenstr.",
            "location": { "type": "location", "latitude": 52.5219, "longitude": 13.4115 },
            "products": { "bus": true }
        }
    ]"#
}

const fn sample_nearby_json() -> &'static str {
    r#"[
        { "type": "stop", "id": "900000100005", "name": "U Alexanderplatz [Tram]", "distance": 85 },
        { "type": "stop", "id": "900000100003", "name": "S+U Alexanderplatz", "distance": 140 }
    ]"#
}

const fn sample_departures_json() -> &'static str {
    r#"[
        {
            "tripId": "1|1|1",
            "when": "2026-02-11T10:00:00+01:00",
            "direction": "S Potsdam Hauptbahnhof",
            "line": { "name": "S7", "product": "suburban", "mode": "train" },
            "remarks": [],
            "delay": 0,
            "platform": "2"
        },
        {
            "tripId": "1|2|1",
            "when": "2026-02-11T10:05:00+01:00",
            "direction": "S+U Pankow",
            "line": { "name": "U2", "product": "subway", "mode": "train" },
            "delay": 180
        }
    ]"#
}

#[tokio::test]
async fn test_search_locations_sends_all_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("query", "Alexanderplatz"))
        .and(query_param("fuzzy", "true"))
        .and(query_param("results", "10"))
        .and(query_param("stops", "true"))
        .and(query_param("addresses", "false"))
        .and(query_param("poi", "false"))
        .and(query_param("linesOfStops", "false"))
        .and(query_param("language", "en"))
        .and(query_param("pretty", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_locations_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let stops = client
        .search_locations("Alexanderplatz", &LocationsQuery::stations_only())
        .await
        .unwrap();

    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].id, "900000100003");
    assert_eq!(stops[0].name, "S+U Alexanderplatz");
    assert!(stops[0].products.subway);
    assert!(!stops[1].products.subway);
}

#[tokio::test]
async fn test_search_locations_encodes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .and(query_param("query", "S+U Zoologischer Garten & more"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let stops = client
        .search_locations("S+U Zoologischer Garten & more", &LocationsQuery::default())
        .await
        .unwrap();

    assert!(stops.is_empty());
}

#[tokio::test]
async fn test_search_stops_nearby() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops/nearby"))
        .and(query_param("latitude", "52.521500"))
        .and(query_param("longitude", "13.411000"))
        .and(query_param("results", "8"))
        .and(query_param("distance", "500"))
        .and(query_param("poi", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_nearby_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let options = NearbyQuery {
        distance: Some(500),
        ..NearbyQuery::default()
    };
    let stops = client
        .search_stops_nearby(52.5215, 13.411, &options)
        .await
        .unwrap();

    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].distance, 85);
    assert_eq!(stops[1].stop.name, "S+U Alexanderplatz");
}

#[tokio::test]
async fn test_get_departures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations/900000100003/departures"))
        .and(query_param("duration", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_departures_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let departures = client.get_departures("900000100003", 60).await.unwrap();

    assert_eq!(departures.len(), 2);
    assert_eq!(departures[0].line.name, "S7");
    assert_eq!(departures[0].platform, "2");
    assert_eq!(departures[1].direction, "S+U Pankow");
    assert_eq!(departures[1].delay, 180);
    assert_eq!(departures[1].platform, "");
}

#[tokio::test]
async fn test_get_departures_uses_departures_root() {
    let locations = MockServer::start().await;
    let departures = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations/42/departures"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&departures)
        .await;

    let config = TransitConfig {
        base_url: locations.uri(),
        departures_base_url: departures.uri(),
        ..TransitConfig::for_testing()
    };
    let client = HafasTransitClient::new(&config).unwrap();

    let result = client.get_departures("42", 15).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations/1/departures"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.get_departures("1", 60).await.unwrap_err();

    assert!(matches!(err, TransitError::RequestFailed(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client
        .search_locations("Zoo", &LocationsQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TransitError::RateLimitExceeded {
            retry_after_secs: Some(30)
        }
    ));
}

#[tokio::test]
async fn test_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations/1/departures"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"error\": true"))
        .mount(&server)
        .await;

    let client = HafasTransitClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.get_departures("1", 60).await.unwrap_err();

    assert!(matches!(err, TransitError::ParseError(_)));
}

#[tokio::test]
async fn test_connection_refused() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HafasTransitClient::new(&config_for_mock(&uri)).unwrap();
    let err = client.get_departures("1", 60).await.unwrap_err();

    assert!(matches!(err, TransitError::ConnectionFailed(_)));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stations/1/departures"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = TransitConfig {
        timeout_secs: 1,
        ..TransitConfig::with_base_url(server.uri())
    };
    let client = HafasTransitClient::new(&config).unwrap();
    let err = client.get_departures("1", 60).await.unwrap_err();

    assert!(matches!(err, TransitError::Timeout { timeout_secs: 1 }));
}
