//! Integration tests for `MapsClient` using wiremock HTTP mocks.
//!
//! Each test stands up its own mock server; no real network traffic is made.

use std::time::Duration;

use placegen_core::{LatLng, Place};
use placegen_maps::{DetailsOutcome, MapsClient, MapsError, NearbyQuery, MAX_PAGES};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> MapsClient {
    MapsClient::with_base_url("test-key", 5, "placegen-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn query() -> NearbyQuery {
    NearbyQuery {
        center: LatLng::new(40.0, -74.0),
        radius_meters: 5550,
        keyword: "cafe".to_string(),
    }
}

fn summary(id: &str, lat: f64, lng: f64) -> serde_json::Value {
    json!({
        "place_id": id,
        "name": format!("Place {id}"),
        "geometry": { "location": { "lat": lat, "lng": lng } }
    })
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn geocode_derives_radius_from_viewport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Hoboken"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Hoboken, NJ, USA",
                "geometry": {
                    "location": { "lat": 40.0, "lng": -74.0 },
                    "viewport": {
                        "northeast": { "lat": 40.05, "lng": -73.95 },
                        "southwest": { "lat": 39.95, "lng": -74.05 }
                    }
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let area = test_client(&server.uri())
        .geocode("Hoboken", 5000)
        .await
        .expect("geocode should succeed");

    assert_eq!(area.center, LatLng::new(40.0, -74.0));
    assert_eq!(area.radius_meters, 5550);
}

#[tokio::test]
async fn geocode_without_viewport_uses_default_radius() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{ "geometry": { "location": { "lat": 1.5, "lng": 2.5 } } }]
        })))
        .mount(&server)
        .await;

    let area = test_client(&server.uri())
        .geocode("Somewhere", 5000)
        .await
        .expect("geocode should succeed");

    assert_eq!(area.center, LatLng::new(1.5, 2.5));
    assert_eq!(area.radius_meters, 5000);
}

#[tokio::test]
async fn geocode_with_no_results_is_a_descriptive_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .geocode("Nowhere", 5000)
        .await
        .unwrap_err();

    assert!(
        matches!(err, MapsError::NoGeocodeResults { ref address } if address == "Nowhere"),
        "got {err:?}"
    );
    assert!(err.to_string().contains("Nowhere"));
}

#[tokio::test]
async fn geocode_empty_results_with_ok_status_is_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .geocode("Nowhere", 5000)
        .await
        .unwrap_err();
    assert!(matches!(err, MapsError::NoGeocodeResults { .. }), "got {err:?}");
}

#[tokio::test]
async fn geocode_request_denied_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .geocode("Paris", 5000)
        .await
        .unwrap_err();

    assert!(
        matches!(err, MapsError::Api { ref status, ref message, .. }
            if status == "REQUEST_DENIED" && message.contains("API key")),
        "got {err:?}"
    );
}

// ---------------------------------------------------------------------------
// nearby search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn nearby_search_page_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "40,-74"))
        .and(query_param("radius", "5550"))
        .and(query_param("keyword", "cafe"))
        .and(query_param("key", "test-key"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [summary("A", 40.01, -74.01)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server.uri())
        .nearby_search_page(&query(), None)
        .await
        .expect("page should parse");

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].place_id, "A");
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn nearby_search_all_follows_tokens_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [summary("A", 1.0, 1.0), summary("B", 1.1, 1.1)],
            "next_page_token": "tok-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("pagetoken", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [summary("C", 1.2, 1.2)],
            "next_page_token": "tok-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("pagetoken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [summary("D", 1.3, 1.3)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let places = test_client(&server.uri())
        .nearby_search_all(&query(), Duration::ZERO)
        .await
        .expect("all pages should be fetched");

    let ids: Vec<&str> = places.iter().map(|p| p.place_id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C", "D"]);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3, "exactly three requests for two tokens");
}

#[tokio::test]
async fn nearby_search_all_waits_before_continuation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [summary("A", 1.0, 1.0)],
            "next_page_token": "tok-1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("pagetoken", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": []
        })))
        .mount(&server)
        .await;

    let started = std::time::Instant::now();
    let places = test_client(&server.uri())
        .nearby_search_all(&query(), Duration::from_millis(150))
        .await
        .expect("pages should be fetched");

    assert_eq!(places.len(), 1);
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn nearby_search_all_stops_on_cycling_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [],
            "next_page_token": "same-token"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .nearby_search_all(&query(), Duration::ZERO)
        .await
        .unwrap_err();

    assert!(
        matches!(err, MapsError::PaginationLimit { max_pages, .. } if max_pages == MAX_PAGES),
        "got {err:?}"
    );
}

#[tokio::test]
async fn nearby_search_zero_results_is_empty_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let places = test_client(&server.uri())
        .nearby_search_all(&query(), Duration::ZERO)
        .await
        .expect("zero results is not an error");
    assert!(places.is_empty());
}

#[tokio::test]
async fn nearby_search_over_query_limit_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OVER_QUERY_LIMIT",
            "results": []
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .nearby_search_page(&query(), None)
        .await
        .unwrap_err();
    assert!(
        matches!(err, MapsError::Api { ref status, .. } if status == "OVER_QUERY_LIMIT"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn http_error_does_not_leak_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .nearby_search_page(&query(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, MapsError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains("test-key"), "leaked: {err}");
}

// ---------------------------------------------------------------------------
// place details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn place_details_maps_result_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "A"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "name": "Blue Bottle",
                "formatted_address": "1 Main St, Hoboken, NJ",
                "formatted_phone_number": "(201) 555-0100",
                "website": "https://bluebottle.example",
                "rating": 4.6
            }
        })))
        .mount(&server)
        .await;

    let outcome = test_client(&server.uri())
        .place_details("A")
        .await
        .expect("details should parse");

    assert_eq!(
        outcome,
        DetailsOutcome::Found(Place {
            name: Some("Blue Bottle".to_string()),
            address: Some("1 Main St, Hoboken, NJ".to_string()),
            phone_number: Some("(201) 555-0100".to_string()),
            website: Some("https://bluebottle.example".to_string()),
            rating: 4.6,
        })
    );
}

#[tokio::test]
async fn place_details_missing_rating_defaults_to_zero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": { "name": "Corner Shop" }
        })))
        .mount(&server)
        .await;

    let outcome = test_client(&server.uri())
        .place_details("B")
        .await
        .expect("details should parse");

    let DetailsOutcome::Found(place) = outcome else {
        panic!("expected Found, got {outcome:?}");
    };
    assert!((place.rating - 0.0).abs() < f64::EPSILON);
    assert!(place.address.is_none());
    assert!(place.phone_number.is_none());
    assert!(place.website.is_none());
}

#[tokio::test]
async fn place_details_non_ok_status_is_rejected_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let outcome = test_client(&server.uri())
        .place_details("gone")
        .await
        .expect("non-OK status is not a transport error");

    assert_eq!(
        outcome,
        DetailsOutcome::Rejected {
            status: "NOT_FOUND".to_string()
        }
    );
}
