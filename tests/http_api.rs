//! End-to-end handler tests: router in front, mock SPARQL store behind

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use ecotour_backend::api;
use ecotour_backend::catalog::handlers::AppState;
use ecotour_backend::sparql::{SparqlClient, SparqlClientConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app_for(server: &mockito::ServerGuard) -> Router {
    let store = SparqlClient::new(SparqlClientConfig {
        query_url: format!("{}/query", server.url()),
        update_url: format!("{}/update", server.url()),
        timeout: Duration::from_secs(2),
    })
    .unwrap();
    api::build_router(AppState {
        store: Arc::new(store),
    })
}

fn results_body(bindings: Value) -> String {
    json!({
        "head": { "vars": ["name", "city", "price", "rating", "co2", "type", "activity_name"] },
        "results": { "bindings": bindings }
    })
    .to_string()
}

fn service_binding(name: &str, city: &str, ty: &str, price: f64, rating: i64, co2: f64) -> Value {
    json!({
        "name": { "type": "literal", "value": name },
        "city": { "type": "literal", "value": city },
        "type": { "type": "literal", "value": ty },
        "price": { "type": "literal", "value": price.to_string() },
        "rating": { "type": "literal", "value": rating.to_string() },
        "co2": { "type": "literal", "value": co2.to_string() }
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn hotels_returns_formatted_records() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(results_body(json!([
            service_binding("GreenStay Tunis 1", "Tunis", "Hotel", 120.0, 4, 33.2)
        ])))
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/hotels")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "GreenStay Tunis 1");
    assert_eq!(body[0]["type"], "Hotel");
    assert_eq!(body[0]["price"], 120.0);
    assert_eq!(body[0]["activity_name"], "");
}

#[tokio::test]
async fn hotels_city_filter_reaches_the_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .match_body(mockito::Matcher::Regex("REGEX".to_string()))
        .with_status(200)
        .with_body(results_body(json!([])))
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/hotels?city=djerba")).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn chat_reports_matches_with_summary() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(results_body(json!([
            service_binding("GreenStay Tunis 1", "Tunis", "Hotel", 90.0, 4, 18.0),
            service_binding("NatureInn Tunis 3", "Tunis", "EcoLodge", 110.0, 5, 9.5)
        ])))
        .create_async()
        .await;

    let (status, body) = send(
        app_for(&server),
        json_request("POST", "/chat", json!({ "message": "cheap stay in tunis" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I found 2 results (Hotels & Activities) in Tunis starting with the cheapest."
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn chat_store_failure_reads_as_no_matches() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = send(
        app_for(&server),
        json_request("POST", "/chat", json!({ "message": "diving in tabarka" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I couldn't find any eco-services matching your criteria."
    );
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let server = mockito::Server::new_async().await;

    let (status, body) = send(
        app_for(&server),
        json_request("POST", "/accommodation", json!({ "name": "Lonely Field" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_rejects_unknown_service_type() {
    let server = mockito::Server::new_async().await;

    let (status, body) = send(
        app_for(&server),
        json_request(
            "POST",
            "/accommodation",
            json!({
                "name": "Sand Castle",
                "city": "djerba",
                "type": "Castle",
                "price": 10.0,
                "rating": 1,
                "co2": 5.0
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_failure_when_store_rejects_update() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/update")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = send(
        app_for(&server),
        json_request(
            "POST",
            "/accommodation",
            json!({
                "name": "GreenStay Test",
                "city": "tunis",
                "type": "Hotel",
                "price": 150.0,
                "rating": 4,
                "co2": 25.5
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_ERROR");
}

#[tokio::test]
async fn create_then_lookup_round_trips_submitted_values() {
    let mut server = mockito::Server::new_async().await;
    let update_mock = server
        .mock("POST", "/update")
        .match_body(mockito::Matcher::Regex(
            r"update=.*INSERT\+DATA.*GreenStay\+Test\+1".to_string(),
        ))
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("POST", "/query")
        .match_body(mockito::Matcher::Regex(r"GreenStay\+Test\+1".to_string()))
        .with_status(200)
        .with_body(results_body(json!([
            service_binding("GreenStay Test 1", "Tunis", "Hotel", 150.0, 4, 25.5)
        ])))
        .create_async()
        .await;

    let app = app_for(&server);

    let (status, body) = send(
        app.clone(),
        json_request(
            "POST",
            "/accommodation",
            json!({
                "name": "GreenStay Test 1",
                "city": "tunis",
                "type": "Hotel",
                "price": 150.0,
                "rating": 4,
                "co2": 25.5
            }),
        ),
    )
    .await;
    update_mock.assert_async().await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Accommodation added successfully");

    let (status, body) = send(app, get("/hotel_details?name=GreenStay%20Test%201")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Tunis");
    assert_eq!(body["type"], "Hotel");
    assert_eq!(body["price"], 150.0);
    assert_eq!(body["rating"], 4);
    assert_eq!(body["co2"], 25.5);
}

#[tokio::test]
async fn details_requires_a_name() {
    let server = mockito::Server::new_async().await;
    let (status, body) = send(app_for(&server), get("/hotel_details")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Hotel name is required");
}

#[tokio::test]
async fn details_unknown_name_is_404() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(results_body(json!([])))
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/hotel_details?name=Nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Hotel not found");
}

#[tokio::test]
async fn delete_confirms_by_name() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/update")
        .match_body(mockito::Matcher::Regex(r"DELETE\+WHERE".to_string()))
        .with_status(204)
        .create_async()
        .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/accommodation/GreenStay%20Test%201")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app_for(&server), request).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Accommodation 'GreenStay Test 1' deleted successfully"
    );
}

#[tokio::test]
async fn update_deletes_then_inserts() {
    let mut server = mockito::Server::new_async().await;
    let delete_mock = server
        .mock("POST", "/update")
        .match_body(mockito::Matcher::Regex(r"DELETE\+WHERE".to_string()))
        .with_status(204)
        .create_async()
        .await;
    let insert_mock = server
        .mock("POST", "/update")
        .match_body(mockito::Matcher::Regex(r"INSERT\+DATA".to_string()))
        .with_status(204)
        .create_async()
        .await;

    let (status, body) = send(
        app_for(&server),
        json_request(
            "PUT",
            "/accommodation/Old%20Name",
            json!({
                "city": "sousse",
                "type": "Camping",
                "price": 60.0,
                "rating": 3,
                "co2": 14.0
            }),
        ),
    )
    .await;

    delete_mock.assert_async().await;
    insert_mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Accommodation 'Old Name' updated successfully");
}

#[tokio::test]
async fn cities_returns_plain_string_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(
            json!({
                "head": { "vars": ["city"] },
                "results": { "bindings": [
                    { "city": { "type": "literal", "value": "Djerba" } },
                    { "city": { "type": "literal", "value": "Tunis" } }
                ] }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/cities")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Djerba", "Tunis"]));
}

#[tokio::test]
async fn recommendations_limits_to_top_rated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/query")
        .match_body(mockito::Matcher::Regex(r"DESC%28%3Frating%29.*LIMIT\+4".to_string()))
        .with_status(200)
        .with_body(results_body(json!([
            service_binding("NatureInn Tozeur 9", "Tozeur", "EcoLodge", 95.0, 5, 8.0)
        ])))
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/recommendations")).await;
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["rating"], 5);
}

#[tokio::test]
async fn price_range_reports_min_and_max() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(200)
        .with_body(
            json!({
                "head": { "vars": ["min", "max"] },
                "results": { "bindings": [{
                    "min": { "type": "literal", "value": "50" },
                    "max": { "type": "literal", "value": "300" }
                }] }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/price_range")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "min": 50.0, "max": 300.0 }));
}

#[tokio::test]
async fn price_range_is_zeroed_when_store_is_down() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/query")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = send(app_for(&server), get("/price_range")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "min": 0.0, "max": 0.0 }));
}
