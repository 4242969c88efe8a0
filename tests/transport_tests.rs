use recs_console::error::AppError;
use recs_console::models::RecommendationRecord;
use recs_console::services::{requests, HttpTransport, Transport};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_record(id: Option<i64>) -> RecommendationRecord {
    RecommendationRecord {
        id,
        product_id: Some(7),
        product_name: "Tent".to_string(),
        rec_id: Some(8),
        rec_name: "Sleeping Bag".to_string(),
        rec_type: "CROSS_SELL".to_string(),
        like_num: Some(0),
    }
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommendations"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "id": null,
            "product_id": 7,
            "product_name": "Tent",
            "rec_id": 8,
            "rec_name": "Sleeping Bag",
            "rec_type": "CROSS_SELL",
            "like_num": 0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "product_id": 7,
            "product_name": "Tent",
            "rec_id": 8,
            "rec_name": "Sleeping Bag",
            "rec_type": "CROSS_SELL",
            "like_num": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri());
    let response = transport
        .send(requests::create_request(&sample_record(None)))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    let created: RecommendationRecord = serde_json::from_str(&response.body).unwrap();
    assert_eq!(created.id, Some(1));
}

#[tokio::test]
async fn test_search_sends_query_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recommendations"))
        .and(query_param("product_id", "7"))
        .and(query_param("rec_type", "up-sell"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri());
    let response = transport
        .send(requests::search_request("7", "up-sell"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/recommendations/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "Not Found",
            "message": "Recommendation with id '404' was not found."
        })))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri());
    let response = transport
        .send(requests::retrieve_request("404"))
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
    assert!(response.body.contains("was not found"));
}

#[tokio::test]
async fn test_delete_has_no_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/recommendations/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&server.uri());
    let response = transport
        .send(requests::delete_request("3"))
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_a_client_error() {
    // Nothing listens on port 1
    let transport = HttpTransport::new("http://127.0.0.1:1");
    let result = transport.send(requests::retrieve_request("1")).await;

    assert!(matches!(result, Err(AppError::HttpClient(_))));
}
