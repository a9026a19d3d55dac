use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_items, FeedItem, FeedPayload};
use tower::ServiceExt;
use uuid::Uuid;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn item(description: Option<&str>) -> FeedItem {
    FeedItem {
        id: Uuid::new_v4(),
        description: description.map(str::to_string),
        location: None,
        image: "https://a-url.com".to_string(),
    }
}

// --- feed ---

#[tokio::test]
async fn feed_empty() {
    let resp = app().oneshot(get_request("/feed")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let payload: FeedPayload = body_json(resp).await;
    assert!(payload.items.is_empty());
}

#[tokio::test]
async fn feed_serves_seeded_items_in_order() {
    let items = vec![item(None), item(Some("second"))];
    let resp = app_with_items(items.clone())
        .oneshot(get_request("/feed"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let payload: FeedPayload = body_json(resp).await;
    assert_eq!(payload.items, items);
}

#[tokio::test]
async fn feed_omits_absent_optional_keys() {
    let resp = app_with_items(vec![item(None)])
        .oneshot(get_request("/feed"))
        .await
        .unwrap();

    let json: serde_json::Value = body_json(resp).await;
    let entry = &json["items"][0];
    assert!(entry.get("description").is_none());
    assert!(entry.get("location").is_none());
    assert_eq!(entry["image"], "https://a-url.com");
}

#[tokio::test]
async fn replace_feed_returns_204_and_is_served() {
    use tower::Service;

    let mut app = app().into_service();
    let new_items = vec![item(Some("fresh"))];
    let body = serde_json::to_string(&new_items).unwrap();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", "/feed", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/feed"))
        .await
        .unwrap();
    let payload: FeedPayload = body_json(resp).await;
    assert_eq!(payload.items, new_items);
}

#[tokio::test]
async fn replace_feed_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("PUT", "/feed", r#"[{"image":"https://a-url.com"}]"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- status ---

#[tokio::test]
async fn status_route_echoes_code_with_empty_feed() {
    for code in [201u16, 400, 500] {
        let resp = app()
            .oneshot(get_request(&format!("/status/{code}")))
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), code);
        let payload: FeedPayload = body_json(resp).await;
        assert!(payload.items.is_empty());
    }
}

#[tokio::test]
async fn status_route_rejects_out_of_range_code() {
    let resp = app().oneshot(get_request("/status/1000")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_route_rejects_non_numeric_code() {
    let resp = app().oneshot(get_request("/status/ok")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- invalid json ---

#[tokio::test]
async fn invalid_json_route_is_200_with_non_json_body() {
    let resp = app().oneshot(get_request("/invalid-json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"Invalid Json");
    assert!(serde_json::from_slice::<serde_json::Value>(&body).is_err());
}
