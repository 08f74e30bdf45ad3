// tests/common/request.rs
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request},
    response::Response,
};
use serde_json::Value;

pub const CREATION_PATH: &str = "/api/services/pre-process-consent-creation";
pub const UPDATE_PATH: &str = "/api/services/pre-process-consent-update";

/// JSONボディ付きのPOSTリクエストを作成
pub fn create_json_request(uri: &str, body: &Value) -> Request<Body> {
    create_raw_request(Method::POST, uri, serde_json::to_string(body).unwrap())
}

/// 任意のボディでリクエストを作成
pub fn create_raw_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_bytes(response: Response) -> Bytes {
    to_bytes(response.into_body(), usize::MAX).await.unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let body = read_bytes(response).await;
    serde_json::from_slice(&body).unwrap()
}
