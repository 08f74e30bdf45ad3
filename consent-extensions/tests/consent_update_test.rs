use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

use common::request::{create_json_request, create_raw_request, read_json, UPDATE_PATH};

fn update_body(request_id: &str, consent_type: &str, request_payload: Value) -> Value {
    json!({
        "requestId": request_id,
        "data": {
            "consentInitiationData": {
                "type": consent_type,
                "status": "AwaitingAuthorisation",
                "validityTime": 86400,
                "recurringIndicator": false,
                "frequency": 0,
                "requestPayload": request_payload
            }
        }
    })
}

#[tokio::test]
async fn test_pre_process_consent_update_success() {
    let app = common::setup_app();
    let body = update_body(
        "UPD-1",
        "accounts",
        json!({"Data": {"Permissions": ["accounts:read", "transactions:read"]}}),
    );

    let response = app
        .oneshot(create_json_request(UPDATE_PATH, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["responseId"], "UPD-1");
    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(
        json["data"]["resolvedConsentPurposes"],
        json!(["accounts:read", "transactions:read"])
    );
    assert_eq!(json["data"]["consentResource"]["validityTime"], 86400);
}

#[tokio::test]
async fn test_pre_process_consent_update_invalid_json() {
    let app = common::setup_app();

    let response = app
        .oneshot(create_raw_request(Method::POST, UPDATE_PATH, "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert_eq!(json["status"], "ERROR");
    assert_eq!(json["errorMessage"], "invalid_request");
    assert_eq!(json["errorDescription"], "Invalid request body");
}

#[tokio::test]
async fn test_pre_process_consent_update_empty_permissions() {
    let app = common::setup_app();
    let body = update_body(
        "UPD-EMPTY",
        "accounts",
        json!({"Data": {"Permissions": []}}),
    );

    let response = app
        .oneshot(create_json_request(UPDATE_PATH, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["data"]["resolvedConsentPurposes"], json!([]));
}

#[tokio::test]
async fn test_pre_process_consent_update_no_permissions_field() {
    let app = common::setup_app();
    let body = update_body("UPD-NO-PERMS", "payments", json!({"Data": {}}));

    let response = app
        .oneshot(create_json_request(UPDATE_PATH, &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["data"]["resolvedConsentPurposes"], json!([]));
    assert_eq!(json["data"]["consentResource"]["type"], "payments");
}

#[tokio::test]
async fn test_pre_process_consent_update_matches_creation_shape() {
    let app = common::setup_app();
    let body = update_body(
        "SAME-SHAPE",
        "accounts",
        json!({"Data": {"Permissions": ["accounts:read"]}}),
    );

    let update = app
        .clone()
        .oneshot(create_json_request(UPDATE_PATH, &body))
        .await
        .unwrap();
    let creation = app
        .oneshot(create_json_request(
            common::request::CREATION_PATH,
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(read_json(update).await, read_json(creation).await);
}
