use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Extension},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, AppResult};
use crate::features::consent::dto::{
    ConsentCreationRequest, ConsentUpdateRequest, PreProcessRequest, SuccessResponse,
};
use crate::features::consent::services::{
    build_success, decode, extract_purposes, recover_request_id,
};
use crate::log_with_context;
use crate::logging::RequestContext;

/// 作成・更新で共通の pre-process 処理
///
/// decode → 目的抽出 → 成功レスポンス組み立て。失敗はすべて `invalid_request`。
pub fn pre_process<R: PreProcessRequest>(
    context: &RequestContext,
    raw_body: &[u8],
) -> AppResult<SuccessResponse> {
    let request: R = decode(raw_body).map_err(|err| {
        let request_id = recover_request_id(raw_body);
        log_with_context!(
            WARN,
            context,
            "Error decoding request",
            operation = R::OPERATION,
            request_id = &request_id,
            error = err.to_string(),
        );
        AppError::InvalidRequest { request_id }
    })?;

    let (request_id, data) = request.into_parts();

    log_with_context!(
        INFO,
        context,
        "Received pre-process request",
        operation = R::OPERATION,
        request_id = &request_id,
    );

    let purposes = extract_purposes(&data.consent_initiation_data.request_payload);

    log_with_context!(
        DEBUG,
        context,
        "Resolved consent purposes",
        request_id = &request_id,
        purposes = &purposes,
    );

    Ok(build_success(
        request_id,
        data.consent_initiation_data,
        purposes,
    ))
}

/// ボディが読めなかった場合（上限超過など）も `invalid_request` として返す
fn read_body<R: PreProcessRequest>(
    context: &RequestContext,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Bytes> {
    body.map_err(|rejection| {
        log_with_context!(
            WARN,
            context,
            "Error reading request body",
            operation = R::OPERATION,
            error = rejection.body_text(),
        );
        AppError::InvalidRequest { request_id: None }
    })
}

pub async fn pre_process_consent_creation_handler(
    Extension(context): Extension<RequestContext>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let body = read_body::<ConsentCreationRequest>(&context, body)?;
    pre_process::<ConsentCreationRequest>(&context, &body).map(Json)
}

pub async fn pre_process_consent_update_handler(
    Extension(context): Extension<RequestContext>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let body = read_body::<ConsentUpdateRequest>(&context, body)?;
    pre_process::<ConsentUpdateRequest>(&context, &body).map(Json)
}

pub fn consent_router() -> Router {
    Router::new()
        .route(
            "/api/services/pre-process-consent-creation",
            post(pre_process_consent_creation_handler),
        )
        .route(
            "/api/services/pre-process-consent-update",
            post(pre_process_consent_update_handler),
        )
}
