// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::consent::services::assembler::{
    build_error, INVALID_REQUEST, INVALID_REQUEST_DESCRIPTION,
};

#[derive(Error, Debug)]
pub enum AppError {
    /// ボディを読み込めなかった。`request_id` は取り出せた場合のみ返す
    #[error("Invalid request body")]
    InvalidRequest { request_id: Option<String> },
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::InvalidRequest { request_id } => (
                StatusCode::BAD_REQUEST,
                build_error(request_id, INVALID_REQUEST, INVALID_REQUEST_DESCRIPTION),
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
