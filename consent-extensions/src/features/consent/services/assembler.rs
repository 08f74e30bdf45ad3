use crate::features::consent::dto::{
    ConsentResourceData, ErrorResponse, ResponseStatus, SuccessResponse, SuccessResponseData,
};

pub const INVALID_REQUEST: &str = "invalid_request";
pub const INVALID_REQUEST_DESCRIPTION: &str = "Invalid request body";

/// 成功レスポンスを組み立てる
///
/// `request_id` と `consent_resource` は加工せずにそのまま返す。
pub fn build_success(
    request_id: String,
    consent_resource: ConsentResourceData,
    purposes: Vec<String>,
) -> SuccessResponse {
    SuccessResponse {
        response_id: request_id,
        status: ResponseStatus::Success,
        data: SuccessResponseData {
            consent_resource,
            resolved_consent_purposes: purposes,
        },
    }
}

pub fn build_error(
    request_id: Option<String>,
    error_message: impl Into<String>,
    error_description: impl Into<String>,
) -> ErrorResponse {
    ErrorResponse {
        response_id: request_id,
        status: ResponseStatus::Error,
        error_message: error_message.into(),
        error_description: error_description.into(),
    }
}
