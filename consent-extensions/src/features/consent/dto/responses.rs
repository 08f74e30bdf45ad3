use serde::{Deserialize, Serialize};

use super::resource::ConsentResourceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// オーケストレーターへの成功レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub response_id: String,
    pub status: ResponseStatus,
    pub data: SuccessResponseData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponseData {
    pub consent_resource: ConsentResourceData,
    /// 空でも必ず配列として出力する
    pub resolved_consent_purposes: Vec<String>,
}

/// オーケストレーターへのエラーレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "is_blank")]
    pub response_id: Option<String>,
    pub status: ResponseStatus,
    pub error_message: String,
    pub error_description: String,
}

fn is_blank(response_id: &Option<String>) -> bool {
    !matches!(response_id.as_deref(), Some(id) if !id.is_empty())
}
