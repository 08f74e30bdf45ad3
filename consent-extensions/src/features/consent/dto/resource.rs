use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{null_as_default, object_or_null};

/// オーケストレーターが保持する同意リソース
///
/// レスポンスではそのままエコーされるため、ここでは値を検証しない。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentResourceData {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub consent_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// 有効期限（秒）
    #[serde(default, deserialize_with = "null_as_default")]
    pub validity_time: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recurring_indicator: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: i32,
    /// データアクセス有効期間（秒）、0 の場合は出力しない
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_zero"
    )]
    pub data_access_validity_duration: i64,
    /// 型なしのペイロード（オブジェクトまたは null）。`Data.Permissions` から目的を抽出する
    #[serde(default, deserialize_with = "object_or_null")]
    pub request_payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub authorizations: Vec<AuthorizationPayload>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub authorization_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<Map<String, Value>>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
