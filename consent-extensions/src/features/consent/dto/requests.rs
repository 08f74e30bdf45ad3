use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::resource::ConsentResourceData;
use crate::types::null_as_default;

/// リクエストの `data` セクション
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRequestData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub consent_initiation_data: ConsentResourceData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_headers: Map<String, Value>,
}

/// Pre-process consent creation request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentCreationRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ConsentRequestData,
}

/// Pre-process consent update request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentUpdateRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ConsentRequestData,
}

/// pre-process 系エンドポイントが受け付けるリクエスト
///
/// 作成と更新はリクエスト型の名前だけが異なり、処理の流れは共通。
pub trait PreProcessRequest: DeserializeOwned {
    /// ログ出力用の操作名
    const OPERATION: &'static str;

    fn into_parts(self) -> (String, ConsentRequestData);
}

impl PreProcessRequest for ConsentCreationRequest {
    const OPERATION: &'static str = "pre-process-consent-creation";

    fn into_parts(self) -> (String, ConsentRequestData) {
        (self.request_id, self.data)
    }
}

impl PreProcessRequest for ConsentUpdateRequest {
    const OPERATION: &'static str = "pre-process-consent-update";

    fn into_parts(self) -> (String, ConsentRequestData) {
        (self.request_id, self.data)
    }
}
