use serde_json::Value;

/// 上流システムとの取り決めで固定されたパス `Data.Permissions`
pub const PURPOSE_CONTAINER_KEY: &str = "Data";
pub const PURPOSE_LIST_KEY: &str = "Permissions";

/// `requestPayload.Data.Permissions` から同意目的を取り出す
///
/// パスは 2 階層固定で、他の場所にある権限は探索しない。
/// パスが存在しない、または型が合わない場合は空のリストを返す。
/// 文字列以外の要素は読み飛ばし、残りの順序と重複はそのまま保つ。
pub fn extract_purposes(request_payload: &Value) -> Vec<String> {
    let Value::Object(payload) = request_payload else {
        return Vec::new();
    };
    let Some(Value::Object(data)) = payload.get(PURPOSE_CONTAINER_KEY) else {
        return Vec::new();
    };
    let Some(Value::Array(permissions)) = data.get(PURPOSE_LIST_KEY) else {
        return Vec::new();
    };

    permissions
        .iter()
        .filter_map(|permission| match permission {
            Value::String(purpose) => Some(purpose.clone()),
            _ => None,
        })
        .collect()
}
