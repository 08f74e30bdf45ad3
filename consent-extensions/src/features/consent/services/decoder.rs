use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// リクエストボディを読み込めなかった
///
/// 呼び出し側はどちらの場合も `invalid_request` として扱う。
/// 原因はログ出力のためだけに保持している。
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("request body is empty")]
    Empty,

    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// ボディ先頭の JSON 値を読み込む。以降のバイト列は無視する
///
/// オブジェクトのキーが重複している場合は後の値が残る。
fn first_value(raw_body: &[u8]) -> Result<Value, DecodeError> {
    serde_json::Deserializer::from_slice(raw_body)
        .into_iter::<Value>()
        .next()
        .ok_or(DecodeError::Empty)?
        .map_err(DecodeError::from)
}

/// 生のボディバイト列を型付きリクエストに変換する
///
/// 一度 `Value` として読み込んでから型に当てはめるため、重複キーはエラーにならない。
pub fn decode<R: DeserializeOwned>(raw_body: &[u8]) -> Result<R, DecodeError> {
    let value = first_value(raw_body)?;
    Ok(serde_json::from_value(value)?)
}

/// 型の合わないボディから `requestId` だけを取り出す
///
/// ボディが JSON オブジェクトとして読めない場合は `None`。
pub fn recover_request_id(raw_body: &[u8]) -> Option<String> {
    let value = first_value(raw_body).ok()?;

    value.get("requestId")?.as_str().map(str::to_owned)
}
