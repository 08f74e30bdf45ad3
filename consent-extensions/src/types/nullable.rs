use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` を型のゼロ値として読み込む
///
/// `#[serde(default, deserialize_with = "null_as_default")]` と組み合わせて使う。
/// フィールドが欠落していても `null` でも同じ値になる。
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 型なしのオブジェクトを `Value` のまま読み込む
///
/// 受け付けるのは JSON オブジェクトと `null` のみ。配列やスカラーは型不一致としてエラーにする。
pub fn object_or_null<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ (Value::Null | Value::Object(_)) => Ok(value),
        other => Err(D::Error::custom(format!(
            "expected a JSON object or null, found {other}"
        ))),
    }
}
