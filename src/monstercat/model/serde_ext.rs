//! 字段级反序列化辅助函数
//!
//! 平台 API 对"未设置"的表示并不统一：可能省略字段、给出 `null`，
//! 也可能给出空字符串。这里把这些情况统一收敛为默认值。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use serde::de::{self, Deserializer, Unexpected};

/// 将 `null` 视为该类型的默认值
///
/// 需要配合 `#[serde(default)]` 使用，才能同时覆盖字段缺失的情况
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 将空字符串视为 `None`
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|value| !value.is_empty()))
}

/// 必填标识字段：拒绝空字符串
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::invalid_value(
            Unexpected::Str(&value),
            &"a non-empty string",
        ));
    }
    Ok(value)
}

/// 宽松的时间解析，缺省时为 Unix 纪元
pub fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_datetime_opt(deserializer)?.unwrap_or_default())
}

/// 宽松的可选时间解析
///
/// 接受带时区的 RFC 3339，或不带时区的 `YYYY-MM-DDTHH:MM:SS[.fff]`（按 UTC 处理）。
/// `null` 与空字符串均视为未设置。
pub fn flexible_datetime_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => parse_datetime(&value).map(Some).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Str(&value),
                &"an RFC 3339 or naive ISO 8601 date-time",
            )
        }),
    }
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
