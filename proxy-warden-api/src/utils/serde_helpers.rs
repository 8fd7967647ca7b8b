//! 宽松的反序列化工具
//!
//! 服务端直接返回数据库行：
//! - `is_active` 可能是 `true`/`false`，也可能是 `1`/`0`（tinyint）
//! - 可空文本列会返回 `null`

use serde::{Deserialize, Deserializer};

/// 反序列化布尔值：支持 JSON 布尔、整数（非 0 为真）以及 `"true"`/`"1"` 字符串
pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => Ok(b),
        BoolLike::Int(n) => Ok(n != 0),
        BoolLike::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(Error::custom(format!("invalid boolean: {other}"))),
        },
    }
}

/// 反序列化字符串：`null` 视为空字符串
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// 反序列化可选字符串：`null` 与空白字符串都视为 `None`
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
