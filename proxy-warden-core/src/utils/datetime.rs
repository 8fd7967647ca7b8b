//! 时间戳解析
//!
//! 服务端以字符串返回时间，格式不统一：
//! - 日志：`YYYY-MM-DD HH:MM:SS`
//! - 规则列表：`YYYY-MM-DDTHH:MM:SS`（可能带小数秒或时区）
//! - 旧版界面导出的本地化文本：`YYYY. M. D. H:M:S`（可带 `오전`/`오후`）
//!
//! 入库时解析一次，原始字符串与解析结果一起保存；排序只比较解析结果，
//! 显示文本从不反向解析。

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

static LOCALIZED_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})\.\s*(\d{1,2})\.\s*(\d{1,2})\.?\s+(?:(오전|오후|AM|PM)\s*)?(\d{1,2}):(\d{1,2}):(\d{1,2})$",
    )
    .ok()
});

/// 默认显示格式
pub const DEFAULT_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 原始时间字符串 + 解析后的时刻
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    instant: Option<NaiveDateTime>,
}

impl Timestamp {
    /// 解析服务端时间字符串；无法识别时 `instant` 为 `None`
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            instant: parse_timestamp(raw),
        }
    }

    /// 服务端原始字符串
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 解析后的时刻（用于排序）
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.instant
    }

    /// 显示文本：能解析则按 `format` 格式化，否则原样返回
    pub fn display(&self, format: &str) -> String {
        self.instant
            .map_or_else(|| self.raw.clone(), |dt| dt.format(format).to_string())
    }
}

/// 解析支持的所有时间格式
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }

    // 带时区的时间统一换算为 UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    parse_localized(s)
}

/// `2024. 1. 5. 10:0:0` / `2024. 1. 5. 오후 3:04:05`
fn parse_localized(s: &str) -> Option<NaiveDateTime> {
    let caps = LOCALIZED_RE.as_ref()?.captures(s)?;
    let num = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    let year = i32::try_from(num(1)?).ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;

    let mut hour = num(5)?;
    match caps.get(4).map(|m| m.as_str()) {
        Some("오후" | "PM") if hour < 12 => hour += 12,
        Some("오전" | "AM") if hour == 12 => hour = 0,
        _ => {}
    }

    date.and_hms_opt(hour, num(6)?, num(7)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_log_format() {
        assert_eq!(
            parse_timestamp("2024-01-05 10:00:00"),
            Some(at(2024, 1, 5, 10, 0, 0))
        );
    }

    #[test]
    fn parses_iso_with_fraction() {
        assert_eq!(
            parse_timestamp("2024-01-05T10:00:00.123456"),
            Some(at(2024, 1, 5, 10, 0, 0) + chrono::Duration::microseconds(123_456))
        );
    }

    #[test]
    fn parses_rfc3339_as_utc() {
        assert_eq!(
            parse_timestamp("2024-01-05T19:00:00+09:00"),
            Some(at(2024, 1, 5, 10, 0, 0))
        );
    }

    #[test]
    fn parses_localized_pattern() {
        assert_eq!(
            parse_timestamp("2024. 1. 5. 10:0:0"),
            Some(at(2024, 1, 5, 10, 0, 0))
        );
        assert_eq!(
            parse_timestamp("2024. 1. 10. 9:0:0"),
            Some(at(2024, 1, 10, 9, 0, 0))
        );
    }

    #[test]
    fn parses_localized_meridiem() {
        assert_eq!(
            parse_timestamp("2024. 1. 5. 오후 3:04:05"),
            Some(at(2024, 1, 5, 15, 4, 5))
        );
        assert_eq!(
            parse_timestamp("2024. 1. 5. 오전 12:30:00"),
            Some(at(2024, 1, 5, 0, 30, 0))
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024. 2. 30. 10:0:0"), None);
    }

    #[test]
    fn display_falls_back_to_raw() {
        let ts = Timestamp::parse("sometime");
        assert_eq!(ts.instant(), None);
        assert_eq!(ts.display(DEFAULT_DISPLAY_FORMAT), "sometime");

        let ts = Timestamp::parse("2024-01-05T10:00:00");
        assert_eq!(ts.display("%m/%d %H:%M"), "01/05 10:00");
        assert_eq!(ts.raw(), "2024-01-05T10:00:00");
    }
}
