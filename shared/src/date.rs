//! 时间类型模块
//!
//! 提供：
//! - `parse_timestamp`: 解析后端返回的时间字符串（RFC 3339 或不带时区的 ISO 8601）
//! - `RelativeDate`: 相对日期（"Hoy" / "Ayer" / "Hace N días" / 本地化日期）

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// 解析后端时间字符串
///
/// 不带时区的时间按 UTC 处理（后端使用 `datetime.utcnow()`）。
/// 返回 None 如果解析失败
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// =========================================================
// RelativeDate
// =========================================================

/// 相对于"现在"的日期描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDate {
    /// 相差不超过 1 天（向上取整）
    Today,
    /// 相差 2 天
    Yesterday,
    /// 相差 3..=7 天，值为显示的天数 (d - 1)
    DaysAgo(i64),
    /// 超过 7 天，显示具体日期
    On(NaiveDate),
}

impl RelativeDate {
    /// 计算 `date` 相对 `now` 的描述
    ///
    /// 天数 d = ceil(|now - date| / 1 天)，所以未来的时间按绝对差计算。
    pub fn between(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff_ms = (now - date).num_milliseconds().abs();
        let days = (diff_ms + DAY_MS - 1) / DAY_MS;

        match days {
            0 | 1 => Self::Today,
            2 => Self::Yesterday,
            3..=7 => Self::DaysAgo(days - 1),
            _ => Self::On(date.date_naive()),
        }
    }
}

impl fmt::Display for RelativeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Today => f.write_str("Hoy"),
            Self::Yesterday => f.write_str("Ayer"),
            Self::DaysAgo(n) => write!(f, "Hace {} días", n),
            // es-ES 的 toLocaleDateString 短格式: d/m/yyyy
            Self::On(date) => write!(f, "{}", date.format("%-d/%-m/%Y")),
        }
    }
}

/// 将后端时间字符串格式化为相对日期
///
/// 无法解析的输入原样返回。
pub fn format_relative(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(date) => RelativeDate::between(date, now).to_string(),
        None => raw.to_string(),
    }
}
