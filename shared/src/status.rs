//! 状态颜色映射
//!
//! 资源生命周期状态 -> 徽章颜色，活动类型 -> 圆点颜色。
//! 两者都是固定的有限映射，未识别的值统一落到灰色。

use std::fmt;

/// 状态徽章颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Success,
    Warning,
    Info,
    Gray,
}

impl BadgeColor {
    pub fn for_status(status: &str) -> Self {
        match status {
            "open" | "pending_review" => Self::Warning,
            "closed" | "completed" | "approved" | "active" => Self::Success,
            "in_progress" | "planned" => Self::Info,
            _ => Self::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 最近活动圆点颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityColor {
    Blue,
    Red,
    Orange,
    Green,
    Gray,
}

impl ActivityColor {
    pub fn for_kind(kind: &str) -> Self {
        match kind {
            "document" => Self::Blue,
            "incident" => Self::Red,
            "non_conformity" => Self::Orange,
            "audit" => Self::Green,
            _ => Self::Gray,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for ActivityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
