//! 客户端配置

use std::time::Duration;

/// 客户端运行配置
///
/// 默认值对应同源部署：前端与后端共享域名，API 挂在 `/api` 下。
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API 基础路径（不带末尾斜杠）
    pub api_base: String,
    /// 普通通知的显示时长
    pub notification_duration: Duration,
    /// 演示模式配置
    pub demo: DemoConfig,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            notification_duration: Duration::from_secs(5),
            demo: DemoConfig::default(),
        }
    }
}

/// 演示模式配置
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// 自动登录使用的账号
    pub username: String,
    pub password: String,
    /// 模块讲解浮层的显示时长
    pub overlay_duration: Duration,
    /// 测试账号说明浮层的显示时长
    pub credentials_duration: Duration,
    /// 总结浮层的显示时长
    pub summary_duration: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            overlay_duration: Duration::from_secs(8),
            credentials_duration: Duration::from_secs(10),
            summary_duration: Duration::from_secs(15),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://sgcn.example.com/api/");
        assert_eq!(config.api_base, "https://sgcn.example.com/api");
        assert_eq!(config.notification_duration, Duration::from_secs(5));
    }
}
