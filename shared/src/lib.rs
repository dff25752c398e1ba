use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;
pub mod records;
pub mod status;

pub use protocol::ResourceCollection;
pub use records::{Audit, ContinuityPlan, Document, Incident, Kpi, NonConformity, Simulation};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化 token 的 LocalStorage 键
pub const STORAGE_TOKEN_KEY: &str = "token";
/// 持久化用户信息 (JSON) 的 LocalStorage 键
pub const STORAGE_USER_KEY: &str = "user";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_STATS_PATH: &str = "/dashboard/stats";

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

/// 当前登录用户
///
/// 后端返回的完整用户对象字段较多，前端只关心展示用的部分，
/// 其余字段保存在 `extra` 中以便原样持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub full_name: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            role: role.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// 登录表单
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /api/auth/login` 成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserProfile,
}

/// 后端错误响应体 (`{"detail": "..."}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

// =========================================================
// 仪表盘模型 (Dashboard Models)
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_documents: u64,
    #[serde(default)]
    pub pending_documents: u64,
    #[serde(default)]
    pub open_incidents: u64,
    #[serde(default)]
    pub total_incidents: u64,
    #[serde(default)]
    pub open_non_conformities: u64,
    #[serde(default)]
    pub total_non_conformities: u64,
    #[serde(default)]
    pub planned_audits: u64,
    #[serde(default)]
    pub total_audits: u64,
    #[serde(default)]
    pub total_kpis: u64,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}

/// 最近活动条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_keeps_extra_user_fields() {
        let body = json!({
            "access_token": "t1",
            "token_type": "bearer",
            "user": {"full_name": "Admin", "role": "admin", "id": 1, "is_active": true}
        });
        let resp: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.access_token, "t1");
        assert_eq!(resp.user.role, "admin");
        assert_eq!(resp.user.extra.get("id"), Some(&json!(1)));

        let round = serde_json::to_value(&resp.user).unwrap();
        assert_eq!(round["is_active"], json!(true));
    }

    #[test]
    fn test_dashboard_stats_tolerates_missing_kpis() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "total_documents": 5,
            "pending_documents": 2,
            "open_incidents": 1,
            "total_incidents": 3,
            "open_non_conformities": 0,
            "total_non_conformities": 0,
            "planned_audits": 1,
            "total_audits": 2,
            "recent_activities": []
        }))
        .unwrap();
        assert_eq!(stats.total_kpis, 0);
        assert_eq!(stats.planned_audits, 1);
        assert!(stats.recent_activities.is_empty());
    }

    #[test]
    fn test_activity_type_field_is_renamed() {
        let activity: Activity = serde_json::from_value(json!({
            "type": "incident",
            "title": "Caída del servidor",
            "user": "Ana",
            "date": "2024-01-10T08:00:00",
            "priority": "high"
        }))
        .unwrap();
        assert_eq!(activity.kind, "incident");
        assert_eq!(activity.priority.as_deref(), Some("high"));
        assert!(activity.status.is_none());
    }
}
