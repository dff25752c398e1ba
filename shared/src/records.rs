//! 资源记录模块
//!
//! 各业务模块列表接口返回的记录。前端只读展示，不做校验：
//! 所有字段都带默认值，未知字段直接忽略。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub document_type: String,
    pub version: String,
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub incident_type: String,
    pub priority: String,
    pub status: String,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NonConformity {
    pub id: i64,
    pub title: String,
    pub severity: String,
    pub status: String,
    pub location: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audit {
    pub id: i64,
    pub title: String,
    pub audit_type: String,
    pub status: String,
    pub planned_start_date: Option<String>,
    pub findings_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub measurement_unit: String,
}

/// 业务连续性计划
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuityPlan {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    /// RTO，单位小时
    pub rto_hours: Option<f64>,
}

/// 应急演练
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Simulation {
    pub id: i64,
    pub title: String,
    pub scenario: Option<String>,
    pub status: String,
    /// 成功率百分比
    pub success_rate: Option<f64>,
}
