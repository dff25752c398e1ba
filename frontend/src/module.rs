//! 应用模块定义
//!
//! 纯领域模型，不依赖 DOM。

use std::fmt::Display;

/// 应用的各个业务模块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModuleKind {
    #[default]
    Dashboard,
    Documents,
    Incidents,
    NonConformities,
    Audits,
    Kpis,
    BusinessContinuity,
}

impl ModuleKind {
    /// 导航菜单顺序
    pub const ALL: [ModuleKind; 7] = [
        ModuleKind::Dashboard,
        ModuleKind::Documents,
        ModuleKind::Incidents,
        ModuleKind::NonConformities,
        ModuleKind::Audits,
        ModuleKind::Kpis,
        ModuleKind::BusinessContinuity,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Documents => "documents",
            Self::Incidents => "incidents",
            Self::NonConformities => "non-conformities",
            Self::Audits => "audits",
            Self::Kpis => "kpis",
            Self::BusinessContinuity => "business-continuity",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// 浏览器路由路径
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Documents => "/documents",
            Self::Incidents => "/incidents",
            Self::NonConformities => "/non-conformities",
            Self::Audits => "/audits",
            Self::Kpis => "/kpis",
            Self::BusinessContinuity => "/business-continuity",
        }
    }

    /// 菜单标签
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Documents => "Documentos",
            Self::Incidents => "Incidentes",
            Self::NonConformities => "No Conformidades",
            Self::Audits => "Auditorías",
            Self::Kpis => "KPIs",
            Self::BusinessContinuity => "Continuidad",
        }
    }
}

impl Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip_covers_every_module() {
        for module in ModuleKind::ALL {
            assert_eq!(ModuleKind::from_slug(module.slug()), Some(module));
            assert_eq!(module.path(), format!("/{}", module.slug()));
        }
        assert_eq!(ModuleKind::from_slug("non_conformities"), None);
    }
}
