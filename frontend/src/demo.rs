//! 演示模式
//!
//! 面向管理层的引导演示：固定的十个步骤，逐步切换模块并显示讲解浮层。
//! 演示器只是核心的外部调用方，通过 `DemoHost` 使用公开操作。

use std::time::Duration;

use crate::config::DemoConfig;
use crate::module::ModuleKind;

/// 演示步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    Welcome,
    Login,
    Dashboard,
    Documents,
    Incidents,
    NonConformities,
    Audits,
    Kpis,
    BusinessContinuity,
    Summary,
}

/// 讲解浮层内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOverlay {
    pub heading: &'static str,
    pub lead: &'static str,
    pub points: &'static [&'static str],
}

impl DemoStep {
    pub const ALL: [DemoStep; 10] = [
        DemoStep::Welcome,
        DemoStep::Login,
        DemoStep::Dashboard,
        DemoStep::Documents,
        DemoStep::Incidents,
        DemoStep::NonConformities,
        DemoStep::Audits,
        DemoStep::Kpis,
        DemoStep::BusinessContinuity,
        DemoStep::Summary,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Bienvenida al Sistema SGCN-SGC",
            Self::Login => "Autenticación Segura",
            Self::Dashboard => "Dashboard Ejecutivo",
            Self::Documents => "Gestión de Documentos",
            Self::Incidents => "Gestión de Incidentes",
            Self::NonConformities => "No Conformidades",
            Self::Audits => "Auditorías Internas",
            Self::Kpis => "KPIs y Métricas",
            Self::BusinessContinuity => "Continuidad del Negocio",
            Self::Summary => "Resumen y Beneficios",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Welcome => "Sistema Integrado de Gestión de Calidad y Continuidad del Negocio",
            Self::Login => "Sistema de login con roles diferenciados",
            Self::Dashboard => "Métricas en tiempo real y estado del sistema",
            Self::Documents => "Control de versiones y aprobación de documentos",
            Self::Incidents => "Manejo de eventos críticos con prioridades",
            Self::NonConformities => "Registro y seguimiento de problemas",
            Self::Audits => "Programación y documentación de auditorías",
            Self::Kpis => "Indicadores de desempeño del sistema",
            Self::BusinessContinuity => "Planes y simulaciones de emergencia",
            Self::Summary => "Impacto en la organización y próximos pasos",
        }
    }

    /// 该步骤展示的模块（欢迎、账号、总结三步不切换模块）
    pub fn module(&self) -> Option<ModuleKind> {
        match self {
            Self::Welcome | Self::Login | Self::Summary => None,
            Self::Dashboard => Some(ModuleKind::Dashboard),
            Self::Documents => Some(ModuleKind::Documents),
            Self::Incidents => Some(ModuleKind::Incidents),
            Self::NonConformities => Some(ModuleKind::NonConformities),
            Self::Audits => Some(ModuleKind::Audits),
            Self::Kpis => Some(ModuleKind::Kpis),
            Self::BusinessContinuity => Some(ModuleKind::BusinessContinuity),
        }
    }

    pub fn overlay(&self) -> DemoOverlay {
        let (heading, points): (&'static str, &'static [&'static str]) = match self {
            Self::Welcome => (
                "Características Principales",
                &[
                    "Gestión completa de documentos ISO 9001/22301",
                    "Dashboard ejecutivo en tiempo real",
                    "Sistema de roles y permisos",
                    "API REST para integraciones",
                    "Interfaz responsive y moderna",
                ],
            ),
            Self::Login => (
                "Usuarios de Prueba",
                &[
                    "admin / admin: Administrador",
                    "auditor1 / auditor: Auditor Interno",
                    "gestor1 / gestor: Gestor de Procesos",
                    "operador1 / operador: Operador Crítico",
                ],
            ),
            Self::Dashboard => (
                "Características del Dashboard",
                &[
                    "Estadísticas de documentos, incidentes y no conformidades",
                    "Actividades recientes en tiempo real",
                    "Estado del sistema con indicadores",
                    "Acceso rápido a funciones principales",
                ],
            ),
            Self::Documents => (
                "Funcionalidades",
                &[
                    "Creación y edición de documentos",
                    "Control de versiones automático",
                    "Flujo de aprobación configurable",
                    "Estados: Draft, Pending Review, Approved",
                    "Tipos: Manual, Policy, Procedure, Form",
                ],
            ),
            Self::Incidents => (
                "Sistema de Prioridades",
                &[
                    "CRITICAL: acción inmediata",
                    "HIGH: acción urgente",
                    "MEDIUM: acción normal",
                    "LOW: acción programada",
                ],
            ),
            Self::NonConformities => (
                "Análisis de Causa Raíz",
                &[
                    "Registro detallado del problema",
                    "Análisis de causa raíz integrado",
                    "Acciones correctivas y preventivas",
                    "Seguimiento hasta cierre completo",
                ],
            ),
            Self::Audits => (
                "Tipos de Auditoría",
                &[
                    "Interna: auditorías del sistema",
                    "Externa: auditorías de terceros",
                    "Seguimiento: verificación de acciones",
                    "Especial: auditorías específicas",
                ],
            ),
            Self::Kpis => (
                "Categorías de KPIs",
                &[
                    "Calidad: indicadores ISO 9001",
                    "Continuidad: indicadores ISO 22301",
                    "Rendimiento: eficiencia operativa",
                    "Cumplimiento: conformidad normativa",
                ],
            ),
            Self::BusinessContinuity => (
                "Objetivos RTO/RPO",
                &[
                    "RTO: Tiempo de Recuperación Objetivo",
                    "RPO: Punto de Recuperación Objetivo",
                    "Simulaciones: pruebas de emergencia",
                    "Planes: documentación de continuidad",
                ],
            ),
            Self::Summary => (
                "Beneficios Implementados",
                &[
                    "Cumplimiento ISO 9001/22301",
                    "Trazabilidad completa",
                    "Reportes ejecutivos",
                    "Reducción de riesgos operacionales",
                ],
            ),
        };
        DemoOverlay {
            heading,
            lead: self.description(),
            points,
        }
    }

    /// 浮层显示时长
    pub fn duration(&self, config: &DemoConfig) -> Duration {
        match self {
            Self::Login => config.credentials_duration,
            Self::Summary => config.summary_duration,
            _ => config.overlay_duration,
        }
    }
}

// =========================================================
// 步骤序列
// =========================================================

/// 演示进度
///
/// 只记录位置，不持有宿主；`next`/`prev` 在边界处不回绕。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoDriver {
    position: Option<usize>,
}

impl DemoDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> DemoStep {
        self.position = Some(0);
        DemoStep::ALL[0]
    }

    pub fn next(&mut self) -> Option<DemoStep> {
        let pos = self.position?;
        let next = pos + 1;
        let step = DemoStep::ALL.get(next).copied()?;
        self.position = Some(next);
        Some(step)
    }

    pub fn prev(&mut self) -> Option<DemoStep> {
        let pos = self.position?.checked_sub(1)?;
        self.position = Some(pos);
        Some(DemoStep::ALL[pos])
    }

    /// 退出演示，返回此前是否处于演示中
    pub fn exit(&mut self) -> bool {
        self.position.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }

    pub fn current(&self) -> Option<DemoStep> {
        self.position.and_then(|p| DemoStep::ALL.get(p).copied())
    }

    /// 从 0 开始的位置
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn total(&self) -> usize {
        DemoStep::ALL.len()
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.position, Some(p) if p > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.position, Some(p) if p + 1 < DemoStep::ALL.len())
    }
}

// =========================================================
// 宿主接口
// =========================================================

#[async_trait::async_trait(?Send)]
pub trait DemoHost {
    fn is_authenticated(&self) -> bool;

    fn show_login(&self);

    /// 登录，返回是否成功
    async fn login(&self, username: &str, password: &str) -> bool;

    async fn open(&self, module: ModuleKind);

    fn overlay(&self, step: DemoStep, duration: Duration);
}

/// 执行某一步
///
/// 需要数据的步骤在未登录时先用演示账号登录，登录完成后才切换模块。
pub async fn run_step<H: DemoHost + ?Sized>(step: DemoStep, host: &H, config: &DemoConfig) {
    log::info!("[Demo] Step {}: {}", step.index() + 1, step.title());

    if step == DemoStep::Welcome && !host.is_authenticated() {
        host.show_login();
    }

    if let Some(module) = step.module() {
        if !host.is_authenticated() && !host.login(&config.username, &config.password).await {
            log::warn!("[Demo] Auto-login failed, staying on the login view");
            host.overlay(step, step.duration(config));
            return;
        }
        host.overlay(step, step.duration(config));
        host.open(module).await;
    } else {
        host.overlay(step, step.duration(config));
    }
}

/// 退出演示后回到仪表盘
pub async fn leave<H: DemoHost + ?Sized>(host: &H) {
    if host.is_authenticated() {
        host.open(ModuleKind::Dashboard).await;
    }
}

#[cfg(test)]
mod tests;
