//! 视图渲染
//!
//! 将获取到的数据映射为 HTML 片段 (`Markup`)。纯函数：
//! 不访问网络或存储，"现在"由调用方显式传入。
//! 所有插入的记录文本都经过 HTML 转义。

pub mod actions;

use std::fmt::{self, Display, Write};

use chrono::{DateTime, Utc};
use html_escape::encode_quoted_attribute as escape;
use sgcn_shared::date::format_relative;
use sgcn_shared::status::{ActivityColor, BadgeColor};
use sgcn_shared::{
    Activity, Audit, ContinuityPlan, DashboardStats, Document, Incident, Kpi, NonConformity,
    Simulation,
};

use self::actions::{Entity, PlaceholderAction};

/// HTML 片段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =========================================================
// 通用片段
// =========================================================

pub fn loading() -> Markup {
    Markup(r#"<div class="loading"><div class="spinner"></div><span>Cargando...</span></div>"#.into())
}

pub fn module_error() -> Markup {
    Markup(r#"<div class="alert alert-error">Error al cargar el módulo</div>"#.into())
}

fn badge(status: &str) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        BadgeColor::for_status(status),
        escape(status)
    )
}

fn date_or_na(raw: Option<&str>, now: DateTime<Utc>) -> String {
    match raw {
        Some(raw) => escape(&format_relative(raw, now)).into_owned(),
        None => "N/A".to_string(),
    }
}

fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> String {
    escape(value.unwrap_or(fallback)).into_owned()
}

fn action_button(action: PlaceholderAction, class: &str, label: &str) -> String {
    format!(
        r#"<button class="btn {}" data-action="{}">{}</button>"#,
        class,
        action.encode(),
        label
    )
}

fn row_actions(entity: Entity, id: i64) -> String {
    format!(
        r#"<td class="actions">{}{}</td>"#,
        action_button(PlaceholderAction::View(entity, id), "btn-sm btn-ghost", "Ver"),
        action_button(PlaceholderAction::Edit(entity, id), "btn-sm btn-ghost", "Editar"),
    )
}

/// 带标题、新建按钮的表格卡片
fn table_card(
    title: &str,
    create: (Entity, &str),
    headers: &[&str],
    rows: impl Iterator<Item = String>,
) -> Markup {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="card"><div class="card-header"><h2>{}</h2>{}</div>"#,
        title,
        action_button(PlaceholderAction::Create(create.0), "btn-primary", create.1)
    );
    html.push_str(r#"<table class="table"><thead><tr>"#);
    for header in headers {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str(&row);
    }
    html.push_str("</tbody></table></div>");
    Markup(html)
}

// =========================================================
// 仪表盘
// =========================================================

fn stat_card(label: &str, value: u64, detail: String) -> String {
    format!(
        r#"<div class="stat-card"><div class="stat-label">{}</div><div class="stat-value">{}</div><div class="stat-detail">{}</div></div>"#,
        label, value, detail
    )
}

fn activity_item(activity: &Activity, now: DateTime<Utc>) -> String {
    format!(
        r#"<li class="activity-item"><span class="activity-dot activity-{}"></span><div class="activity-body"><div class="activity-title">{}</div><div class="activity-meta">{} · {}</div></div></li>"#,
        ActivityColor::for_kind(&activity.kind),
        escape(&activity.title),
        escape(&activity.user),
        escape(&format_relative(&activity.date, now)),
    )
}

pub fn dashboard(stats: &DashboardStats, now: DateTime<Utc>) -> Markup {
    let mut html = String::from(r#"<div class="stats-grid">"#);
    html.push_str(&stat_card(
        "Documentos",
        stats.total_documents,
        format!("{} pendientes", stats.pending_documents),
    ));
    html.push_str(&stat_card(
        "Incidentes Abiertos",
        stats.open_incidents,
        format!("de {} totales", stats.total_incidents),
    ));
    html.push_str(&stat_card(
        "No Conformidades",
        stats.open_non_conformities,
        format!("de {} totales", stats.total_non_conformities),
    ));
    html.push_str(&stat_card(
        "Auditorías Planificadas",
        stats.planned_audits,
        format!("de {} totales", stats.total_audits),
    ));
    html.push_str("</div>");

    html.push_str(r#"<div class="card"><div class="card-header"><h2>Actividades Recientes</h2></div>"#);
    if stats.recent_activities.is_empty() {
        html.push_str(r#"<p class="empty">No hay actividades recientes</p>"#);
    } else {
        html.push_str(r#"<ul class="activity-list">"#);
        for activity in &stats.recent_activities {
            html.push_str(&activity_item(activity, now));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>");
    Markup(html)
}

// =========================================================
// 列表视图
// =========================================================

pub fn documents(docs: &[Document], now: DateTime<Utc>) -> Markup {
    table_card(
        "Gestión Documental",
        (Entity::Document, "Nuevo Documento"),
        &["Título", "Tipo", "Versión", "Estado", "Creado", "Acciones"],
        docs.iter().map(|doc| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
                escape(&doc.title),
                escape(&doc.document_type),
                escape(&doc.version),
                badge(&doc.status),
                date_or_na(doc.created_at.as_deref(), now),
                row_actions(Entity::Document, doc.id),
            )
        }),
    )
}

pub fn incidents(items: &[Incident], now: DateTime<Utc>) -> Markup {
    table_card(
        "Gestión de Incidentes",
        (Entity::Incident, "Nuevo Incidente"),
        &["Título", "Tipo", "Prioridad", "Estado", "Creado", "Acciones"],
        items.iter().map(|incident| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td><span class="priority priority-{}">{}</span></td><td>{}</td><td>{}</td>{}</tr>"#,
                escape(&incident.title),
                escape(&incident.incident_type),
                escape(&incident.priority),
                escape(&incident.priority.to_uppercase()),
                badge(&incident.status),
                date_or_na(incident.created_at.as_deref(), now),
                row_actions(Entity::Incident, incident.id),
            )
        }),
    )
}

pub fn non_conformities(items: &[NonConformity], now: DateTime<Utc>) -> Markup {
    table_card(
        "No Conformidades",
        (Entity::NonConformity, "Nueva No Conformidad"),
        &["Título", "Severidad", "Estado", "Ubicación", "Creado", "Acciones"],
        items.iter().map(|nc| {
            format!(
                r#"<tr><td>{}</td><td><span class="priority priority-{}">{}</span></td><td>{}</td><td>{}</td><td>{}</td>{}</tr>"#,
                escape(&nc.title),
                escape(&nc.severity),
                escape(&nc.severity.to_uppercase()),
                badge(&nc.status),
                text_or(nc.location.as_deref(), "N/A"),
                date_or_na(nc.created_at.as_deref(), now),
                row_actions(Entity::NonConformity, nc.id),
            )
        }),
    )
}

pub fn audits(items: &[Audit], now: DateTime<Utc>) -> Markup {
    table_card(
        "Auditorías",
        (Entity::Audit, "Nueva Auditoría"),
        &["Título", "Tipo", "Estado", "Inicio Planificado", "Hallazgos", "Acciones"],
        items.iter().map(|audit| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
                escape(&audit.title),
                escape(&audit.audit_type),
                badge(&audit.status),
                date_or_na(audit.planned_start_date.as_deref(), now),
                audit.findings_count,
                row_actions(Entity::Audit, audit.id),
            )
        }),
    )
}

pub fn kpis(items: &[Kpi]) -> Markup {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="card"><div class="card-header"><h2>Indicadores (KPIs)</h2>{}</div><div class="kpi-grid">"#,
        action_button(PlaceholderAction::Create(Entity::Kpi), "btn-primary", "Nuevo KPI")
    );
    for kpi in items {
        let target = kpi
            .target_value
            .map_or_else(|| "N/A".to_string(), |v| v.to_string());
        let _ = write!(
            html,
            r#"<div class="kpi-card"><h3>{}</h3><p>{}</p><div class="kpi-target">Meta: {} {}</div>{}</div>"#,
            escape(&kpi.name),
            text_or(kpi.description.as_deref(), "Sin descripción"),
            target,
            escape(&kpi.measurement_unit),
            action_button(PlaceholderAction::View(Entity::Kpi, kpi.id), "btn-sm btn-ghost", "Ver"),
        );
    }
    html.push_str("</div></div>");
    Markup(html)
}

pub fn business_continuity(plans: &[ContinuityPlan], simulations: &[Simulation]) -> Markup {
    let mut html = String::from(r#"<div class="continuity-grid">"#);

    let _ = write!(
        html,
        r#"<div class="card"><div class="card-header"><h2>Planes de Continuidad</h2>{}</div><ul class="plan-list">"#,
        action_button(PlaceholderAction::Create(Entity::Plan), "btn-primary", "Nuevo Plan")
    );
    for plan in plans {
        let rto = plan
            .rto_hours
            .map_or_else(|| "N/A".to_string(), |h| format!("{}h", h));
        let _ = write!(
            html,
            r#"<li class="plan-item"><div class="plan-title">{}</div><p>{}</p><div class="plan-meta">{}<span>RTO: {}</span></div>{}</li>"#,
            escape(&plan.title),
            text_or(plan.description.as_deref(), "Sin descripción"),
            badge(&plan.status),
            rto,
            action_button(PlaceholderAction::View(Entity::Plan, plan.id), "btn-sm btn-ghost", "Ver"),
        );
    }
    html.push_str("</ul></div>");

    let _ = write!(
        html,
        r#"<div class="card"><div class="card-header"><h2>Simulacros</h2>{}</div><ul class="simulation-list">"#,
        action_button(PlaceholderAction::Create(Entity::Simulation), "btn-primary", "Nuevo Simulacro")
    );
    for simulation in simulations {
        let rate = simulation
            .success_rate
            .map(|r| format!(r#"<span class="success-rate">Éxito: {}%</span>"#, r))
            .unwrap_or_default();
        let _ = write!(
            html,
            r#"<li class="simulation-item"><div class="simulation-title">{}</div><p>{}</p><div class="simulation-meta">{}{}</div>{}</li>"#,
            escape(&simulation.title),
            text_or(simulation.scenario.as_deref(), "Sin escenario"),
            badge(&simulation.status),
            rate,
            action_button(
                PlaceholderAction::View(Entity::Simulation, simulation.id),
                "btn-sm btn-ghost",
                "Ver"
            ),
        );
    }
    html.push_str("</ul></div></div>");
    Markup(html)
}
