//! 占位操作
//!
//! 列表中的"新建 / 查看 / 编辑"按钮尚未接入后端，点击后只提示"En desarrollo"。
//! 按钮通过 `data-action` 属性携带编码后的操作，由外壳统一处理点击。

/// 可操作的实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Document,
    Incident,
    NonConformity,
    Audit,
    Kpi,
    Plan,
    Simulation,
}

impl Entity {
    const ALL: [Entity; 7] = [
        Entity::Document,
        Entity::Incident,
        Entity::NonConformity,
        Entity::Audit,
        Entity::Kpi,
        Entity::Plan,
        Entity::Simulation,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Incident => "incident",
            Self::NonConformity => "non-conformity",
            Self::Audit => "audit",
            Self::Kpi => "kpi",
            Self::Plan => "plan",
            Self::Simulation => "simulation",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.slug() == slug)
    }

    fn noun(&self) -> &'static str {
        match self {
            Self::Document => "documento",
            Self::Incident => "incidente",
            Self::NonConformity => "no conformidad",
            Self::Audit => "auditoría",
            Self::Kpi => "KPI",
            Self::Plan => "plan",
            Self::Simulation => "simulación",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderAction {
    Create(Entity),
    View(Entity, i64),
    Edit(Entity, i64),
}

impl PlaceholderAction {
    /// 编码为 `data-action` 属性值，如 `view:document:3`
    pub fn encode(&self) -> String {
        match self {
            Self::Create(entity) => format!("create:{}", entity.slug()),
            Self::View(entity, id) => format!("view:{}:{}", entity.slug(), id),
            Self::Edit(entity, id) => format!("edit:{}:{}", entity.slug(), id),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(':');
        let verb = parts.next()?;
        let entity = Entity::from_slug(parts.next()?)?;
        let id = parts.next().map(str::parse::<i64>);
        if parts.next().is_some() {
            return None;
        }

        match (verb, id) {
            ("create", None) => Some(Self::Create(entity)),
            ("view", Some(Ok(id))) => Some(Self::View(entity, id)),
            ("edit", Some(Ok(id))) => Some(Self::Edit(entity, id)),
            _ => None,
        }
    }

    /// 提示文案
    pub fn message(&self) -> String {
        match self {
            Self::Create(entity) => format!("Formulario de {} - En desarrollo", entity.noun()),
            Self::View(entity, id) => format!("Ver {} {} - En desarrollo", entity.noun(), id),
            Self::Edit(entity, id) => format!("Editar {} {} - En desarrollo", entity.noun(), id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encoded_actions() {
        let action = PlaceholderAction::View(Entity::NonConformity, 12);
        assert_eq!(action.encode(), "view:non-conformity:12");
        assert_eq!(PlaceholderAction::parse(&action.encode()), Some(action));
        assert_eq!(
            PlaceholderAction::parse("create:kpi"),
            Some(PlaceholderAction::Create(Entity::Kpi))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_actions() {
        for raw in ["", "view", "view:document", "view:document:x", "create:kpi:3", "delete:plan:1", "edit:unknown:1", "edit:plan:1:2"] {
            assert_eq!(PlaceholderAction::parse(raw), None, "raw {raw}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PlaceholderAction::Create(Entity::Audit).message(),
            "Formulario de auditoría - En desarrollo"
        );
        assert_eq!(
            PlaceholderAction::View(Entity::Kpi, 3).message(),
            "Ver KPI 3 - En desarrollo"
        );
        assert_eq!(
            PlaceholderAction::Edit(Entity::Incident, 7).message(),
            "Editar incidente 7 - En desarrollo"
        );
    }
}
