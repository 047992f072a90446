use serde::{Deserialize, Serialize};

/// Headline figure with its change since last month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    /// Pre-formatted value ("2,543")
    pub value: String,
    /// Pre-formatted change ("+12%")
    pub change: String,
    pub positive: bool,
    /// Icon name for the frontend icon set
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Create,
    Update,
    Delete,
}

impl ActivityKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityKind::Create => "activity-dot activity-dot--create",
            ActivityKind::Update => "activity-dot activity-dot--update",
            ActivityKind::Delete => "activity-dot activity-dot--delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u32,
    pub user: String,
    pub action: String,
    /// Relative time as shown ("hace 2 minutos")
    pub time: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub icon: String,
    /// Target path, `None` for actions without a page yet
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetric {
    pub label: String,
    pub value: String,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<RecentActivity>,
    pub quick_actions: Vec<QuickAction>,
    pub system_status: Vec<SystemMetric>,
}

fn stat(title: &str, value: &str, change: &str, icon: &str) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        positive: !change.starts_with('-'),
        icon: icon.to_string(),
    }
}

fn activity(id: u32, user: &str, action: &str, time: &str, kind: ActivityKind) -> RecentActivity {
    RecentActivity {
        id,
        user: user.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        kind,
    }
}

fn action(label: &str, icon: &str, href: Option<&str>) -> QuickAction {
    QuickAction {
        label: label.to_string(),
        icon: icon.to_string(),
        href: href.map(str::to_string),
    }
}

fn metric(label: &str, value: &str) -> SystemMetric {
    SystemMetric {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// Static dashboard content; there is no data source behind it
pub fn overview() -> DashboardOverview {
    use ActivityKind::*;

    DashboardOverview {
        stats: vec![
            stat("Total Usuarios", "2,543", "+12%", "users"),
            stat("Posts Publicados", "1,234", "+8%", "file-text"),
            stat("Visitas Mensuales", "45,678", "+23%", "trending-up"),
            stat("Ingresos", "$12,345", "-2%", "dollar"),
        ],
        recent_activity: vec![
            activity(1, "Juan Pérez", "creó un nuevo post", "hace 2 minutos", Create),
            activity(2, "María García", "actualizó su perfil", "hace 5 minutos", Update),
            activity(3, "Carlos López", "eliminó un comentario", "hace 10 minutos", Delete),
            activity(4, "Ana Martín", "se registró en la plataforma", "hace 15 minutos", Create),
            activity(5, "Pedro Ruiz", "cambió su contraseña", "hace 20 minutos", Update),
        ],
        quick_actions: vec![
            action("Gestionar Usuarios", "users", Some("/users")),
            action("Crear Post", "file-text", None),
            action("Ver Reportes", "trending-up", Some("/reports")),
            action("Configurar Pagos", "dollar", Some("/settings")),
        ],
        system_status: vec![
            metric("Tiempo de Actividad", "99.9%"),
            metric("Tiempo de Respuesta", "1.2s"),
            metric("Almacenamiento Usado", "45GB"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_content() {
        let overview = overview();
        assert_eq!(overview.stats.len(), 4);
        assert_eq!(overview.recent_activity.len(), 5);
        assert_eq!(overview.system_status[0].value, "99.9%");
    }

    #[test]
    fn test_change_sign_sets_positive() {
        let overview = overview();
        let negatives: Vec<&str> = overview
            .stats
            .iter()
            .filter(|s| !s.positive)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(negatives, vec!["Ingresos"]);
    }
}
