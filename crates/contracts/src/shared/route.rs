//! Navigation targets of the console
//!
//! The shell keeps one active [`Route`]; detail and edit views read their
//! record id from it and ask for a new route instead of touching the URL.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Requests,
    RequestDetail(String),
    RequestEdit(String),
    Preorders,
    PreorderDetail(String),
    PreorderEdit(String),
    Users,
    Reports,
    Settings,
    /// Path that matches nothing; the raw path is kept for the message
    NotFound(String),
}

impl Route {
    /// Parse a path such as `/preorders/3/edit`. Query string, fragment and
    /// trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Dashboard,
            ["requests"] => Route::Requests,
            ["requests", id] => Route::RequestDetail(id.to_string()),
            ["requests", id, "edit"] => Route::RequestEdit(id.to_string()),
            ["preorders"] => Route::Preorders,
            ["preorders", id] => Route::PreorderDetail(id.to_string()),
            ["preorders", id, "edit"] => Route::PreorderEdit(id.to_string()),
            ["users"] => Route::Users,
            ["reports"] => Route::Reports,
            ["settings"] => Route::Settings,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Requests => "/requests".to_string(),
            Route::RequestDetail(id) => format!("/requests/{}", id),
            Route::RequestEdit(id) => format!("/requests/{}/edit", id),
            Route::Preorders => "/preorders".to_string(),
            Route::PreorderDetail(id) => format!("/preorders/{}", id),
            Route::PreorderEdit(id) => format!("/preorders/{}/edit", id),
            Route::Users => "/users".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Browser tab / page title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Requests => "Solicitudes",
            Route::RequestDetail(_) => "Detalle de Solicitud",
            Route::RequestEdit(_) => "Editar Solicitud",
            Route::Preorders => "Prepedidos",
            Route::PreorderDetail(_) => "Detalle de Prepedido",
            Route::PreorderEdit(_) => "Editar Prepedido",
            Route::Users => "Usuarios",
            Route::Reports => "Reportes",
            Route::Settings => "Configuración",
            Route::NotFound(_) => "Página no encontrada",
        }
    }

    /// Whether a sidebar entry pointing at `href` should be highlighted.
    /// The dashboard matches only itself, other sections match their
    /// sub-pages too.
    pub fn is_within(&self, href: &str) -> bool {
        let path = self.path();
        if href == "/" {
            return path == "/";
        }
        path == href || path.starts_with(&format!("{}/", href))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/requests/"), Route::Requests);
        assert_eq!(Route::parse("/requests/7"), Route::RequestDetail("7".to_string()));
        assert_eq!(
            Route::parse("/preorders/3/edit?x=1"),
            Route::PreorderEdit("3".to_string())
        );
        assert_eq!(Route::parse("/settings"), Route::Settings);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            Route::parse("/preorders/new/extra/stuff"),
            Route::NotFound("/preorders/new/extra/stuff".to_string())
        );
        assert!(matches!(Route::parse("/nope"), Route::NotFound(_)));
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Dashboard,
            Route::Requests,
            Route::RequestEdit("12".to_string()),
            Route::PreorderDetail("1".to_string()),
            Route::Users,
            Route::Reports,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_is_within() {
        let detail = Route::PreorderDetail("4".to_string());
        assert!(detail.is_within("/preorders"));
        assert!(!detail.is_within("/"));
        assert!(!detail.is_within("/requests"));
        assert!(Route::Dashboard.is_within("/"));
        assert!(!Route::Preorders.is_within("/pre"));
    }
}
