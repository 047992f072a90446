use crate::domain::common::Record;
use crate::shared::list_query::Searchable;
use crate::shared::status::{Coded, StatusEntry, StatusTable, Tone};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// Closed enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    InReview,
    Approved,
    Rejected,
}

impl StatusTable for RequestStatus {
    const TABLE: &'static [StatusEntry<Self>] = &[
        StatusEntry { status: RequestStatus::Pending, code: "pending", label: "Pendiente", tone: Tone::Warning, icon: "clock" },
        StatusEntry { status: RequestStatus::InReview, code: "in_review", label: "En Revisión", tone: Tone::Info, icon: "eye" },
        StatusEntry { status: RequestStatus::Approved, code: "approved", label: "Aprobada", tone: Tone::Success, icon: "check-circle" },
        StatusEntry { status: RequestStatus::Rejected, code: "rejected", label: "Rechazada", tone: Tone::Danger, icon: "x-circle" },
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestPriority {
    Low,
    Medium,
    High,
}

impl StatusTable for RequestPriority {
    const TABLE: &'static [StatusEntry<Self>] = &[
        StatusEntry { status: RequestPriority::Low, code: "low", label: "Baja", tone: Tone::Success, icon: "flag" },
        StatusEntry { status: RequestPriority::Medium, code: "medium", label: "Media", tone: Tone::Warning, icon: "flag" },
        StatusEntry { status: RequestPriority::High, code: "high", label: "Alta", tone: Tone::Danger, icon: "flag" },
    ];
    const FALLBACK_ICON: &'static str = "flag";
}

/// Request types offered by the edit form. The field itself is free text,
/// values outside this list are shown as they are.
pub const REQUEST_TYPES: &[(&str, &str)] = &[
    ("access", "Acceso"),
    ("equipment", "Equipo"),
    ("leave", "Vacaciones"),
    ("training", "Capacitación"),
    ("budget", "Presupuesto"),
    ("other", "Otro"),
];

pub const DEPARTMENTS: &[&str] = &["IT", "Marketing", "Ventas", "RRHH", "Finanzas", "Operaciones"];

pub fn request_type_label(code: &str) -> &str {
    REQUEST_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, label)| *label)
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestComment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestAttachment {
    pub id: String,
    pub name: String,
    /// Human readable size as delivered ("245 KB")
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Internal request (access, equipment, leave...) raised by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub requester: String,
    #[serde(default)]
    pub requester_email: String,
    pub department: String,
    pub priority: Coded<RequestPriority>,
    pub status: Coded<RequestStatus>,
    #[serde(rename = "type")]
    pub request_type: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_to_email: String,
    #[serde(default)]
    pub comments: Vec<RequestComment>,
    #[serde(default)]
    pub attachments: Vec<RequestAttachment>,
}

impl Request {
    pub fn type_label(&self) -> &str {
        request_type_label(&self.request_type)
    }
}

/// Validated edit of a request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPatch {
    pub title: String,
    pub description: String,
    pub requester: String,
    pub requester_email: String,
    pub department: String,
    pub priority: Coded<RequestPriority>,
    pub status: Coded<RequestStatus>,
    pub request_type: String,
    pub due_date: NaiveDate,
    pub assigned_to: String,
}

impl From<&Request> for RequestPatch {
    fn from(r: &Request) -> Self {
        Self {
            title: r.title.clone(),
            description: r.description.clone(),
            requester: r.requester.clone(),
            requester_email: r.requester_email.clone(),
            department: r.department.clone(),
            priority: r.priority.clone(),
            status: r.status.clone(),
            request_type: r.request_type.clone(),
            due_date: r.due_date,
            assigned_to: r.assigned_to.clone(),
        }
    }
}

impl Record for Request {
    type Patch = RequestPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    fn apply(&mut self, patch: &RequestPatch) {
        self.title = patch.title.clone();
        self.description = patch.description.clone();
        self.requester = patch.requester.clone();
        self.requester_email = patch.requester_email.clone();
        self.department = patch.department.clone();
        self.priority = patch.priority.clone();
        self.status = patch.status.clone();
        self.request_type = patch.request_type.clone();
        self.due_date = patch.due_date;
        self.assigned_to = patch.assigned_to.clone();
        self.updated_at = Some(Utc::now());
    }

    fn element_name() -> &'static str {
        "Solicitud"
    }

    fn list_name() -> &'static str {
        "Solicitudes"
    }
}

impl Searchable for Request {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.requester.as_str()),
            Cow::Borrowed(self.department.as_str()),
            Cow::Borrowed(self.status.code()),
            Cow::Borrowed(self.priority.code()),
            Cow::Borrowed(self.request_type.as_str()),
        ]
    }
}

// ============================================================================
// Store-wide statistics
// ============================================================================

/// Counts by status over the whole store, not the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestStats {
    pub pending: usize,
    pub in_review: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl RequestStats {
    pub fn from_records(records: &[Request]) -> Self {
        let mut stats = Self::default();
        for record in records {
            match record.status.known() {
                Some(RequestStatus::Pending) => stats.pending += 1,
                Some(RequestStatus::InReview) => stats.in_review += 1,
                Some(RequestStatus::Approved) => stats.approved += 1,
                Some(RequestStatus::Rejected) => stats.rejected += 1,
                None => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_request::seed::mock_requests;

    #[test]
    fn test_stats_cover_whole_store() {
        let stats = RequestStats::from_records(&mock_requests());
        assert_eq!(
            stats,
            RequestStats {
                pending: 4,
                in_review: 3,
                approved: 3,
                rejected: 2,
            }
        );
    }

    #[test]
    fn test_type_label_passes_unknown_through() {
        assert_eq!(request_type_label("leave"), "Vacaciones");
        assert_eq!(request_type_label("maintenance"), "maintenance");
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "id": "99",
            "title": "Solicitud de Prueba",
            "requester": "Ana",
            "department": "IT",
            "priority": "urgent",
            "status": "in_review",
            "type": "other",
            "createdAt": "2024-01-15",
            "dueDate": "2024-01-20"
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, Coded::Known(RequestStatus::InReview));
        assert_eq!(request.priority.label(), "urgent");
        assert_eq!(request.priority.tone(), Tone::Neutral);
        assert!(request.comments.is_empty());

        let back = serde_json::to_value(&request).unwrap();
        assert_eq!(back["type"], "other");
        assert_eq!(back["dueDate"], "2024-01-20");
        assert_eq!(back["priority"], "urgent");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut request = mock_requests().remove(0);
        let mut patch = RequestPatch::from(&request);
        patch.status = RequestStatus::Approved.into();
        patch.title = "Acceso VPN aprobado".to_string();
        request.apply(&patch);

        assert_eq!(request.id, "1");
        assert!(request.status.is(RequestStatus::Approved));
        assert_eq!(request.title, "Acceso VPN aprobado");
        assert!(request.updated_at.is_some());
    }
}
