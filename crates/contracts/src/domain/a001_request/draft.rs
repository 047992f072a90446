use super::aggregate::{Request, RequestPatch};
use crate::domain::common::validation::{parse_date, require};
use crate::domain::common::ValidationErrors;
use crate::shared::status::Coded;
use serde::{Deserialize, Serialize};

pub const FIELD_TITLE: &str = "Título";
pub const FIELD_REQUESTER: &str = "Solicitante";
pub const FIELD_DUE_DATE: &str = "Fecha Límite";

/// Raw values of the request edit form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    pub title: String,
    pub description: String,
    pub requester: String,
    pub requester_email: String,
    pub department: String,
    pub priority: String,
    pub status: String,
    pub request_type: String,
    /// `yyyy-mm-dd`
    pub due_date: String,
    pub assigned_to: String,
}

impl From<&Request> for RequestDraft {
    fn from(r: &Request) -> Self {
        Self {
            title: r.title.clone(),
            description: r.description.clone(),
            requester: r.requester.clone(),
            requester_email: r.requester_email.clone(),
            department: r.department.clone(),
            priority: r.priority.code().to_string(),
            status: r.status.code().to_string(),
            request_type: r.request_type.clone(),
            due_date: r.due_date.format("%Y-%m-%d").to_string(),
            assigned_to: r.assigned_to.clone(),
        }
    }
}

impl RequestDraft {
    pub fn validate(&self) -> Result<RequestPatch, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = errors.collect(require(FIELD_TITLE, &self.title));
        let requester = errors.collect(require(FIELD_REQUESTER, &self.requester));
        let due_date = errors.collect(parse_date(FIELD_DUE_DATE, &self.due_date));

        match (title, requester, due_date) {
            (Some(title), Some(requester), Some(due_date)) => Ok(RequestPatch {
                title,
                description: self.description.trim().to_string(),
                requester,
                requester_email: self.requester_email.trim().to_string(),
                department: self.department.clone(),
                priority: Coded::parse(&self.priority),
                status: Coded::parse(&self.status),
                request_type: self.request_type.clone(),
                due_date,
                assigned_to: self.assigned_to.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_request::aggregate::RequestStatus;
    use crate::domain::a001_request::seed::mock_requests;
    use crate::domain::common::ValidationError;
    use chrono::NaiveDate;

    #[test]
    fn test_unchanged_draft_validates_to_same_values() {
        let request = mock_requests().remove(0);
        let patch = RequestDraft::from(&request).validate().unwrap();
        assert_eq!(patch, RequestPatch::from(&request));
    }

    #[test]
    fn test_edit_status_and_due_date() {
        let request = mock_requests().remove(1);
        let mut draft = RequestDraft::from(&request);
        draft.status = "rejected".to_string();
        draft.due_date = "2024-03-01".to_string();

        let patch = draft.validate().unwrap();
        assert!(patch.status.is(RequestStatus::Rejected));
        assert_eq!(patch.due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut draft = RequestDraft::from(&mock_requests()[0]);
        draft.title = "   ".to_string();
        draft.due_date = String::new();

        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.0,
            vec![
                ValidationError::Required { field: FIELD_TITLE },
                ValidationError::Required { field: FIELD_DUE_DATE },
            ]
        );
    }
}
