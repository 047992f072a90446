use super::DateRange;
use serde::{Deserialize, Serialize};

/// Search text and date range applied to a list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

/// Removable chip shown under the list toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChip {
    Search(String),
    Date(String),
}

impl FilterChip {
    pub fn label(&self) -> &str {
        match self {
            FilterChip::Search(label) | FilterChip::Date(label) => label,
        }
    }
}

impl QueryState {
    pub fn with_search(search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            date_range: None,
        }
    }

    pub fn with_date_range(date_range: DateRange) -> Self {
        Self {
            search_text: String::new(),
            date_range: Some(date_range),
        }
    }

    /// Active date range, `None` when unset or without a lower bound
    pub fn active_date_range(&self) -> Option<&DateRange> {
        self.date_range.as_ref().filter(|r| r.is_active())
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.is_empty() || self.active_date_range().is_some()
    }

    pub fn clear(&mut self) {
        self.search_text.clear();
        self.date_range = None;
    }

    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if !self.search_text.is_empty() {
            chips.push(FilterChip::Search(format!(
                "Búsqueda: \"{}\"",
                self.search_text
            )));
        }
        if let Some(label) = self.active_date_range().and_then(|r| r.label()) {
            chips.push(FilterChip::Date(label));
        }
        chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!QueryState::default().has_active_filters());
        assert!(QueryState::with_search("a").has_active_filters());
        assert!(QueryState::with_date_range(DateRange::starting(d(1))).has_active_filters());

        // a range with only `to` set is not a filter
        let only_to = QueryState::with_date_range(DateRange {
            from: None,
            to: Some(d(3)),
        });
        assert!(!only_to.has_active_filters());
        assert!(only_to.chips().is_empty());
    }

    #[test]
    fn test_chips() {
        let query = QueryState {
            search_text: "iphone".to_string(),
            date_range: Some(DateRange::new(d(1), d(15))),
        };
        assert_eq!(
            query.chips(),
            vec![
                FilterChip::Search("Búsqueda: \"iphone\"".to_string()),
                FilterChip::Date("01/01/2024 - 15/01/2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear() {
        let mut query = QueryState {
            search_text: "x".to_string(),
            date_range: Some(DateRange::starting(d(2))),
        };
        query.clear();
        assert_eq!(query, QueryState::default());
    }

    #[test]
    fn test_persisted_shape() {
        let query = QueryState {
            search_text: "mac".to_string(),
            date_range: Some(DateRange::new(d(1), d(7))),
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(
            json,
            r#"{"searchText":"mac","dateRange":{"from":"2024-01-01","to":"2024-01-07"}}"#
        );
        let restored: QueryState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored, QueryState::default());
    }
}
