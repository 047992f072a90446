use super::QueryState;
use crate::domain::common::Record;
use std::borrow::Cow;

/// Fields of a record that take part in the text search
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Text clause AND date clause. Pure: neither the record nor the query is
/// touched.
pub fn matches<T: Record + Searchable>(record: &T, query: &QueryState) -> bool {
    matches_text(record, &query.search_text)
        && query
            .active_date_range()
            .map_or(true, |range| range.contains(record.created_at()))
}

fn matches_text<T: Searchable>(record: &T, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `query`, in source order
pub fn filter_records<T: Record + Searchable>(records: &[T], query: &QueryState) -> Vec<T> {
    records
        .iter()
        .filter(|r| matches(*r, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_request::seed::mock_requests;
    use crate::domain::a002_preorder::seed::mock_preorders;
    use crate::shared::list_query::{DatePreset, DateRange};
    use chrono::NaiveDate;

    fn ids<T: Record>(records: &[T]) -> Vec<&str> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_iphone_matches_two_preorders() {
        let records = mock_preorders();
        let found = filter_records(&records, &QueryState::with_search("iphone"));
        assert_eq!(ids(&found), vec!["1", "8"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_untrimmed() {
        let records = mock_preorders();
        let upper = filter_records(&records, &QueryState::with_search("MACBOOK"));
        assert_eq!(ids(&upper), vec!["2", "7"]);
        // trailing space is part of the needle
        let spaced = filter_records(&records, &QueryState::with_search("iphone 15 "));
        assert_eq!(ids(&spaced), vec!["1"]);
    }

    #[test]
    fn test_search_by_codes_and_amount() {
        let preorders = mock_preorders();
        let refunded = filter_records(&preorders, &QueryState::with_search("refunded"));
        assert_eq!(ids(&refunded), vec!["5", "11"]);
        let amount = filter_records(&preorders, &QueryState::with_search("2398"));
        assert_eq!(ids(&amount), vec!["1"]);

        let requests = mock_requests();
        let in_review = filter_records(&requests, &QueryState::with_search("in_review"));
        assert_eq!(ids(&in_review), vec!["4", "7", "12"]);
        let rrhh = filter_records(&requests, &QueryState::with_search("rrhh"));
        assert_eq!(ids(&rrhh), vec!["4", "10"]);
    }

    #[test]
    fn test_every_included_record_contains_the_text() {
        let records = mock_requests();
        for needle in ["sol", "an", "high", "xyz", "é"] {
            let query = QueryState::with_search(needle);
            for record in &records {
                let hit = record
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(needle));
                assert_eq!(matches(record, &query), hit, "{needle} / {}", record.id);
            }
        }
    }

    #[test]
    fn test_last_seven_days_window() {
        let records = mock_preorders();
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let query = QueryState::with_date_range(DatePreset::Last7Days.resolve(today));
        let found = filter_records(&records, &query);
        assert_eq!(ids(&found), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_date_bounds_are_inclusive_and_combine_with_text() {
        let records = mock_preorders();
        let from = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut query = QueryState::with_date_range(DateRange::new(from, to));
        let found = filter_records(&records, &query);
        assert_eq!(ids(&found), vec!["4", "5", "6", "7", "8"]);
        for record in &found {
            assert!(record.created_at >= from && record.created_at <= to);
        }

        query.search_text = "ipad".to_string();
        assert_eq!(ids(&filter_records(&records, &query)), vec!["6"]);
    }

    #[test]
    fn test_matches_is_pure() {
        let records = mock_preorders();
        let before = records.clone();
        let query = QueryState::with_search("pro");
        let first = filter_records(&records, &query);
        let second = filter_records(&records, &query);
        assert_eq!(first, second);
        assert_eq!(records, before);
    }
}
