use super::filter::{filter_records, Searchable};
use super::{DateRange, PageSummary, Pager, QueryState};
use crate::domain::common::Record;

/// Query and page position of one list view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    pub query: QueryState,
    pub pager: Pager,
}

/// What a table renders at a given instant
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<T> {
    /// All matching records, in store order
    pub filtered: Vec<T>,
    /// Records of the current page
    pub page: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: Vec<usize>,
    pub summary: PageSummary,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> DerivedView<T> {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }
}

impl ListState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            query: QueryState::default(),
            pager: Pager::new(items_per_page),
        }
    }

    pub fn with_query(query: QueryState, items_per_page: usize) -> Self {
        Self {
            query,
            pager: Pager::new(items_per_page),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.query.search_text != text {
            self.query.search_text = text;
            self.pager.reset();
        }
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        if self.query.date_range != range {
            self.query.date_range = range;
            self.pager.reset();
        }
    }

    pub fn clear_search(&mut self) {
        self.set_search_text(String::new());
    }

    pub fn clear_date_range(&mut self) {
        self.set_date_range(None);
    }

    /// Drop both filters and go back to page 1
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.pager.reset();
    }

    pub fn go_to_page(&mut self, page: usize, filtered_count: usize) {
        self.pager.go_to_page(page, filtered_count);
    }

    /// Filter then paginate. The page shown is always within range even if
    /// the stored one is stale.
    pub fn view<T: Record + Searchable>(&self, records: &[T]) -> DerivedView<T> {
        let filtered = filter_records(records, &self.query);
        let count = filtered.len();

        let mut pager = self.pager;
        pager.clamp(count);

        DerivedView {
            page: pager.visible_slice(&filtered).to_vec(),
            current_page: pager.current_page,
            total_pages: pager.total_pages(count),
            window: pager.page_window(count),
            summary: pager.summary(count),
            has_previous: pager.has_previous(),
            has_next: pager.has_next(count),
            filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_preorder::seed::mock_preorders;
    use crate::shared::list_query::DatePreset;
    use chrono::NaiveDate;

    fn page_ids<T: Record>(view: &DerivedView<T>) -> Vec<String> {
        view.page.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_unfiltered_twelve_preorders() {
        let records = mock_preorders();
        let mut state = ListState::new(10);

        let view = state.view(&records);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.filtered_count(), 12);
        assert_eq!(page_ids(&view), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());
        assert_eq!(view.window, vec![1, 2]);

        state.go_to_page(2, view.filtered_count());
        let view = state.view(&records);
        assert_eq!(page_ids(&view), vec!["11", "12"]);
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn test_search_resets_page_and_fits_one_page() {
        let records = mock_preorders();
        let mut state = ListState::new(10);
        state.go_to_page(2, records.len());

        state.set_search_text("iphone");
        assert_eq!(state.pager.current_page, 1);
        let view = state.view(&records);
        assert_eq!(view.total_pages, 1);
        assert_eq!(page_ids(&view), vec!["1", "8"]);
    }

    #[test]
    fn test_page_stays_in_range_after_any_query_change() {
        let records = mock_preorders();
        let today = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let mut state = ListState::new(5);

        let changes: Vec<Box<dyn Fn(&mut ListState)>> = vec![
            Box::new(|s: &mut ListState| s.set_search_text("pro")),
            Box::new(move |s: &mut ListState| s.set_date_range(Some(DatePreset::Last7Days.resolve(today)))),
            Box::new(|s: &mut ListState| s.clear_search()),
            Box::new(|s: &mut ListState| s.set_search_text("zzz")),
            Box::new(|s: &mut ListState| s.clear_filters()),
        ];
        for change in changes {
            state.go_to_page(3, records.len());
            change(&mut state);
            assert_eq!(state.pager.current_page, 1);
            let view = state.view(&records);
            assert!(view.current_page >= 1);
            assert!(view.current_page <= view.total_pages);
        }
    }

    #[test]
    fn test_stale_page_is_clamped_in_view() {
        let records = mock_preorders();
        let mut state = ListState::new(10);
        state.pager.current_page = 2;
        state.query.search_text = "ipad".to_string();

        let view = state.view(&records);
        assert_eq!(view.current_page, 1);
        assert_eq!(page_ids(&view), vec!["3", "6"]);
        assert!(!view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn test_clear_filters_is_idempotent() {
        let mut state = ListState::new(10);
        state.set_search_text("mac");
        state.set_date_range(Some(DateRange::starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())));
        state.clear_filters();
        let once = state.clone();
        state.clear_filters();
        assert_eq!(state, once);
        assert_eq!(state.query.search_text, "");
        assert_eq!(state.query.date_range, None);
        assert_eq!(state.pager.current_page, 1);
    }

    #[test]
    fn test_empty_result() {
        let records = mock_preorders();
        let mut state = ListState::new(10);
        state.set_search_text("nothing matches this");
        let view = state.view(&records);
        assert_eq!(view.total_pages, 1);
        assert!(view.page.is_empty());
        assert_eq!(view.summary.label(), "Mostrando 0 a 0 de 0 resultados");
    }
}
