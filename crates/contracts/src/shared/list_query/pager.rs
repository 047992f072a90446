/// Max number of page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// 1-indexed page position over a filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Pager {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    /// Never less than one page, an empty list still shows page 1
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.items_per_page).max(1)
    }

    pub fn go_to_page(&mut self, page: usize, filtered_count: usize) {
        self.current_page = page.clamp(1, self.total_pages(filtered_count));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Snap the current page back into range after the filtered size changed
    pub fn clamp(&mut self, filtered_count: usize) {
        let total = self.total_pages(filtered_count);
        if self.current_page > total || self.current_page == 0 {
            log::debug!(
                "Page {} out of range for {} pages, clamping",
                self.current_page,
                total
            );
            self.current_page = self.current_page.clamp(1, total);
        }
    }

    /// Index range of the current page within the filtered list
    pub fn range(&self, filtered_count: usize) -> (usize, usize) {
        let page = self.current_page.max(1);
        let start = ((page - 1) * self.items_per_page).min(filtered_count);
        let end = (page * self.items_per_page).min(filtered_count);
        (start, end)
    }

    pub fn visible_slice<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let (start, end) = self.range(filtered.len());
        &filtered[start..end]
    }

    /// Page numbers for the pagination buttons, at most [`PAGE_WINDOW`],
    /// centered on the current page and shifted at both ends
    pub fn page_window(&self, filtered_count: usize) -> Vec<usize> {
        let total = self.total_pages(filtered_count);
        if total <= PAGE_WINDOW {
            return (1..=total).collect();
        }
        let current = self.current_page.clamp(1, total);
        let half = PAGE_WINDOW / 2;
        let start = if current <= half + 1 {
            1
        } else if current + half >= total {
            total + 1 - PAGE_WINDOW
        } else {
            current - half
        };
        (start..start + PAGE_WINDOW).collect()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, filtered_count: usize) -> bool {
        self.current_page < self.total_pages(filtered_count)
    }

    pub fn summary(&self, filtered_count: usize) -> PageSummary {
        let (start, end) = self.range(filtered_count);
        PageSummary {
            from: if end > start { start + 1 } else { 0 },
            to: end,
            total: filtered_count,
        }
    }
}

/// "Mostrando a a b de n resultados"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn label(&self) -> String {
        format!(
            "Mostrando {} a {} de {} resultados",
            self.from, self.to, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_floor_is_one() {
        let pager = Pager::new(10);
        assert_eq!(pager.total_pages(0), 1);
        assert_eq!(pager.total_pages(10), 1);
        assert_eq!(pager.total_pages(11), 2);
        assert_eq!(pager.total_pages(12), 2);
    }

    #[test]
    fn test_visible_slice_of_empty_list() {
        let pager = Pager::new(10);
        let empty: Vec<u32> = Vec::new();
        assert!(pager.visible_slice(&empty).is_empty());
        assert_eq!(pager.summary(0).label(), "Mostrando 0 a 0 de 0 resultados");
    }

    #[test]
    fn test_twelve_items_two_pages() {
        let items: Vec<u32> = (1..=12).collect();
        let mut pager = Pager::new(10);
        assert_eq!(pager.visible_slice(&items), &items[..10]);
        assert_eq!(pager.summary(12).label(), "Mostrando 1 a 10 de 12 resultados");
        assert!(pager.has_next(12));
        assert!(!pager.has_previous());

        pager.go_to_page(2, 12);
        assert_eq!(pager.visible_slice(&items), &[11, 12]);
        assert_eq!(pager.summary(12).label(), "Mostrando 11 a 12 de 12 resultados");
        assert!(!pager.has_next(12));
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut pager = Pager::new(10);
        pager.go_to_page(7, 25);
        assert_eq!(pager.current_page, 3);
        pager.go_to_page(0, 25);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Pager::new(10);
        pager.go_to_page(3, 30);
        pager.clamp(12);
        assert_eq!(pager.current_page, 2);
        pager.clamp(0);
        assert_eq!(pager.current_page, 1);
    }

    #[test]
    fn test_stale_page_slice_does_not_panic() {
        let pager = Pager {
            current_page: 9,
            items_per_page: 10,
        };
        let items: Vec<u32> = (1..=12).collect();
        assert!(pager.visible_slice(&items).is_empty());
    }

    #[test]
    fn test_page_window() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.page_window(30), vec![1, 2, 3]);

        // 10 pages
        for (page, expected) in [
            (1, vec![1, 2, 3, 4, 5]),
            (3, vec![1, 2, 3, 4, 5]),
            (4, vec![2, 3, 4, 5, 6]),
            (7, vec![5, 6, 7, 8, 9]),
            (8, vec![6, 7, 8, 9, 10]),
            (10, vec![6, 7, 8, 9, 10]),
        ] {
            pager.go_to_page(page, 100);
            assert_eq!(pager.page_window(100), expected, "page {page}");
        }
    }
}
