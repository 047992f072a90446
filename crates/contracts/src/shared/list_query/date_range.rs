use crate::shared::format::format_date;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date range. A range without `from` does not filter at all,
/// a range without `to` is open towards the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.from {
            None => true,
            Some(from) => date >= from && self.to.map_or(true, |to| date <= to),
        }
    }

    /// `dd/mm/yyyy` or `dd/mm/yyyy - dd/mm/yyyy`; `None` when inactive
    pub fn label(&self) -> Option<String> {
        let from = self.from?;
        Some(match self.to {
            Some(to) if to != from => format!("{} - {}", format_date(from), format_date(to)),
            _ => format_date(from),
        })
    }
}

/// Quick selections offered by the date range picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePreset {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl DatePreset {
    pub const ALL: [DatePreset; 8] = [
        DatePreset::Today,
        DatePreset::Yesterday,
        DatePreset::Last7Days,
        DatePreset::Last30Days,
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
        DatePreset::ThisYear,
        DatePreset::LastYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Hoy",
            DatePreset::Yesterday => "Ayer",
            DatePreset::Last7Days => "Últimos 7 días",
            DatePreset::Last30Days => "Últimos 30 días",
            DatePreset::ThisMonth => "Este mes",
            DatePreset::LastMonth => "Mes pasado",
            DatePreset::ThisYear => "Este año",
            DatePreset::LastYear => "Año pasado",
        }
    }

    /// Resolve the preset relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            DatePreset::Today => DateRange::new(today, today),
            DatePreset::Yesterday => {
                let yesterday = today - Duration::days(1);
                DateRange::new(yesterday, yesterday)
            }
            DatePreset::Last7Days => DateRange::new(today - Duration::days(6), today),
            DatePreset::Last30Days => DateRange::new(today - Duration::days(29), today),
            DatePreset::ThisMonth => month_range(today.year(), today.month()),
            DatePreset::LastMonth => {
                let (year, month) = if today.month() == 1 {
                    (today.year() - 1, 12)
                } else {
                    (today.year(), today.month() - 1)
                };
                month_range(year, month)
            }
            DatePreset::ThisYear => year_range(today.year()),
            DatePreset::LastYear => year_range(today.year() - 1),
        }
    }
}

fn month_range(year: i32, month: u32) -> DateRange {
    let start = NaiveDate::from_ymd_opt(year, month, 1);
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    DateRange {
        from: start,
        to: next_month_start.and_then(|d| d.pred_opt()),
    }
}

fn year_range(year: i32) -> DateRange {
    DateRange {
        from: NaiveDate::from_ymd_opt(year, 1, 1),
        to: NaiveDate::from_ymd_opt(year, 12, 31),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(d(2024, 1, 5), d(2024, 1, 10));
        assert!(range.contains(d(2024, 1, 5)));
        assert!(range.contains(d(2024, 1, 10)));
        assert!(!range.contains(d(2024, 1, 4)));
        assert!(!range.contains(d(2024, 1, 11)));
    }

    #[test]
    fn test_open_bounds() {
        assert!(DateRange::default().contains(d(1999, 1, 1)));
        let open_end = DateRange::starting(d(2024, 1, 5));
        assert!(open_end.contains(d(2030, 1, 1)));
        assert!(!open_end.contains(d(2024, 1, 4)));

        // `to` without `from` does not filter
        let only_to = DateRange { from: None, to: Some(d(2024, 1, 1)) };
        assert!(only_to.contains(d(2025, 1, 1)));
        assert!(!only_to.is_active());
    }

    #[test]
    fn test_label() {
        assert_eq!(DateRange::default().label(), None);
        assert_eq!(
            DateRange::new(d(2024, 1, 1), d(2024, 1, 1)).label().unwrap(),
            "01/01/2024"
        );
        assert_eq!(
            DateRange::new(d(2024, 1, 1), d(2024, 1, 15)).label().unwrap(),
            "01/01/2024 - 15/01/2024"
        );
    }

    #[test]
    fn test_presets() {
        let today = d(2024, 3, 15);
        assert_eq!(DatePreset::Yesterday.resolve(today), DateRange::new(d(2024, 3, 14), d(2024, 3, 14)));
        assert_eq!(DatePreset::Last7Days.resolve(today), DateRange::new(d(2024, 3, 9), today));
        assert_eq!(DatePreset::Last30Days.resolve(today), DateRange::new(d(2024, 2, 15), today));
        assert_eq!(DatePreset::ThisMonth.resolve(today), DateRange::new(d(2024, 3, 1), d(2024, 3, 31)));
        // leap year February
        assert_eq!(DatePreset::LastMonth.resolve(today), DateRange::new(d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(DatePreset::LastYear.resolve(today), DateRange::new(d(2023, 1, 1), d(2023, 12, 31)));
    }

    #[test]
    fn test_last_month_in_january_wraps_year() {
        let range = DatePreset::LastMonth.resolve(d(2024, 1, 10));
        assert_eq!(range, DateRange::new(d(2023, 12, 1), d(2023, 12, 31)));
        let december = DatePreset::ThisMonth.resolve(d(2023, 12, 3));
        assert_eq!(december.to, Some(d(2023, 12, 31)));
    }
}
