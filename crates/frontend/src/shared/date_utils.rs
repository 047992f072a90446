/// Date helpers for `<input type="date">` values and the browser clock
use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| chrono::Utc::now().date_naive())
}

/// Value for a date input; empty when there is no date
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a date input value. Browsers send `""` when the field is cleared.
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_value_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5);
        assert_eq!(to_input_value(date), "2024-01-05");
        assert_eq!(from_input_value("2024-01-05"), date);
    }

    #[test]
    fn test_cleared_input() {
        assert_eq!(to_input_value(None), "");
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("05/01/2024"), None);
    }
}
