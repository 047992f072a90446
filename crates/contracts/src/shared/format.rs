//! Formatting helpers for the es-ES console (money, dates, search strings)

use chrono::{DateTime, NaiveDate, Utc};

/// Formats a number with `.` as thousands separator and `,` as decimal mark
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Group digits by three from the right
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money in euros: `€2.398,00`
pub fn format_money(value: f64) -> String {
    format!("€{}", format_number_with_decimals(value, 2))
}

/// Shortest decimal representation, used when an amount takes part in a
/// text search (`2398`, `1199.5`).
pub fn amount_search_text(value: f64) -> String {
    value.to_string()
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `dd/mm/yyyy, HH:MM:SS`
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Optional date, `N/A` when absent
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "N/A".to_string())
}

/// Optional free text of a detail card, `-` when empty
pub fn format_optional_text(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2398.0), "€2.398,00");
        assert_eq!(format_money(1234567.891), "€1.234.567,89");
        assert_eq!(format_money(0.0), "€0,00");
        assert_eq!(format_money(-179.5), "€-179,50");
    }

    #[test]
    fn test_format_number_without_decimals() {
        assert_eq!(format_number_with_decimals(45678.0, 0), "45.678");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_amount_search_text_is_shortest_form() {
        assert_eq!(amount_search_text(2398.0), "2398");
        assert_eq!(amount_search_text(1199.5), "1199.5");
    }

    #[test]
    fn test_format_dates() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "05/01/2024");
        assert_eq!(format_optional_date(None), "N/A");

        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_datetime(ts), "15/01/2024, 10:30:00");
    }

    #[test]
    fn test_empty_text_shows_dash() {
        assert_eq!(format_optional_text(""), "-");
        assert_eq!(format_optional_text("  "), "-");
        assert_eq!(format_optional_text("IT"), "IT");
    }
}
