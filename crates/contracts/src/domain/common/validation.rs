use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Field-level problem found while turning an edit form into a patch
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: el campo es obligatorio")]
    Required { field: &'static str },

    #[error("{field}: \"{value}\" no es un número válido")]
    NotANumber { field: &'static str, value: String },

    #[error("{field}: debe ser mayor que cero")]
    NotPositive { field: &'static str },

    #[error("{field}: no puede ser negativo")]
    Negative { field: &'static str },

    #[error("{field}: \"{value}\" no es una fecha válida")]
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::Negative { field }
            | ValidationError::InvalidDate { field, .. } => field,
        }
    }
}

/// All problems of one form, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    /// Keep the value when `result` is Ok, record the error otherwise
    pub fn collect<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.0.push(e);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Whole number of units, strictly positive
pub fn parse_quantity(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    let raw = require(field, value)?;
    let parsed: i64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.clone(),
    })?;
    if parsed <= 0 {
        return Err(ValidationError::NotPositive { field });
    }
    u32::try_from(parsed).map_err(|_| ValidationError::NotANumber { field, value: raw })
}

/// Non-negative decimal amount; accepts `,` as the decimal mark
pub fn parse_price(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let raw = require(field, value)?;
    let parsed: f64 = raw
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ValidationError::NotANumber {
            field,
            value: raw.clone(),
        })?;
    if parsed < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}

/// `yyyy-mm-dd`, the value of an `<input type="date">`
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let raw = require(field, value)?;
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field, value: raw })
}

/// Like [`parse_date`] but an empty input means "no date"
pub fn parse_optional_date(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(field, value).map(Some)
}

/// Re-entrancy guard for the simulated save: a second submit while one is
/// outstanding is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Returns false when a submit is already running
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            log::warn!("Submit ignored: a save is already in progress");
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rejects_instead_of_coercing() {
        assert_eq!(parse_quantity("Cantidad", "3"), Ok(3));
        assert_eq!(
            parse_quantity("Cantidad", ""),
            Err(ValidationError::Required { field: "Cantidad" })
        );
        assert_eq!(
            parse_quantity("Cantidad", "0"),
            Err(ValidationError::NotPositive { field: "Cantidad" })
        );
        assert_eq!(
            parse_quantity("Cantidad", "-2"),
            Err(ValidationError::NotPositive { field: "Cantidad" })
        );
        assert!(matches!(
            parse_quantity("Cantidad", "2.5"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_price_accepts_comma_and_rejects_negative() {
        assert_eq!(parse_price("Precio", "1199.00"), Ok(1199.0));
        assert_eq!(parse_price("Precio", "19,95"), Ok(19.95));
        assert_eq!(parse_price("Precio", "0"), Ok(0.0));
        assert_eq!(
            parse_price("Precio", "-1"),
            Err(ValidationError::Negative { field: "Precio" })
        );
        assert!(matches!(
            parse_price("Precio", "abc"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_price("Precio", "inf"),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_dates() {
        assert_eq!(
            parse_date("Fecha", "2024-02-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())
        );
        assert_eq!(parse_optional_date("Fecha", "  "), Ok(None));
        assert!(matches!(
            parse_date("Fecha", "15/02/2024"),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_errors_collect_in_order() {
        let mut errors = ValidationErrors::default();
        assert_eq!(errors.collect(parse_quantity("Cantidad", "x")), None);
        assert_eq!(errors.collect(parse_price("Precio", "5")), Some(5.0));
        assert_eq!(errors.collect(require("Cliente", "")), None);

        assert_eq!(errors.0.len(), 2);
        assert!(errors.for_field("Cliente").is_some());
        assert!(errors.for_field("Precio").is_none());
        assert_eq!(
            errors.to_string(),
            "Cantidad: \"x\" no es un número válido; Cliente: el campo es obligatorio"
        );
    }

    #[test]
    fn test_submit_guard_blocks_second_submit() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(guard.is_in_flight());
        assert!(!guard.try_begin());
        guard.finish();
        assert!(guard.try_begin());
    }
}
