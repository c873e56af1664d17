//! Field coercion helpers
//!
//! Raw form values arrive as strings, or not at all. These helpers do
//! the coercion step; the schema that composes them owns the error
//! messages.

use std::str::FromStr;

use crate::core::invoice::InvoiceStatus;

/// A trimmed, non-empty string, or `None`.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Coerce a raw value to a finite number; `None` when absent or
/// unparseable.
pub fn coerce_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Parse a status value; `None` when absent or outside the enum.
pub fn status_value(value: Option<&str>) -> Option<InvoiceStatus> {
    value.and_then(|v| InvoiceStatus::from_str(v.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // === non_empty() ===

    #[test]
    fn test_non_empty_absent_returns_none() {
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_non_empty_blank_returns_none() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
    }

    #[test]
    fn test_non_empty_trims_value() {
        assert_eq!(non_empty(Some("  c1  ")), Some("c1".to_string()));
    }

    // === coerce_number() ===

    #[test]
    fn test_coerce_number_absent_returns_none() {
        assert_eq!(coerce_number(None), None);
    }

    #[test]
    fn test_coerce_number_parses_decimal() {
        assert_eq!(coerce_number(Some("10.50")), Some(10.50));
        assert_eq!(coerce_number(Some(" 3 ")), Some(3.0));
    }

    #[test]
    fn test_coerce_number_keeps_sign() {
        assert_eq!(coerce_number(Some("-5")), Some(-5.0));
        assert_eq!(coerce_number(Some("0")), Some(0.0));
    }

    #[test]
    fn test_coerce_number_rejects_garbage() {
        assert_eq!(coerce_number(Some("ten")), None);
        assert_eq!(coerce_number(Some("10,50")), None);
        assert_eq!(coerce_number(Some("")), None);
    }

    #[test]
    fn test_coerce_number_rejects_non_finite() {
        assert_eq!(coerce_number(Some("inf")), None);
        assert_eq!(coerce_number(Some("NaN")), None);
    }

    // === status_value() ===

    #[test]
    fn test_status_value_parses_known_values() {
        assert_eq!(status_value(Some("pending")), Some(InvoiceStatus::Pending));
        assert_eq!(status_value(Some(" paid ")), Some(InvoiceStatus::Paid));
    }

    #[test]
    fn test_status_value_rejects_unknown() {
        assert_eq!(status_value(Some("draft")), None);
        assert_eq!(status_value(None), None);
    }
}
