use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a form value cannot be parsed as a [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{input}': {reason}")]
pub struct ParseDecimalError {
    input: String,
    reason: String,
}

impl ParseDecimalError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Trims whitespace and drops the thousands separator.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses an amount typed into the form.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Like [`parse_decimal`] but maps unparseable input to 0.
///
/// Used for the running totals shown while the user is still typing.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    parse_decimal(s).unwrap_or(Decimal::ZERO)
}
