use super::domain::IntakeError;

/// Parse a monetary amount after stripping display formatting.
///
/// Every character that is not an ASCII digit or a decimal point is dropped
/// before parsing, so inputs like "KES 50,000" survive their currency prefix
/// and thousands separators. Non-finite and non-positive results are
/// rejected; there is no partial acceptance.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<f64, IntakeError> {
    let amount: f64 = strip_formatting(raw)
        .parse()
        .map_err(|_| IntakeError::InvalidNumericValue { field })?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(IntakeError::InvalidNumericValue { field });
    }

    Ok(amount)
}

/// The stripped numeric text committed equipment entries store.
pub(crate) fn strip_formatting(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
