use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal stored as text. Rows are only ever written from
/// validated `Decimal` values, so a parse failure means the file was edited
/// by hand; log it and fall back to zero rather than poisoning the whole
/// listing.
pub(crate) fn parse_decimal_text(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value.trim()) {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to parse {} '{}' as decimal: {}", field_name, value, e);
            Decimal::ZERO
        }
    }
}
