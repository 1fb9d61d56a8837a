// src/domain/price.rs

use thiserror::Error;

/// 1 Lakh = 100,000
pub const LAKH: f64 = 100_000.0;
/// 1 Crore = 10,000,000
pub const CRORE: f64 = 10_000_000.0;

const LAKH_MARKER: &str = "L";
const CRORE_MARKER: &str = "Cr";

/// A price cell that could not be turned into a rupee amount.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid price {input:?}")]
pub struct ParseError {
    pub input: String,
}

impl ParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Converts a listing price such as `"1,20,000"`, `"25L"` or `"1.5Cr"` into rupees.
///
/// The lakh marker is checked before the crore marker, so a string carrying
/// both goes down the lakh path and fails on the leftover `Cr`.
pub fn parse_price(raw: &str) -> Result<f64, ParseError> {
    let cleaned = raw.replace(',', "");

    let value = if cleaned.contains(LAKH_MARKER) {
        parse_number(&cleaned.replace(LAKH_MARKER, ""), raw)? * LAKH
    } else if cleaned.contains(CRORE_MARKER) {
        parse_number(&cleaned.replace(CRORE_MARKER, ""), raw)? * CRORE
    } else {
        parse_number(&cleaned, raw)?
    };

    if value.is_nan() {
        return Err(ParseError::new(raw));
    }

    Ok(value)
}

fn parse_number(residual: &str, raw: &str) -> Result<f64, ParseError> {
    residual
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::new(raw))
}
