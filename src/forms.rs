// src/forms.rs

use crate::domain::search::{AreaBucket, PriceBucket, SearchQuery};
use crate::errors::ServerError;
use std::collections::HashMap;
use std::num::IntErrorKind;

/// Decode an `application/x-www-form-urlencoded` body (or query string).
/// Later duplicates overwrite earlier ones.
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// Builds a search from the submitted fields. Every field is required and
/// `bhk`, `price` and `area` must be whole numbers.
pub fn search_query(form: &HashMap<String, String>) -> Result<SearchQuery, ServerError> {
    Ok(SearchQuery {
        size_bhk: int_field(form, "bhk")?,
        location: required(form, "location")?.to_string(),
        price: PriceBucket::from_code(int_field(form, "price")?),
        area: AreaBucket::from_code(int_field(form, "area")?),
    })
}

fn required<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    form.get(name)
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest(format!("missing field '{name}'")))
}

/// Whole numbers beyond the `i64` range saturate instead of failing.
fn int_field(form: &HashMap<String, String>, name: &str) -> Result<i64, ServerError> {
    let raw = required(form, name)?;
    match raw.trim().parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ServerError::BadRequest(format!(
                "'{name}' must be a whole number, got '{raw}'"
            ))),
        },
    }
}
