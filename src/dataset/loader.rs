// src/dataset/loader.rs

use crate::dataset::{ColumnIndex, ListingTable, LoadError};
use crate::domain::listing::Listing;
use crate::domain::price::parse_price;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads and normalizes the listings file at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ListingTable, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = load_listings(file)?;

    info!(path = %path.display(), listings = table.len(), "Listings loaded");
    Ok(table)
}

/// Reads CSV listings and builds the normalized table.
///
/// Rows missing a bedroom count, area or location are dropped, as are rows
/// whose price is infinite or negative. A price cell that cannot be parsed,
/// including an empty one, fails the whole load.
pub fn load_listings<R: Read>(reader: R) -> Result<ListingTable, LoadError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut listings = Vec::new();
    let mut dropped = 0usize;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let price = normalize_price(&record, &columns, line)?;

        match admit(record, price, &columns) {
            Ok(listing) => listings.push(listing),
            Err(reason) => {
                debug!(line, reason, "Dropping listing");
                dropped += 1;
            }
        }
    }

    info!(retained = listings.len(), dropped, "Listings normalized");

    Ok(ListingTable::new(headers, columns, listings))
}

/// Every price cell goes through `parse_price`, empty ones included.
fn normalize_price(
    record: &StringRecord,
    columns: &ColumnIndex,
    line: u64,
) -> Result<f64, LoadError> {
    let raw = record.get(columns.price).unwrap_or_default();
    parse_price(raw).map_err(|source| LoadError::Price { line, source })
}

fn admit(
    record: StringRecord,
    price: f64,
    columns: &ColumnIndex,
) -> Result<Listing, &'static str> {
    let size_bhk = record
        .get(columns.size)
        .and_then(parse_size)
        .ok_or("missing size")?;

    let area = record
        .get(columns.area)
        .and_then(parse_area)
        .ok_or("missing area")?;

    if !price.is_finite() || price < 0.0 {
        return Err("price out of range");
    }

    let location = record
        .get(columns.location)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or("missing location")?
        .to_string();

    Ok(Listing {
        size_bhk,
        area,
        price,
        location,
        record,
    })
}

/// Accepts `2` as well as `2.0`, but not `2.5`.
fn parse_size(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Some(n);
    }

    let f = raw.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

fn parse_area(raw: &str) -> Option<f64> {
    let area = raw.trim().parse::<f64>().ok()?;
    (area.is_finite() && area >= 0.0).then_some(area)
}
