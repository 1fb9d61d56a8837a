use crate::dataset::LoadError;
use crate::domain::listing::Listing;
use crate::domain::search::{self, SearchQuery, SearchResults};
use csv::StringRecord;

/// Positions of the canonical columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub size: usize,
    pub area: usize,
    pub price: usize,
    pub location: usize,
}

impl ColumnIndex {
    /// Finds the canonical columns by name. The bedroom column may be
    /// called `size` or `bhk`.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        Ok(Self {
            size: find(&["size", "bhk"]).ok_or(LoadError::MissingColumn("size"))?,
            area: find(&["area"]).ok_or(LoadError::MissingColumn("area"))?,
            price: find(&["price"]).ok_or(LoadError::MissingColumn("price"))?,
            location: find(&["location"]).ok_or(LoadError::MissingColumn("location"))?,
        })
    }
}

/// The normalized listings, loaded once at startup and never modified.
#[derive(Debug)]
pub struct ListingTable {
    headers: StringRecord,
    columns: ColumnIndex,
    listings: Vec<Listing>,
}

impl ListingTable {
    pub(crate) fn new(headers: StringRecord, columns: ColumnIndex, listings: Vec<Listing>) -> Self {
        Self {
            headers,
            columns,
            listings,
        }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.headers.iter()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults<'_> {
        search::filter(self, query)
    }

    /// Cell values for one listing in header order, with the canonical
    /// columns shown in their normalized form.
    pub fn display_row(&self, listing: &Listing) -> Vec<String> {
        (0..self.headers.len())
            .map(|i| {
                if i == self.columns.size {
                    listing.size_bhk.to_string()
                } else if i == self.columns.area {
                    listing.area.to_string()
                } else if i == self.columns.price {
                    listing.price.to_string()
                } else if i == self.columns.location {
                    listing.location.clone()
                } else {
                    listing.record.get(i).unwrap_or_default().to_string()
                }
            })
            .collect()
    }
}
