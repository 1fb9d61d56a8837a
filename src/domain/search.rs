// src/domain/search.rs

use crate::dataset::ListingTable;
use crate::domain::listing::Listing;

/// Closed interval `[min, max]`. `max` may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Monthly rent brackets offered on the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    UpTo20k,
    From20kTo40k,
    Above40k,
}

impl PriceBucket {
    /// `1` and `2` pick the first two brackets, any other code the last one.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PriceBucket::UpTo20k,
            2 => PriceBucket::From20kTo40k,
            _ => PriceBucket::Above40k,
        }
    }

    pub fn range(self) -> Range {
        match self {
            PriceBucket::UpTo20k => Range::new(0.0, 20_000.0),
            PriceBucket::From20kTo40k => Range::new(20_000.0, 40_000.0),
            PriceBucket::Above40k => Range::new(40_000.0, f64::INFINITY),
        }
    }
}

/// Carpet-area brackets in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaBucket {
    UpTo500,
    From500To1000,
    Above1000,
}

impl AreaBucket {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => AreaBucket::UpTo500,
            2 => AreaBucket::From500To1000,
            _ => AreaBucket::Above1000,
        }
    }

    pub fn range(self) -> Range {
        match self {
            AreaBucket::UpTo500 => Range::new(0.0, 500.0),
            AreaBucket::From500To1000 => Range::new(500.0, 1_000.0),
            AreaBucket::Above1000 => Range::new(1_000.0, f64::INFINITY),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub size_bhk: i64,
    pub location: String,
    pub price: PriceBucket,
    pub area: AreaBucket,
}

impl SearchQuery {
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.size_bhk == self.size_bhk
            && listing.location_contains(&self.location)
            && self.price.range().contains(listing.price)
            && self.area.range().contains(listing.area)
    }
}

/// Outcome of a search. `Matches` never holds an empty list.
#[derive(Debug, PartialEq)]
pub enum SearchResults<'a> {
    Matches(Vec<&'a Listing>),
    NoMatches,
}

impl SearchResults<'_> {
    pub fn len(&self) -> usize {
        match self {
            SearchResults::Matches(listings) => listings.len(),
            SearchResults::NoMatches => 0,
        }
    }
}

/// Selects the listings matching `query`, keeping table order.
pub fn filter<'a>(table: &'a ListingTable, query: &SearchQuery) -> SearchResults<'a> {
    let matches: Vec<&Listing> = table
        .listings()
        .iter()
        .filter(|listing| query.matches(listing))
        .collect();

    if matches.is_empty() {
        SearchResults::NoMatches
    } else {
        SearchResults::Matches(matches)
    }
}
