use csv::StringRecord;

/// One row of the listings file after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    // Canonical fields (always present once admitted to the table)
    pub size_bhk: i64,
    pub area: f64,  // square feet
    pub price: f64, // rupees
    pub location: String,

    // The source row as read, so passthrough columns can be rendered
    pub record: StringRecord,
}

impl Listing {
    /// Case-insensitive substring match. An empty needle matches everything.
    pub fn location_contains(&self, needle: &str) -> bool {
        self.location
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
