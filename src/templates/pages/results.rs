use crate::dataset::ListingTable;
use crate::domain::listing::Listing;
use crate::templates::{card, desktop_layout, listings_table};
use maud::{html, Markup};

pub const NO_MATCHES_MESSAGE: &str = "No houses match your criteria.";

pub fn results_page(table: &ListingTable, listings: &[&Listing]) -> Markup {
    desktop_layout(
        "Search Results",
        html! {
            h1 { "Search Results" }
            p { "Found " strong { (listings.len()) } " matching listings." }
            (listings_table(table, listings))
        },
    )
}

pub fn no_matches_page() -> Markup {
    desktop_layout(
        "Search Results",
        card(
            NO_MATCHES_MESSAGE,
            html! {
                p { "Try another location or a wider price or area range." }
                a href="/" { "Back to search" }
            },
        ),
    )
}
