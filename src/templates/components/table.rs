use crate::dataset::ListingTable;
use crate::domain::listing::Listing;
use maud::{html, Markup};

/// Every column of the matched listings, in source order.
pub fn listings_table(table: &ListingTable, listings: &[&Listing]) -> Markup {
    html! {
        table class="styled-table" {
            thead {
                tr {
                    @for header in table.headers() {
                        th { (header) }
                    }
                }
            }
            tbody {
                @for listing in listings {
                    tr {
                        @for cell in table.display_row(listing) {
                            td { (cell) }
                        }
                    }
                }
            }
        }
    }
}
