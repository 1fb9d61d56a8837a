// templates/pages/home.rs

use crate::templates::{components::select_field, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Find a Rental",
        html! {
            h1 { "Find a rental in Mumbai" }

            form class="card search-form" method="post" action="/results" {
                label for="bhk" { "Bedrooms (BHK)" }
                input type="number" id="bhk" name="bhk" min="1" step="1" value="1" required;

                label for="location" { "Location" }
                input type="text" id="location" name="location" placeholder="e.g. Andheri" required;

                (select_field("price", "Monthly rent", &[
                    ("1", "Up to ₹20,000"),
                    ("2", "₹20,000 to ₹40,000"),
                    ("3", "₹40,000 and above"),
                ]))

                (select_field("area", "Area", &[
                    ("1", "Up to 500 sq ft"),
                    ("2", "500 to 1,000 sq ft"),
                    ("3", "1,000 sq ft and above"),
                ]))

                button type="submit" { "Search" }
            }
        },
    )
}
