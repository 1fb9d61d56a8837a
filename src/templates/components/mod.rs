use maud::{html, Markup};

pub mod table;

pub use table::listings_table;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// A `<select>` whose options are `(value, label)` pairs.
pub fn select_field(name: &str, label: &str, options: &[(&str, &str)]) -> Markup {
    html! {
        label for=(name) { (label) }
        select id=(name) name=(name) required {
            @for (value, text) in options {
                option value=(value) { (text) }
            }
        }
    }
}
