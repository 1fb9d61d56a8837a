use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 1080px; margin: 0 auto; padding: 0 1rem 3rem; color: #1f2937; }
header { display: flex; align-items: center; gap: 0.75rem; padding: 0.75rem 0; border-bottom: 1px solid #e5e7eb; margin-bottom: 1.5rem; }
header a { margin-left: auto; color: #524ed2; text-decoration: none; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1.25rem; margin-bottom: 1.5rem; }
.search-form { display: grid; grid-template-columns: 10rem 1fr; gap: 0.75rem 1rem; align-items: center; max-width: 32rem; }
.search-form button { grid-column: 2; justify-self: start; padding: 0.5rem 1.25rem; }
.styled-table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
.styled-table th { background: #524ed2; color: #fff; text-align: left; }
.styled-table th, .styled-table td { padding: 0.5rem 0.75rem; border-bottom: 1px solid #e5e7eb; }
.styled-table tbody tr:nth-of-type(even) { background: #f5f5fb; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
              header {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { "Find a Rental" }
                  a href="/" { "New search" }
              }
                main { (content) }
            }
        }
    }
}
