use crate::dataset::ListingTable;
use crate::domain::search::SearchResults;
use crate::errors::ServerError;
use crate::forms;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;
use tracing::{info, warn};

pub fn handle(req: Request, table: &ListingTable) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("POST", "/results") => results(req, table),
        _ => {
            info!(%method, %path, "No route");
            Err(ServerError::NotFound)
        }
    }
}

fn results(mut req: Request, table: &ListingTable) -> ResultResp {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read form body: {e}")))?;

    let form = forms::parse_form(&body);
    let query = forms::search_query(&form).map_err(|e| {
        warn!(error = %e, "Rejected search");
        e
    })?;

    let results = table.search(&query);
    info!(?query, matches = results.len(), "Search");

    match results {
        SearchResults::Matches(listings) => {
            html_response(templates::pages::results_page(table, &listings))
        }
        SearchResults::NoMatches => html_response(templates::pages::no_matches_page()),
    }
}
