use crate::dataset::{load_listings, ListingTable};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const LISTINGS_CSV: &str = "\
size,area,price,location,furnishing,seller_type
2,600,25000,Andheri,Semi-Furnished,Owner
2,1500,25000,Bandra,Furnished,Agent
1,450,20000,Andheri West,Unfurnished,Owner
3,1200,1.2L,Juhu,Furnished,Agent
2,,30000,Andheri East,Furnished,Owner
";

/// The fixture listings, normalized the same way as at startup
pub fn init_test_table() -> ListingTable {
    load_listings(LISTINGS_CSV.as_bytes())
        .unwrap_or_else(|e| panic!("Fixture failed to load: {e}"))
}

pub fn search_request(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/results")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
