use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_table};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_renders_the_search_form() {
    let table = init_test_table();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &table).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"action="/results""#));
    for field in ["bhk", "location", "price", "area"] {
        assert!(
            body.contains(&format!(r#"name="{field}""#)),
            "form is missing field {field}"
        );
    }
}

#[test]
fn unknown_routes_are_not_found() {
    let table = init_test_table();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/listings.csv")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &table), Err(ServerError::NotFound)));
}

#[test]
fn results_only_accepts_posts() {
    let table = init_test_table();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/results?bhk=2&location=and&price=2&area=2")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &table), Err(ServerError::NotFound)));
}
