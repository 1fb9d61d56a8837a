// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::templates::pages::NO_MATCHES_MESSAGE;
use crate::tests::utils::{body_string, init_test_table, search_request};

#[test]
fn matching_search_renders_a_results_table() {
    let table = init_test_table();

    let resp = handle(search_request("bhk=2&location=and&price=2&area=2"), &table)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"class="styled-table""#));

    // Headers in source order, passthrough columns included
    assert!(body.contains("<th>size</th><th>area</th><th>price</th><th>location</th><th>furnishing</th><th>seller_type</th>"));

    // Andheri matches; Bandra is too large and Andheri East has no area
    assert!(body.contains("<td>Andheri</td>"));
    assert!(body.contains("<td>Semi-Furnished</td>"));
    assert!(!body.contains("Bandra"));
    assert!(!body.contains("Andheri East"));
}

#[test]
fn location_is_matched_case_insensitively() {
    let table = init_test_table();

    let resp = handle(search_request("bhk=1&location=ANDHERI&price=1&area=1"), &table).unwrap();
    let body = body_string(resp);

    assert!(body.contains("<td>Andheri West</td>"));
}

#[test]
fn lakh_prices_are_shown_in_rupees() {
    let table = init_test_table();

    let resp = handle(search_request("bhk=3&location=juhu&price=3&area=3"), &table).unwrap();
    let body = body_string(resp);

    assert!(body.contains("<td>120000</td>"));
    assert!(!body.contains("1.2L"));
}

#[test]
fn no_matches_is_a_normal_page() {
    let table = init_test_table();

    let resp = handle(search_request("bhk=2&location=Colaba&price=1&area=1"), &table)
        .expect("an empty search is not an error");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(NO_MATCHES_MESSAGE));
    assert!(!body.contains(r#"class="styled-table""#));
}

#[test]
fn non_integer_bedrooms_is_a_bad_request() {
    let table = init_test_table();

    let err = handle(search_request("bhk=two&location=and&price=2&area=2"), &table).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = html_error_response(err);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("bhk"));
}

#[test]
fn missing_fields_are_a_bad_request() {
    let table = init_test_table();

    match handle(search_request("bhk=2&location=and"), &table) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("price")),
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn out_of_range_buckets_fall_back_to_the_top_range() {
    let table = init_test_table();

    let resp = handle(search_request("bhk=3&location=&price=7&area=0"), &table).unwrap();
    let body = body_string(resp);

    assert!(body.contains("<td>Juhu</td>"));
}

#[test]
fn oversized_bucket_codes_are_accepted() {
    let table = init_test_table();

    let resp = handle(
        search_request("bhk=3&location=juhu&price=99999999999999999999&area=3"),
        &table,
    )
    .expect("an oversized code is not a bad request");
    assert_eq!(resp.status(), 200);

    assert!(body_string(resp).contains("<td>Juhu</td>"));
}
