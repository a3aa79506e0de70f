use crate::PresentedToken;

use axum::http::{HeaderMap, HeaderValue, header};

#[test]
fn given_cookie_and_bearer_when_extracted_then_cookie_wins() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("token=from-cookie"));
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer from-header"),
    );

    let token = PresentedToken::from_headers(&headers, "token");

    assert_eq!(token.as_deref(), Some("from-cookie"));
}

#[test]
fn given_only_bearer_when_extracted_then_header_token() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_static("Bearer from-header"),
    );

    let token = PresentedToken::from_headers(&headers, "token");

    assert_eq!(token.as_deref(), Some("from-header"));
}

#[test]
fn given_custom_cookie_name_when_extracted_then_that_cookie_is_read() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("token=wrong; session=right"),
    );

    let token = PresentedToken::from_headers(&headers, "session");

    assert_eq!(token.as_deref(), Some("right"));
}

#[test]
fn given_basic_auth_when_extracted_then_no_token() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));

    let token = PresentedToken::from_headers(&headers, "token");

    assert_eq!(token.as_deref(), None);
}

#[test]
fn given_empty_cookie_when_extracted_then_falls_back_to_bearer() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("token="));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));

    let token = PresentedToken::from_headers(&headers, "token");

    assert_eq!(token.as_deref(), Some("t"));
}
