use crate::{clear_session_cookie, cookie_value, session_cookie};

use axum::http::{HeaderMap, HeaderValue, header};

fn headers_with_cookies(values: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(header::COOKIE, HeaderValue::from_str(value).unwrap());
    }
    headers
}

#[test]
fn given_several_cookies_when_read_then_named_one_is_found() {
    let headers = headers_with_cookies(&["theme=dark; token=abc.def.ghi; lang=en"]);

    assert_eq!(cookie_value(&headers, "token").as_deref(), Some("abc.def.ghi"));
}

#[test]
fn given_cookie_split_across_headers_when_read_then_found() {
    let headers = headers_with_cookies(&["theme=dark", "token=abc"]);

    assert_eq!(cookie_value(&headers, "token").as_deref(), Some("abc"));
}

#[test]
fn given_similar_cookie_name_when_read_then_not_confused() {
    let headers = headers_with_cookies(&["old_token=stale"]);

    assert_eq!(cookie_value(&headers, "token"), None);
}

#[test]
fn given_token_when_session_cookie_built_then_max_age_and_http_only() {
    let cookie = session_cookie("token", "a.b.c", 3600).unwrap();
    let cookie = cookie.to_str().unwrap();

    assert!(cookie.starts_with("token=a.b.c;"));
    assert!(cookie.contains("Max-Age=3600"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[test]
fn given_quoted_cookie_value_when_read_then_quotes_are_trimmed() {
    let headers = headers_with_cookies(&["token=\"abc\""]);

    assert_eq!(cookie_value(&headers, "token").as_deref(), Some("abc"));
}

#[test]
fn given_logout_when_cookie_cleared_then_max_age_zero() {
    let cookie = clear_session_cookie("token").unwrap();
    let cookie = cookie.to_str().unwrap();

    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}
