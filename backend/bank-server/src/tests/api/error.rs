use crate::{ApiError, TransferFailure};

use bank_auth::AuthError;
use bank_client::ClientError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::eq;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = body_json(ApiError::validation("amount is required", Some("amount"))).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "amount is required");
    assert_eq!(json["error"]["field"], "amount");
}

#[tokio::test]
async fn given_error_without_field_when_rendered_then_field_is_omitted() {
    let (_, json) = body_json(ApiError::unauthorized("invalid login")).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_each_variant_when_rendered_then_status_and_code_match() {
    let location = || ErrorLocation::from(Location::caller());
    let cases = vec![
        (ApiError::unauthorized("x"), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (
            ApiError::NotFound {
                message: "x".into(),
                location: location(),
            },
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
        ),
        (
            ApiError::Conflict {
                message: "x".into(),
                location: location(),
            },
            StatusCode::CONFLICT,
            "CONFLICT",
        ),
        (
            ApiError::DownstreamRejected {
                message: "x".into(),
                location: location(),
            },
            StatusCode::BAD_GATEWAY,
            "DOWNSTREAM_REJECTED",
        ),
        (
            ApiError::LedgerRejected {
                message: "x".into(),
                location: location(),
            },
            StatusCode::BAD_GATEWAY,
            "LEDGER_REJECTED",
        ),
        (
            ApiError::Timeout {
                message: "x".into(),
                location: location(),
            },
            StatusCode::GATEWAY_TIMEOUT,
            "TIMEOUT",
        ),
        (
            ApiError::internal("x"),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
        ),
    ];

    for (error, expected_status, expected_code) in cases {
        let (status, json) = body_json(error).await;
        assert_that!(status, eq(expected_status));
        assert_eq!(json["error"]["code"], expected_code);
    }
}

#[tokio::test]
async fn given_ledger_failure_when_mapped_then_message_carries_ledger_text() {
    let failure = TransferFailure::from_ledger_error(ClientError::rejected(
        "ledger",
        400,
        "insufficient balance".to_string(),
    ));

    let (status, json) = body_json(ApiError::from_transfer("Payment", failure)).await;

    assert_that!(status, eq(StatusCode::BAD_GATEWAY));
    assert_eq!(json["error"]["message"], "Payment failed: insufficient balance");
}

#[tokio::test]
async fn given_invalid_routing_when_mapped_then_400_naming_routing_field() {
    let failure = TransferFailure::invalid_routing("external_routing_num");

    let (status, json) = body_json(ApiError::from_transfer("Deposit", failure)).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["message"], "Deposit failed: invalid routing number");
    assert_eq!(json["error"]["field"], "external_routing_num");
}

#[tokio::test]
async fn given_unauthenticated_when_mapped_then_401() {
    let failure = TransferFailure::unauthenticated(AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, _) = body_json(ApiError::from_transfer("Payment", failure)).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_contact_timeout_when_mapped_then_504() {
    let failure = TransferFailure::from_contact_error(ClientError::Timeout {
        service: "contacts",
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(ApiError::from_transfer("Deposit", failure)).await;

    assert_that!(status, eq(StatusCode::GATEWAY_TIMEOUT));
    assert_eq!(json["error"]["message"], "Deposit failed: contacts timed out");
}

#[tokio::test]
async fn given_amount_error_when_converted_then_validation_on_amount_field() {
    let error: ApiError = bank_core::parse_minor_units("-5").unwrap_err().into();

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["field"], "amount");
    assert_eq!(json["error"]["message"], "amount cannot be negative");
}
