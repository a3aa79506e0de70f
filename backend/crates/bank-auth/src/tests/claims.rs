use crate::{AuthError, Claims};

fn claims(issued_at: i64, expires_at: i64) -> Claims {
    Claims {
        subject_username: "alice".to_string(),
        account_id: "1234567890".to_string(),
        display_name: "Alice Liddell".to_string(),
        issued_at,
        expires_at,
    }
}

#[test]
fn given_time_before_exp_when_validated_then_ok() {
    assert!(claims(1000, 2000).validate_at(1999).is_ok());
}

#[test]
fn given_time_equal_to_exp_when_validated_then_expired() {
    let result = claims(1000, 2000).validate_at(2000);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_empty_account_when_validated_then_invalid_claim() {
    let mut claims = claims(1000, 2000);
    claims.account_id.clear();

    let result = claims.validate_at(1500);

    assert!(matches!(result, Err(AuthError::InvalidClaim { ref claim, .. }) if claim == "acct"));
}

#[test]
fn given_claims_when_serialized_then_uses_short_wire_names() {
    let json = serde_json::to_value(claims(1000, 4600)).unwrap();

    assert_eq!(json["user"], "alice");
    assert_eq!(json["acct"], "1234567890");
    assert_eq!(json["name"], "Alice Liddell");
    assert_eq!(json["iat"], 1000);
    assert_eq!(json["exp"], 4600);
}

#[test]
fn given_claims_when_lifetime_requested_then_is_exp_minus_iat() {
    assert_eq!(claims(1000, 4600).lifetime_secs(), 3600);
}
