use crate::{DepositForm, TransferFailure};

fn new_account_form() -> DepositForm {
    DepositForm {
        account: Some("add".to_string()),
        external_account_num: Some("5555555555".to_string()),
        external_routing_num: Some("111111111".to_string()),
        external_label: Some("Savings".to_string()),
        amount: Some("100.10".to_string()),
        uuid: Some("b3c1c0de-0000-4000-8000-000000000002".to_string()),
    }
}

#[test]
fn given_new_account_when_validated_then_source_and_label_from_external_fields() {
    let plan = new_account_form().validate().unwrap();

    assert_eq!(plan.source_account, "5555555555");
    assert_eq!(plan.source_routing, "111111111");
    assert_eq!(plan.routing_field, "external_routing_num");
    assert_eq!(plan.new_contact_label.as_deref(), Some("Savings"));
    assert_eq!(plan.amount_minor_units, 10010);
}

#[test]
fn given_saved_account_json_when_validated_then_parsed_without_contact() {
    let form = DepositForm {
        account: Some(r#"{"account_num": "5555555555", "routing_num": "111111111"}"#.to_string()),
        external_account_num: None,
        external_routing_num: None,
        external_label: Some("ignored".to_string()),
        ..new_account_form()
    };

    let plan = form.validate().unwrap();

    assert_eq!(plan.source_account, "5555555555");
    assert_eq!(plan.routing_field, "account");
    assert_eq!(plan.new_contact_label, None);
}

#[test]
fn given_garbage_account_value_when_validated_then_account_field_error() {
    let form = DepositForm {
        account: Some("{not json".to_string()),
        ..new_account_form()
    };

    assert!(matches!(
        form.validate(),
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "account"
    ));
}

#[test]
fn given_new_account_without_routing_when_validated_then_routing_field_error() {
    let form = DepositForm {
        external_routing_num: Some(String::new()),
        ..new_account_form()
    };

    assert!(matches!(
        form.validate(),
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "external_routing_num"
    ));
}

#[test]
fn given_saved_account_with_padded_numbers_when_validated_then_trimmed() {
    let form = DepositForm {
        account: Some(
            r#"{"account_num": " 5555555555 ", "routing_num": " 883745000"}"#.to_string(),
        ),
        ..new_account_form()
    };

    let plan = form.validate().unwrap();

    assert_eq!(plan.source_account, "5555555555");
    assert_eq!(plan.source_routing, "883745000");
}

#[test]
fn given_saved_account_with_blank_routing_when_validated_then_account_field_error() {
    let form = DepositForm {
        account: Some(r#"{"account_num": "5555555555", "routing_num": "   "}"#.to_string()),
        ..new_account_form()
    };

    assert!(matches!(
        form.validate(),
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "account"
    ));
}
