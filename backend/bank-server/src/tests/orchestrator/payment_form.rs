use crate::{PaymentForm, TransferFailure};

fn form(account_num: &str, amount: &str) -> PaymentForm {
    PaymentForm {
        account_num: Some(account_num.to_string()),
        amount: Some(amount.to_string()),
        uuid: Some("b3c1c0de-0000-4000-8000-000000000001".to_string()),
        ..PaymentForm::default()
    }
}

#[test]
fn given_saved_recipient_when_validated_then_no_contact_and_exact_minor_units() {
    let plan = form("9876543210", "12.34").validate().unwrap();

    assert_eq!(plan.recipient_account, "9876543210");
    assert_eq!(plan.new_contact_label, None);
    assert_eq!(plan.amount_minor_units, 1234);
}

#[test]
fn given_add_with_label_when_validated_then_contact_is_planned() {
    let mut form = form("add", "5");
    form.contact_account_num = Some("9876543210".to_string());
    form.contact_label = Some("Landlord".to_string());

    let plan = form.validate().unwrap();

    assert_eq!(plan.recipient_account, "9876543210");
    assert_eq!(plan.new_contact_label.as_deref(), Some("Landlord"));
    assert_eq!(plan.amount_minor_units, 500);
}

#[test]
fn given_add_with_blank_label_when_validated_then_no_contact() {
    let mut form = form("add", "5");
    form.contact_account_num = Some("9876543210".to_string());
    form.contact_label = Some("   ".to_string());

    assert_eq!(form.validate().unwrap().new_contact_label, None);
}

#[test]
fn given_add_without_account_when_validated_then_validation_on_that_field() {
    let result = form("add", "5").validate();

    assert!(matches!(
        result,
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "contact_account_num"
    ));
}

#[test]
fn given_sub_cent_amount_when_validated_then_truncated_to_zero() {
    assert_eq!(form("9876543210", "0.005").validate().unwrap().amount_minor_units, 0);
}

#[test]
fn given_non_numeric_amount_when_validated_then_amount_field_error() {
    let result = form("9876543210", "12,34").validate();

    assert!(matches!(
        result,
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "amount"
    ));
}

#[test]
fn given_missing_uuid_when_validated_then_uuid_field_error() {
    let mut form = form("9876543210", "1");
    form.uuid = None;

    assert!(matches!(
        form.validate(),
        Err(TransferFailure::Validation { field: Some(ref f), .. }) if f == "uuid"
    ));
}
