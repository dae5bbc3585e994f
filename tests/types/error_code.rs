use std::collections::HashSet;

use error_trail::ErrorCode;

#[test]
fn text_codes_with_same_value_are_equal() {
    assert_eq!(ErrorCode::from("SAME"), ErrorCode::from("SAME"));
    assert_eq!(ErrorCode::from("SAME"), ErrorCode::from(String::from("SAME")));
}

#[test]
fn text_and_number_with_same_digits_differ() {
    assert_ne!(ErrorCode::from("123"), ErrorCode::from(123));

    let set: HashSet<ErrorCode> = [ErrorCode::from("123"), ErrorCode::from(123)].into();
    assert_eq!(set.len(), 2);
}

#[test]
fn canonical_forms() {
    assert_eq!(ErrorCode::from("NOT_FOUND").to_string(), "NOT_FOUND");
    assert_eq!(ErrorCode::from(-7i64).to_string(), "-7");
    assert_eq!(ErrorCode::from(404u16).as_number(), Some(404));
    assert_eq!(ErrorCode::from("X").as_text(), Some("X"));
    assert_eq!(ErrorCode::from(1).as_text(), None);
}

#[test]
fn missing_text_coerces_to_empty() {
    assert_eq!(ErrorCode::from(None::<String>), ErrorCode::EMPTY);
    assert_eq!(ErrorCode::from(None::<&'static str>), ErrorCode::EMPTY);
    assert_eq!(ErrorCode::default(), ErrorCode::EMPTY);
    assert!(ErrorCode::EMPTY.is_empty());
    assert_eq!(ErrorCode::EMPTY.to_string(), "");
    assert!(!ErrorCode::from(0).is_empty());
}
