#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_validate_message() {
    assert_eq!(validate_message("  halo  "), Ok("halo"));
    assert_eq!(validate_message(""), Err(ValidationError::EmptyMessage));
    assert_eq!(validate_message("   \n"), Err(ValidationError::EmptyMessage));
}

#[test]
fn test_validate_message_length_counts_chars() {
    let at_limit = "é".repeat(MAX_MESSAGE_CHARS);
    assert!(validate_message(&at_limit).is_ok());
    let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(validate_message(&over), Err(ValidationError::MessageTooLong));
}

#[test]
fn test_validate_amount() {
    assert_eq!(validate_amount(15_000), Ok(15_000));
    assert_eq!(validate_amount(MAX_AMOUNT), Ok(MAX_AMOUNT));
    assert_eq!(validate_amount(MAX_AMOUNT + 1), Err(ValidationError::AmountTooLarge));
    assert_eq!(validate_amount(0), Err(ValidationError::NonPositiveAmount));
    assert_eq!(validate_amount(-1), Err(ValidationError::NonPositiveAmount));
}

#[test]
fn test_validate_description() {
    assert_eq!(validate_description("  makan <b>siang</b> ").unwrap(), "makan bsiang/b");
    assert_eq!(validate_description(" "), Err(ValidationError::EmptyDescription));
    let long = "x".repeat(MAX_DESCRIPTION_CHARS + 1);
    assert_eq!(
        validate_description(&long),
        Err(ValidationError::DescriptionTooLong)
    );
}

#[test]
fn test_sanitize_input() {
    assert_eq!(sanitize_input("  /catat   15000 \t makan<script>  "), "/catat 15000 makanscript");
    assert_eq!(sanitize_input(""), "");
}

#[test]
fn test_error_messages_are_user_facing() {
    assert_eq!(
        ValidationError::AmountTooLarge.to_string(),
        "Nominal terlalu besar (max 10 juta)"
    );
    assert_eq!(ValidationError::MessageTooLong.to_string(), "Pesan terlalu panjang");
}
