use super::amount::{parse_amount, parse_amount_lenient};
use super::{AmountError, CustomerKey};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.0"),
        ("100", "100"),
        ("  42.50  ", "42.50"),
        ("+7.25", "7.25"),
        ("0", "0"),
        ("0.0001", "0.0001"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(parse_amount(input_string)?, Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_rejects_malformed_strings() {
    assert!(matches!(parse_amount(""), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("   "), Err(AmountError::Empty)));
    assert!(matches!(parse_amount("NaN"), Err(AmountError::NotANumber(_))));
    assert!(matches!(parse_amount("-5"), Err(AmountError::Negative(_))));
    assert!(matches!(parse_amount("abc"), Err(AmountError::Decimal(_))));
    assert!(matches!(parse_amount("1.2.3"), Err(AmountError::Decimal(_))));
}

#[test]
fn test_lenient_amount_normalizes_malformed_values_to_zero() -> Result<()> {
    assert_eq!(parse_amount_lenient("NaN"), Decimal::ZERO);
    assert_eq!(parse_amount_lenient("nan"), Decimal::ZERO);
    assert_eq!(parse_amount_lenient(""), Decimal::ZERO);
    assert_eq!(parse_amount_lenient("twelve"), Decimal::ZERO);
    assert_eq!(parse_amount_lenient("-10"), Decimal::ZERO);
    assert_eq!(parse_amount_lenient("12.5"), Decimal::from_str("12.5")?);

    Ok(())
}

#[test]
fn test_customer_key_normalizes_case_and_whitespace() {
    let key = CustomerKey::normalize("  Jane   DOE ");

    assert_eq!(key.as_str(), "jane doe");
    assert_eq!(key, CustomerKey::normalize("jane doe"));
    assert_ne!(key, CustomerKey::normalize("jane d"));
}

#[test]
fn test_customer_key_deserializes_through_normalization() -> Result<()> {
    let key: CustomerKey = serde_json::from_str("\"\\tAda LOVELACE\"")?;

    assert_eq!(key.to_string(), "ada lovelace");

    Ok(())
}
