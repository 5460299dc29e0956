use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: Value [{0}] is not a number")]
    NotANumber(String),
    #[error("Amount error: Value [{0}] is negative")]
    Negative(String),
    #[error("Amount error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}
