use crate::core::currency::CurrencyCode;
use thiserror::Error;

/// Errors arising from parsing or converting an amount.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The amount text held no numeric value. Carries the offending input.
    #[error("Could not parse the `amount` argument. Make sure it includes at least a valid amount.")]
    InvalidAmount(String),

    #[error("Please specify the `from` and/or `to` currency or use parsing!")]
    MissingCurrency,

    /// `currency` is neither the base currency nor a key of the rate table.
    #[error("`rates` object does not contain either `from` or `to` currency!")]
    RateNotFound { currency: CurrencyCode },

    #[error("rate must be positive and finite, got {rate} for {currency}")]
    InvalidRate { currency: CurrencyCode, rate: f64 },
}

/// Coarse classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The amount could not be read.
    Amount,
    /// The caller did not say what to convert between.
    Usage,
    /// The rate table cannot serve the request.
    RateTable,
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InvalidAmount(_) => ErrorKind::Amount,
            ConvertError::MissingCurrency => ErrorKind::Usage,
            ConvertError::RateNotFound { .. } | ConvertError::InvalidRate { .. } => {
                ErrorKind::RateTable
            }
        }
    }
}
