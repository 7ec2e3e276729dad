use crate::core::error::ConvertError;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Currency code such as `USD` or `GBP`.
///
/// Codes are compared verbatim. Codes produced by the expression parser
/// are always uppercase; codes supplied directly by callers are kept as
/// given.
///
/// # Examples
///
/// ```
/// use currency_convert::core::currency::CurrencyCode;
///
/// let usd = CurrencyCode::new("USD");
/// let gbp = CurrencyCode::new("GBP");
/// assert_ne!(usd, gbp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Exchange rates relative to a single base currency.
///
/// Each entry states how many units of a currency buy one unit of the
/// base. The base currency itself may be left out; it is always worth
/// exactly 1.0. The table does not know which currency is the base, the
/// caller supplies it with every lookup.
///
/// Serializes as a plain JSON object: `{"GBP": 0.92, "USD": 1.12}`.
///
/// # Examples
///
/// ```
/// use currency_convert::core::currency::{CurrencyCode, RateTable};
///
/// let rates = RateTable::from_pairs([("GBP", 0.92), ("USD", 1.12)]).unwrap();
/// let eur = CurrencyCode::new("EUR");
///
/// let rate = rates
///     .pair_rate(&eur, &CurrencyCode::new("EUR"), &CurrencyCode::new("GBP"))
///     .unwrap();
/// assert_eq!(rate, 0.92);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<CurrencyCode, f64>",
    into = "HashMap<CurrencyCode, f64>"
)]
pub struct RateTable {
    rates: HashMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(code, rate)` pairs, rejecting the first invalid rate.
    pub fn from_pairs<C, I>(pairs: I) -> Result<Self, ConvertError>
    where
        C: Into<CurrencyCode>,
        I: IntoIterator<Item = (C, f64)>,
    {
        let mut table = Self::new();
        for (code, rate) in pairs {
            table.set_rate(code, rate)?;
        }
        Ok(table)
    }

    /// Set the rate of `currency` against the base.
    ///
    /// Rates must be finite and strictly positive.
    pub fn set_rate(
        &mut self,
        currency: impl Into<CurrencyCode>,
        rate: f64,
    ) -> Result<(), ConvertError> {
        let currency = currency.into();
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConvertError::InvalidRate { currency, rate });
        }
        self.rates.insert(currency, rate);
        Ok(())
    }

    pub fn get(&self, currency: &CurrencyCode) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    pub fn contains(&self, currency: &CurrencyCode) -> bool {
        self.rates.contains_key(currency)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currencies listed in the table, sorted.
    pub fn currencies(&self) -> Vec<&CurrencyCode> {
        let mut codes: Vec<&CurrencyCode> = self.rates.keys().collect();
        codes.sort();
        codes
    }

    /// Rate of `currency` against `base`. The base is always 1.0.
    fn rate_against(&self, base: &CurrencyCode, currency: &CurrencyCode) -> Option<f64> {
        if currency == base {
            return Some(1.0);
        }
        self.get(currency)
    }

    /// Multiplier turning an amount of `from` into an amount of `to`.
    ///
    /// Both currencies must be the base or be listed in the table. A pair
    /// that involves neither side as base pivots through the base.
    pub fn pair_rate(
        &self,
        base: &CurrencyCode,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ConvertError> {
        let from_rate = self
            .rate_against(base, from)
            .ok_or_else(|| ConvertError::RateNotFound {
                currency: from.clone(),
            })?;
        let to_rate = self
            .rate_against(base, to)
            .ok_or_else(|| ConvertError::RateNotFound {
                currency: to.clone(),
            })?;

        let rate = if from == to {
            1.0
        } else if from == base {
            to_rate
        } else if to == base {
            1.0 / from_rate
        } else {
            to_rate * (1.0 / from_rate)
        };
        trace!("pair rate {}/{} via {} = {}", from, to, base, rate);
        Ok(rate)
    }
}

impl TryFrom<HashMap<CurrencyCode, f64>> for RateTable {
    type Error = ConvertError;

    fn try_from(rates: HashMap<CurrencyCode, f64>) -> Result<Self, Self::Error> {
        Self::from_pairs(rates)
    }
}

impl From<RateTable> for HashMap<CurrencyCode, f64> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}
