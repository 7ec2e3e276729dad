use crate::core::currency::{CurrencyCode, RateTable};
use crate::core::error::ConvertError;
use crate::parse::expression::parse;
use log::debug;
use serde::{Deserialize, Serialize};

/// An amount to convert: a number, or text to run through the expression parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Value(f64),
    /// Either a plain numeral (`"12"`) or a full expression (`"$12 USD to GBP"`).
    Text(String),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Value(value)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Amount::Text(text.to_string())
    }
}

impl From<String> for Amount {
    fn from(text: String) -> Self {
        Amount::Text(text)
    }
}

/// Source and target currencies of a conversion. Either side may be left
/// for the expression parser to fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub from: Option<CurrencyCode>,
    pub to: Option<CurrencyCode>,
}

impl Endpoints {
    pub fn pair(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self {
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    pub fn from(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.from = Some(code.into());
        self
    }

    pub fn to(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.to = Some(code.into());
        self
    }
}

/// Everything a single [`convert`] call needs besides the amount.
#[derive(Debug, Clone)]
pub struct ConvertOptions<'a> {
    pub endpoints: Endpoints,
    pub base: CurrencyCode,
    pub rates: &'a RateTable,
}

impl<'a> ConvertOptions<'a> {
    pub fn new(base: impl Into<CurrencyCode>, rates: &'a RateTable) -> Self {
        Self {
            endpoints: Endpoints::default(),
            base: base.into(),
            rates,
        }
    }

    pub fn from(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.endpoints.from = Some(code.into());
        self
    }

    pub fn to(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.endpoints.to = Some(code.into());
        self
    }
}

/// Convert `amount` between the currencies named in `options`.
///
/// Text amounts always go through the expression parser. The parsed
/// amount is used, and parsed currencies fill in whichever endpoint the
/// caller left unset; explicit endpoints win.
///
/// # Examples
///
/// ```
/// use currency_convert::convert::converter::{convert, ConvertOptions};
/// use currency_convert::core::currency::RateTable;
///
/// let rates = RateTable::from_pairs([("GBP", 0.92), ("EUR", 1.0), ("USD", 1.12)]).unwrap();
///
/// let gbp = convert(12.0, &ConvertOptions::new("EUR", &rates).from("USD").to("GBP")).unwrap();
/// assert_eq!(gbp, 9.857142857142856);
///
/// let parsed = convert("$12 USD TO GBP", &ConvertOptions::new("EUR", &rates)).unwrap();
/// assert_eq!(parsed, gbp);
/// ```
///
/// # Errors
///
/// - [`ConvertError::InvalidAmount`] if text holds no numeral.
/// - [`ConvertError::MissingCurrency`] if `from` or `to` stays unknown.
/// - [`ConvertError::RateNotFound`] if a currency is neither base nor in the table.
pub fn convert(
    amount: impl Into<Amount>,
    options: &ConvertOptions<'_>,
) -> Result<f64, ConvertError> {
    let (amount, endpoints) = resolve(amount.into(), &options.endpoints)?;

    let (from, to) = match (endpoints.from, endpoints.to) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(ConvertError::MissingCurrency),
    };

    let rate = options.rates.pair_rate(&options.base, &from, &to)?;
    let converted = if from == to {
        amount
    } else {
        apply_rate(amount, rate)
    };
    debug!(
        "converted {} {} to {} {} (base {})",
        amount, from, converted, to, options.base
    );
    Ok(converted)
}

/// Settle the numeric amount and the endpoints, parsing text if needed.
fn resolve(amount: Amount, explicit: &Endpoints) -> Result<(f64, Endpoints), ConvertError> {
    match amount {
        Amount::Value(value) => Ok((value, explicit.clone())),
        Amount::Text(text) => {
            let parsed = parse(&text)?;
            let endpoints = Endpoints {
                from: explicit.from.clone().or(parsed.from),
                to: explicit.to.clone().or(parsed.to),
            };
            Ok((parsed.amount, endpoints))
        }
    }
}

/// Apply a pair rate to an amount scaled to hundredths.
fn apply_rate(amount: f64, rate: f64) -> f64 {
    (amount * 100.0) * rate / 100.0
}

/// A base currency and rate table bound once for repeated conversions.
///
/// Also the on-disk rates-file format: `{"base": "EUR", "rates": {...}}`.
///
/// # Examples
///
/// ```
/// use currency_convert::convert::converter::{Converter, Endpoints};
/// use currency_convert::core::currency::RateTable;
///
/// let rates = RateTable::from_pairs([("GBP", 0.92), ("USD", 1.12)]).unwrap();
/// let converter = Converter::new("EUR", rates);
///
/// assert_eq!(converter.convert(10.0, Endpoints::pair("EUR", "GBP")).unwrap(), 9.2);
/// assert_eq!(converter.convert("1.23 gbp to eur", Endpoints::default()).unwrap(), 1.3369565217391304);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Converter {
    base: CurrencyCode,
    rates: RateTable,
}

impl Converter {
    pub fn new(base: impl Into<CurrencyCode>, rates: RateTable) -> Self {
        Self {
            base: base.into(),
            rates,
        }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Convert `amount` using the bound base and rates. See [`convert`].
    pub fn convert(
        &self,
        amount: impl Into<Amount>,
        endpoints: Endpoints,
    ) -> Result<f64, ConvertError> {
        let options = ConvertOptions {
            endpoints,
            base: self.base.clone(),
            rates: &self.rates,
        };
        convert(amount, &options)
    }

    /// Multiplier from `from` to `to`, pivoting through the base if needed.
    pub fn rate(
        &self,
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
    ) -> Result<f64, ConvertError> {
        self.rates.pair_rate(&self.base, &from.into(), &to.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::from_pairs([("GBP", 0.92), ("EUR", 1.0), ("USD", 1.12)]).unwrap()
    }

    #[test]
    fn test_explicit_endpoints() {
        let rates = rates();
        let options = ConvertOptions::new("EUR", &rates).from("USD").to("GBP");
        assert_eq!(convert(12.0, &options).unwrap(), 9.857142857142856);
    }

    #[test]
    fn test_explicit_endpoints_override_parsed() {
        let rates = rates();
        let options = ConvertOptions::new("EUR", &rates).to("EUR");
        // parsed "to" would be GBP
        let result = convert("10 GBP to GBP", &options).unwrap();
        assert_eq!(result, 10.869565217391303);
    }

    #[test]
    fn test_parsed_amount_replaces_value() {
        let (amount, endpoints) =
            resolve(Amount::from("7 usd"), &Endpoints::default().to("GBP")).unwrap();
        assert_eq!(amount, 7.0);
        assert_eq!(endpoints, Endpoints::pair("USD", "GBP"));
    }

    #[test]
    fn test_numeric_amount_skips_parser() {
        let (amount, endpoints) = resolve(Amount::Value(3.5), &Endpoints::default()).unwrap();
        assert_eq!(amount, 3.5);
        assert_eq!(endpoints, Endpoints::default());
    }

    #[test]
    fn test_one_side_missing() {
        let rates = rates();
        let options = ConvertOptions::new("USD", &rates).to("EUR");
        assert_eq!(convert(10.0, &options), Err(ConvertError::MissingCurrency));

        let options = ConvertOptions::new("USD", &rates).from("EUR");
        assert_eq!(convert(10.0, &options), Err(ConvertError::MissingCurrency));
    }

    #[test]
    fn test_identity_keeps_amount_exactly() {
        let rates = rates();
        let options = ConvertOptions::new("EUR", &rates).from("USD").to("USD");
        assert_eq!(convert(0.1, &options).unwrap(), 0.1);
    }

    #[test]
    fn test_converter_rate() {
        let converter = Converter::new("EUR", rates());
        assert_eq!(converter.rate("EUR", "GBP").unwrap(), 0.92);
        assert_eq!(converter.rate("USD", "USD").unwrap(), 1.0);
        assert!(converter.rate("CHF", "EUR").is_err());
    }

    #[test]
    fn test_converter_json() {
        let converter: Converter = serde_json::from_str(
            r#"{"base": "EUR", "rates": {"GBP": 0.92, "USD": 1.12}}"#,
        )
        .unwrap();
        assert_eq!(converter.base().as_str(), "EUR");
        assert_eq!(converter.rates().len(), 2);
        assert_eq!(
            converter.convert("$12 USD", Endpoints::default().to("GBP")).unwrap(),
            9.857142857142856
        );
    }
}
