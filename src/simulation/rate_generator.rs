//! Random rate tables for benchmarks, property tests and the CLI.

use crate::convert::converter::Converter;
use crate::core::currency::{CurrencyCode, RateTable};
use crate::core::error::ConvertError;
use log::debug;
use rand::Rng;

/// Configuration for generating a random rate table.
#[derive(Debug, Clone)]
pub struct RateTableConfig {
    /// Currency every rate is quoted against.
    pub base: CurrencyCode,
    /// Currencies to quote. The base is skipped if listed.
    pub currencies: Vec<CurrencyCode>,
    /// Smallest rate to draw.
    pub min_rate: f64,
    /// Largest rate to draw (exclusive).
    pub max_rate: f64,
    /// Also list the base at 1.0.
    pub include_base: bool,
}

impl Default for RateTableConfig {
    fn default() -> Self {
        Self {
            base: CurrencyCode::new("EUR"),
            currencies: ["USD", "GBP", "JPY", "CHF", "BRL", "INR"]
                .into_iter()
                .map(CurrencyCode::new)
                .collect(),
            min_rate: 0.01,
            max_rate: 200.0,
            include_base: true,
        }
    }
}

/// Generate a random rate table.
///
/// # Errors
///
/// [`ConvertError::InvalidRate`] if the configured range allows
/// non-positive rates.
pub fn generate_random_rates(config: &RateTableConfig) -> Result<RateTable, ConvertError> {
    let mut rng = rand::thread_rng();
    let mut table = RateTable::new();

    for currency in &config.currencies {
        if *currency == config.base {
            continue;
        }
        let rate = if config.max_rate > config.min_rate {
            rng.gen_range(config.min_rate..config.max_rate)
        } else {
            config.min_rate
        };
        table.set_rate(currency.clone(), rate)?;
    }
    if config.include_base {
        table.set_rate(config.base.clone(), 1.0)?;
    }

    debug!(
        "generated {} rates against {}",
        table.len(),
        config.base
    );
    Ok(table)
}

/// Generate a converter bound to a random rate table.
pub fn generate_random_converter(config: &RateTableConfig) -> Result<Converter, ConvertError> {
    Ok(Converter::new(config.base.clone(), generate_random_rates(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::converter::Endpoints;

    #[test]
    fn test_random_rates_generation() {
        let config = RateTableConfig::default();
        let table = generate_random_rates(&config).unwrap();

        assert_eq!(table.len(), config.currencies.len() + 1);
        assert_eq!(table.get(&config.base), Some(1.0));
        for currency in &config.currencies {
            let rate = table.get(currency).unwrap();
            assert!(rate >= config.min_rate && rate < config.max_rate);
        }
    }

    #[test]
    fn test_base_listed_among_currencies() {
        let config = RateTableConfig {
            currencies: vec![CurrencyCode::new("EUR"), CurrencyCode::new("USD")],
            include_base: false,
            ..Default::default()
        };
        let table = generate_random_rates(&config).unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.contains(&config.base));
    }

    #[test]
    fn test_fixed_rate_range() {
        let config = RateTableConfig {
            min_rate: 2.0,
            max_rate: 2.0,
            ..Default::default()
        };
        let converter = generate_random_converter(&config).unwrap();
        assert_eq!(converter.rate("EUR", "USD").unwrap(), 2.0);
        assert_eq!(
            converter.convert(3.0, Endpoints::pair("EUR", "GBP")).unwrap(),
            6.0
        );
    }

    #[test]
    fn test_non_positive_range_rejected() {
        let config = RateTableConfig {
            min_rate: 0.0,
            max_rate: 0.0,
            ..Default::default()
        };
        assert!(generate_random_rates(&config).is_err());
    }
}
