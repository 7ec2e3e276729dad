//! Basic conversion example.
//!
//! Converts between currencies quoted against EUR, including a cross
//! pair that pivots through the base.

use currency_convert::convert::converter::{convert, ConvertOptions, Converter, Endpoints};
use currency_convert::core::currency::RateTable;

fn main() {
    println!("╔════════════════════════════════════════════╗");
    println!("║  currency-convert: Basic Conversion Example ║");
    println!("╚════════════════════════════════════════════╝\n");

    let rates = RateTable::from_pairs([("GBP", 0.92), ("USD", 1.12), ("JPY", 162.4)])
        .expect("rates are positive");

    // --- Scenario 1: one-off conversions ---
    println!("━━━ Scenario 1: One-off Conversions (base EUR) ━━━\n");

    for (amount, from, to) in [
        (10.0, "EUR", "GBP"),
        (10.0, "GBP", "EUR"),
        (12.0, "USD", "GBP"),
        (12.0, "USD", "USD"),
    ] {
        let options = ConvertOptions::new("EUR", &rates).from(from).to(to);
        match convert(amount, &options) {
            Ok(result) => println!("  {:>8} {} = {:>12.4} {}", amount, from, result, to),
            Err(e) => println!("  {:>8} {} → {}: {}", amount, from, to, e),
        }
    }
    println!();

    // --- Scenario 2: bound converter ---
    println!("━━━ Scenario 2: Bound Converter ━━━\n");

    let converter = Converter::new("EUR", rates);
    for to in ["GBP", "USD", "JPY", "CHF"] {
        match converter.convert(100.0, Endpoints::pair("EUR", to)) {
            Ok(result) => println!("  100 EUR = {:>10.2} {}", result, to),
            Err(e) => println!("  100 EUR → {}: {}", to, e),
        }
    }
}
