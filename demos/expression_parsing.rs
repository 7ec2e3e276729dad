//! Expression parsing example.
//!
//! Shows how free-form text is read into an amount and currency codes,
//! and converted in one step.

use currency_convert::convert::converter::{Converter, Endpoints};
use currency_convert::core::currency::RateTable;
use currency_convert::parse::expression::parse;

fn main() {
    println!("╔═══════════════════════════════════════════════╗");
    println!("║  currency-convert: Expression Parsing Example ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let expressions = [
        "$12 USD to GBP",
        "1.23 gbp in eur",
        "€50 EUR as USD",
        "100 INR",
        "no amount here",
    ];

    println!("━━━ Parsing ━━━\n");
    for expression in expressions {
        match parse(expression) {
            Ok(parsed) => println!(
                "  {:<18} amount={:<8} from={:<5} to={}",
                expression,
                parsed.amount,
                parsed.from.map(|c| c.to_string()).unwrap_or_default(),
                parsed.to.map(|c| c.to_string()).unwrap_or_default(),
            ),
            Err(e) => println!("  {:<18} error: {}", expression, e),
        }
    }
    println!();

    println!("━━━ Converting (base EUR) ━━━\n");
    let rates = RateTable::from_pairs([("GBP", 0.92), ("USD", 1.12), ("INR", 93.1)])
        .expect("rates are positive");
    let converter = Converter::new("EUR", rates);

    for expression in expressions {
        // "100 INR" names no target, so ask for EUR explicitly.
        let endpoints = if expression == "100 INR" {
            Endpoints::default().to("EUR")
        } else {
            Endpoints::default()
        };
        match converter.convert(expression, endpoints) {
            Ok(result) => println!("  {:<18} = {:.4}", expression, result),
            Err(e) => println!("  {:<18} error: {}", expression, e),
        }
    }
}
