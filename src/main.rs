//! currency-convert CLI
//!
//! Convert amounts against a rates file from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Convert a free-form expression
//! currency-convert convert --rates rates.json '$12 USD to GBP'
//!
//! # Convert a plain amount between explicit currencies
//! currency-convert convert --rates rates.json --from USD --to GBP 12
//!
//! # Show how an expression is read
//! currency-convert parse 1.23 gbp in eur
//!
//! # Generate a random rates file for testing
//! currency-convert generate --base EUR --currencies USD,GBP,JPY
//! ```

use currency_convert::convert::converter::{Converter, Endpoints};
use currency_convert::core::currency::CurrencyCode;
use currency_convert::parse::expression::parse;
use currency_convert::simulation::rate_generator::{generate_random_converter, RateTableConfig};
use log::info;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"currency-convert — currency conversion over a local rate table

USAGE:
    currency-convert <COMMAND> [OPTIONS]

COMMANDS:
    convert     Convert an amount or expression
    parse       Show how an expression is parsed
    generate    Generate a random rates file (for testing)
    help        Show this message

OPTIONS (convert):
    --rates <FILE>      Path to JSON rates file
    --from <CODE>       Source currency (overrides the expression)
    --to <CODE>         Target currency (overrides the expression)
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (parse):
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --base <CODE>       Base currency (default: EUR)
    --currencies <LIST> Comma-separated currency codes
    --output <FILE>     Write to file instead of stdout

RATES FILE:
    {{ "base": "EUR", "rates": {{ "GBP": 0.92, "USD": 1.12 }} }}

EXAMPLES:
    currency-convert convert --rates rates.json '$12 USD to GBP'
    currency-convert convert --rates rates.json --to EUR 1.23 GBP
    currency-convert parse --format json 10 usd as chf
    currency-convert generate --base USD --currencies EUR,GBP,INR --output rates.json"#
    );
}

/// JSON output schema for a conversion.
#[derive(serde::Serialize)]
struct ConversionOutput {
    input: String,
    base: String,
    result: f64,
}

fn load_converter(path: &str) -> Converter {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing rates file: {}", e);
        eprintln!("Expected format:");
        eprintln!(r#"{{ "base": "EUR", "rates": {{ "GBP": 0.92, "USD": 1.12 }} }}"#);
        process::exit(1);
    })
}

fn take_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires {}", flag, what);
        process::exit(1);
    })
}

fn to_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        process::exit(1);
    })
}

fn cmd_convert(args: &[String]) {
    let mut rates_path = None;
    let mut endpoints = Endpoints::default();
    let mut format = "text".to_string();
    let mut words = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rates" => {
                i += 1;
                rates_path = Some(take_value(args, i, "--rates", "a file path"));
            }
            "--from" => {
                i += 1;
                endpoints = endpoints.from(take_value(args, i, "--from", "a currency code"));
            }
            "--to" => {
                i += 1;
                endpoints = endpoints.to(take_value(args, i, "--to", "a currency code"));
            }
            "--format" => {
                i += 1;
                format = take_value(args, i, "--format", "'text' or 'json'");
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let path = rates_path.unwrap_or_else(|| {
        eprintln!("Error: --rates <FILE> is required");
        process::exit(1);
    });
    if words.is_empty() {
        eprintln!("Error: an amount or expression is required");
        process::exit(1);
    }

    let converter = load_converter(&path);
    let input = words.join(" ");
    info!("converting {:?} against base {}", input, converter.base());

    let result = converter
        .convert(input.as_str(), endpoints)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(2);
        });

    if format == "json" {
        let output = ConversionOutput {
            input,
            base: converter.base().to_string(),
            result,
        };
        println!("{}", to_json(&output));
    } else {
        println!("{}", result);
    }
}

fn cmd_parse(args: &[String]) {
    let mut format = "text".to_string();
    let mut words = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                format = take_value(args, i, "--format", "'text' or 'json'");
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let expression = words.join(" ");
    let parsed = parse(&expression).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(2);
    });

    if format == "json" {
        println!("{}", to_json(&parsed));
    } else {
        let show = |code: &Option<CurrencyCode>| {
            code.as_ref()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        println!("Amount: {}", parsed.amount);
        println!("From:   {}", show(&parsed.from));
        println!("To:     {}", show(&parsed.to));
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = RateTableConfig::default();
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--base" => {
                i += 1;
                config.base = CurrencyCode::new(take_value(args, i, "--base", "a currency code"));
            }
            "--currencies" => {
                i += 1;
                config.currencies = take_value(args, i, "--currencies", "a comma-separated list")
                    .split(',')
                    .map(|s| CurrencyCode::new(s.trim()))
                    .collect();
            }
            "--output" => {
                i += 1;
                output_path = Some(take_value(args, i, "--output", "a file path"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let converter = generate_random_converter(&config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });
    let json = to_json(&converter);

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} rates against {} → {}",
            converter.rates().len(),
            converter.base(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "convert" => cmd_convert(rest),
        "parse" => cmd_parse(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
