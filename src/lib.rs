//! # currency-convert
//!
//! Lightweight currency conversion over caller-supplied rate tables.
//!
//! Rates are quoted against one base currency. Conversions between two
//! non-base currencies pivot through the base. Amounts may also be given
//! as free-form text such as `"$12 USD to GBP"`, in which case the amount
//! and currency codes are read from the text.
//!
//! ## Architecture
//!
//! - **core** — Currency codes, the rate table, error types
//! - **parse** — Free-form expression parser
//! - **convert** — Conversion entry points and the bound `Converter`
//! - **simulation** — Random rate tables for testing and benchmarking

pub mod convert;
pub mod core;
pub mod parse;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::convert::converter::{convert, Amount, ConvertOptions, Converter, Endpoints};
    pub use crate::core::currency::{CurrencyCode, RateTable};
    pub use crate::core::error::{ConvertError, ErrorKind};
    pub use crate::parse::expression::{parse, ParseResult};
}
