//! Core traits: component construction and route quoting.

mod from_config;
mod quote_source;

pub use from_config::FromConfig;
pub use quote_source::QuoteSource;
