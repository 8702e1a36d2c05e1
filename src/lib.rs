//! # exchange-pairs-rs
//!
//! Lists the trading pairs supported by several crypto exchanges and rewrites
//! each exchange's native notation into a shared `BASE_QUOTE` standardized
//! form. The output is meant to be pasted into a connector codebase: one
//! deduplicated, sorted pair list plus per-exchange `m.insert` lookup-table
//! lines.
//!
//! ## Sources
//!
//! | Exchange | Listing | Native notation |
//! |----------|---------|-----------------|
//! | Bitstamp | hand-maintained table | concatenated lowercase (`btcusd`) |
//! | Kraken | `/0/public/AssetPairs` | prefixed codes (`XXBTZUSD`) |
//! | Poloniex | `returnTicker` | `QUOTE_BASE` keys (`USDT_BTC`) |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exchange_pairs_rs::{exchange::kraken::Kraken, exchange::PairSource, RestApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let kraken = Kraken::new(RestApi::new());
//!     for mapping in kraken.pair_mappings().await? {
//!         println!("{} <- {}", mapping.standardized, mapping.raw);
//!     }
//!     Ok(())
//! }
//! ```

pub mod exchange;
pub mod models;
pub mod report;
pub mod rest;

pub use exchange::PairSource;
pub use models::{is_standardized, standardize, PairMapping};
pub use report::{exchange_section, merge_supported, supported_section};
pub use rest::{RestApi, RestError};
