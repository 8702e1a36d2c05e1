use async_trait::async_trait;
use crate::models::PairMapping;

pub mod bitstamp;
pub mod kraken;
pub mod poloniex;

/// One exchange's pair listing. Implementations either hold a hand-maintained
/// table (Bitstamp) or fetch and normalize a public endpoint (Kraken,
/// Poloniex).
#[async_trait]
pub trait PairSource: Send + Sync {
    fn identifier(&self) -> &str;

    /// Public endpoint queried by this source; empty for static tables.
    fn endpoint(&self) -> &str;

    /// Pairs in exchange response order, each carrying both the raw exchange
    /// identifier and its standardized `BASE_QUOTE` form.
    async fn pair_mappings(&self) -> Result<Vec<PairMapping>, anyhow::Error>;
}
