use anyhow::Result;
use async_trait::async_trait;
use crate::models::PairMapping;
use super::PairSource;

const IDENTIFIER: &str = "BITSTAMP";

/// Bitstamp has no pair-listing endpoint worth querying for this tool; the
/// mapping is maintained by hand. Raw and standardized entries are parallel,
/// index for index.
const RAW_PAIRS: &[&str] = &["btcusd", "btceur", "eurusd", "xrpusd", "xrpeur", "xrpbtc"];
const STANDARDIZED_PAIRS: &[&str] = &["BTC_USD", "BTC_EUR", "EUR_USD", "XRP_USD", "XRP_EUR", "XRP_BTC"];

pub struct Bitstamp;

impl Bitstamp {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Bitstamp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PairSource for Bitstamp {
    fn identifier(&self) -> &str {
        IDENTIFIER
    }

    /// Static table, nothing fetched.
    fn endpoint(&self) -> &str {
        ""
    }

    async fn pair_mappings(&self) -> Result<Vec<PairMapping>> {
        Ok(STANDARDIZED_PAIRS
            .iter()
            .zip(RAW_PAIRS.iter())
            .map(|(std, raw)| PairMapping::new(std, raw))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_standardized;

    #[tokio::test]
    async fn test_table_is_parallel() {
        assert_eq!(RAW_PAIRS.len(), STANDARDIZED_PAIRS.len());
        assert_eq!(Bitstamp::new().identifier(), "BITSTAMP");
        assert!(Bitstamp::new().endpoint().is_empty());

        let mappings = Bitstamp::new().pair_mappings().await.unwrap();
        assert_eq!(mappings.len(), RAW_PAIRS.len());
        assert_eq!(mappings[0], PairMapping::new("BTC_USD", "btcusd"));
    }

    #[tokio::test]
    async fn test_standardized_entries_have_base_quote_shape() {
        let mappings = Bitstamp::new().pair_mappings().await.unwrap();
        for m in &mappings {
            assert!(is_standardized(&m.standardized), "bad shape: {}", m.standardized);
        }
    }
}
