use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crate::models::{standardize, PairMapping};
use crate::rest::RestApi;
use super::PairSource;

const IDENTIFIER: &str = "POLONIEX";
const TICKER_URL: &str = "https://poloniex.com/public?command=returnTicker";

pub struct Poloniex {
    rest: RestApi,
}

impl Poloniex {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }
}

/// Poloniex names pairs `QUOTE_BASE` (e.g. `USDT_BTC` is Bitcoin priced in
/// Tether); the standardized form is the reverse.
fn standardized_pair(raw: &str) -> Result<String> {
    let (quote, base) = raw
        .split_once('_')
        .ok_or_else(|| anyhow!("ticker key has no separator: {}", raw))?;
    Ok(standardize(base, quote))
}

#[async_trait]
impl PairSource for Poloniex {
    fn identifier(&self) -> &str {
        IDENTIFIER
    }

    fn endpoint(&self) -> &str {
        TICKER_URL
    }

    async fn pair_mappings(&self) -> Result<Vec<PairMapping>> {
        eprintln!("[poloniex] fetching ticker...");
        let ticker: serde_json::Map<String, serde_json::Value> = self
            .rest
            .get_json(TICKER_URL)
            .await
            .map_err(|e| anyhow!("Poloniex ticker fetch failed: {}", e))?;

        let mut mappings = Vec::with_capacity(ticker.len());
        for raw in ticker.keys() {
            mappings.push(PairMapping {
                standardized: standardized_pair(raw)?,
                raw: raw.clone(),
            });
        }

        eprintln!("[poloniex] found {} pairs", mappings.len());
        Ok(mappings)
    }
}
