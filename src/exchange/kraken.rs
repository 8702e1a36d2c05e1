use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use crate::models::{standardize, PairMapping};
use crate::rest::RestApi;
use super::PairSource;

const IDENTIFIER: &str = "KRAKEN";
const ASSET_PAIRS_URL: &str = "https://api.kraken.com/0/public/AssetPairs";

/// Asset codes still carrying Kraken's legacy `X` currency-class prefix.
/// Anything else (BCH, DASH, EOS, GNO, USDT, ...) is already a modern code.
const LEGACY_BASES: &[&str] = &[
    "XETH", "XXBT", "XETC", "XLTC", "XICN", "XREP", "XXDG", "XZEC", "XXLM", "XXMR", "XMLN", "XXRP",
];

pub struct Kraken {
    rest: RestApi,
}

impl Kraken {
    pub fn new(rest: RestApi) -> Self {
        Self { rest }
    }
}

#[derive(Deserialize)]
struct AssetPairsResponse {
    #[serde(default)]
    error: Vec<String>,
    /// Pairs keyed by their raw Kraken name, in response order.
    #[serde(default)]
    result: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AssetPairInfo {
    base: String,
    quote: String,
    altname: String,
}

/// Normalize one Kraken asset pair to `BASE_QUOTE`, in order:
///   (a) drop the quote's leading index-currency marker (`X` or `Z`);
///   (b) drop the base's leading `X` if it is a legacy-prefixed code;
///   (c) rewrite `XBT` to `BTC` on both sides;
///   (d) mark dark-pool pairs (altname ending `.d`) with a `_d` quote suffix.
fn standardized_pair(info: &AssetPairInfo) -> Result<String> {
    if info.quote.len() < 2 || !info.quote.is_ascii() {
        return Err(anyhow!("quote code too short: {:?}", info.quote));
    }
    let mut quote = info.quote[1..].to_string();
    let mut base = info.base.clone();

    if LEGACY_BASES.contains(&base.as_str()) {
        base.remove(0);
    }
    if base == "XBT" {
        base = "BTC".to_string();
    }
    if quote == "XBT" {
        quote = "BTC".to_string();
    }
    if info.altname.ends_with(".d") {
        quote.push_str("_d");
    }

    Ok(standardize(&base, &quote))
}

#[async_trait]
impl PairSource for Kraken {
    fn identifier(&self) -> &str {
        IDENTIFIER
    }

    fn endpoint(&self) -> &str {
        ASSET_PAIRS_URL
    }

    async fn pair_mappings(&self) -> Result<Vec<PairMapping>> {
        eprintln!("[kraken] fetching asset pairs...");
        let response: AssetPairsResponse = self
            .rest
            .get_json(ASSET_PAIRS_URL)
            .await
            .map_err(|e| anyhow!("Kraken AssetPairs fetch failed: {}", e))?;

        if !response.error.is_empty() {
            return Err(anyhow!(
                "Kraken API returned errors: {}",
                response.error.join(", ")
            ));
        }

        let mut mappings = Vec::with_capacity(response.result.len());
        for (raw, value) in response.result {
            let info: AssetPairInfo = serde_json::from_value(value)
                .map_err(|e| anyhow!("Kraken pair {} has unexpected shape: {}", raw, e))?;
            let standardized = standardized_pair(&info)
                .map_err(|e| anyhow!("Kraken pair {}: {}", raw, e))?;
            mappings.push(PairMapping { standardized, raw });
        }

        eprintln!("[kraken] found {} pairs", mappings.len());
        Ok(mappings)
    }
}
