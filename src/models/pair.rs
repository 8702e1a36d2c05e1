use serde::{Deserialize, Serialize};

/// One exchange pair, in both notations: the standardized `BASE_QUOTE` form
/// shared across exchanges, and the raw identifier the exchange itself uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairMapping {
    pub standardized: String,
    pub raw: String,
}

impl PairMapping {
    pub fn new(standardized: &str, raw: &str) -> Self {
        Self {
            standardized: standardized.to_string(),
            raw: raw.to_string(),
        }
    }
}

/// Join base and quote asset codes into the standardized form.
pub fn standardize(base: &str, quote: &str) -> String {
    format!("{}_{}", base, quote)
}

/// Check that a string has the standardized `BASE_QUOTE` shape: an uppercase
/// alphanumeric base, an underscore, and a non-empty remainder (the quote,
/// possibly carrying a market-type suffix like `_d`).
pub fn is_standardized(s: &str) -> bool {
    match s.split_once('_') {
        Some((base, quote)) => {
            !base.is_empty()
                && base.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                && !quote.is_empty()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_joins_with_underscore() {
        assert_eq!(standardize("BTC", "USD"), "BTC_USD");
        assert_eq!(standardize("ETH", "USD_d"), "ETH_USD_d");
    }

    #[test]
    fn test_is_standardized_accepts_base_quote() {
        assert!(is_standardized("BTC_USD"));
        assert!(is_standardized("XRP_BTC"));
        assert!(is_standardized("ETH_USD_d"));
    }

    #[test]
    fn test_is_standardized_rejects_other_shapes() {
        assert!(!is_standardized("btcusd"));
        assert!(!is_standardized("BTCUSD"));
        assert!(!is_standardized("_USD"));
        assert!(!is_standardized("BTC_"));
        assert!(!is_standardized(""));
    }
}
