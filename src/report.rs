use crate::models::PairMapping;

/// Merge standardized pairs from every source into one list: first occurrence
/// wins on duplicates, then the whole list is sorted ascending. Two exchanges
/// producing the same standardized code are assumed to mean the same pair.
pub fn merge_supported(sources: &[&[PairMapping]]) -> Vec<String> {
    let mut pairs: Vec<String> = Vec::new();
    for source in sources {
        for mapping in *source {
            if !pairs.contains(&mapping.standardized) {
                pairs.push(mapping.standardized.clone());
            }
        }
    }
    pairs.sort();
    pairs
}

/// The `SUPPORTED PAIRS` block: banner plus one pair per line with a trailing
/// comma, ready to paste into an enum definition.
pub fn supported_section(pairs: &[String]) -> String {
    let mut out = String::from("SUPPORTED PAIRS\n===============");
    for pair in pairs {
        out.push('\n');
        out.push_str(pair);
        out.push(',');
    }
    out
}

/// One exchange's block: banner plus a lookup-table `m.insert` line per pair,
/// standardized code bare, raw identifier quoted.
pub fn exchange_section(name: &str, mappings: &[PairMapping]) -> String {
    let title = format!("{} PAIRS", name);
    let mut out = format!("{}\n{}", title, "=".repeat(title.len()));
    for mapping in mappings {
        out.push('\n');
        out.push_str(&format!(
            "m.insert({}, \"{}\");",
            mapping.standardized, mapping.raw
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(standardized: &str, raw: &str) -> PairMapping {
        PairMapping::new(standardized, raw)
    }

    #[test]
    fn test_merge_deduplicates_across_sources() {
        let bitstamp = vec![m("BTC_USD", "btcusd")];
        let kraken = vec![m("BTC_USD", "XXBTZUSD"), m("ETH_EUR", "XETHZEUR")];
        let poloniex = vec![m("BTC_USD", "USD_BTC")];

        let merged = merge_supported(&[&bitstamp, &kraken, &poloniex]);
        assert_eq!(merged, vec!["BTC_USD", "ETH_EUR"]);
        assert_eq!(merged.iter().filter(|p| *p == "BTC_USD").count(), 1);
    }

    #[test]
    fn test_merge_output_is_sorted() {
        let source = vec![m("XRP_BTC", "xrpbtc"), m("BTC_EUR", "btceur"), m("ETH_USD", "ethusd")];
        let merged = merge_supported(&[&source]);
        for window in merged.windows(2) {
            assert!(window[0] <= window[1], "{} > {}", window[0], window[1]);
        }
        assert_eq!(merged, vec!["BTC_EUR", "ETH_USD", "XRP_BTC"]);
    }

    #[test]
    fn test_empty_source_contributes_nothing() {
        let bitstamp = vec![m("BTC_USD", "btcusd")];
        let empty: Vec<PairMapping> = Vec::new();
        let merged = merge_supported(&[&bitstamp, &empty]);
        assert_eq!(merged, vec!["BTC_USD"]);
    }

    #[test]
    fn test_supported_section_format() {
        let pairs = vec!["BTC_USD".to_string(), "ETH_EUR".to_string()];
        assert_eq!(
            supported_section(&pairs),
            "SUPPORTED PAIRS\n===============\nBTC_USD,\nETH_EUR,"
        );
    }

    #[test]
    fn test_exchange_section_format() {
        let mappings = vec![m("BTC_USD", "XXBTZUSD"), m("ETH_EUR_d", "XETHZEUR.d")];
        assert_eq!(
            exchange_section("KRAKEN", &mappings),
            "KRAKEN PAIRS\n============\nm.insert(BTC_USD, \"XXBTZUSD\");\nm.insert(ETH_EUR_d, \"XETHZEUR.d\");"
        );
    }

    #[test]
    fn test_exchange_section_with_no_pairs_is_banner_only() {
        assert_eq!(exchange_section("POLONIEX", &[]), "POLONIEX PAIRS\n==============");
    }
}
