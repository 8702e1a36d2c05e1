mod exchange;
mod models;
mod report;
mod rest;

use exchange::bitstamp::Bitstamp;
use exchange::kraken::Kraken;
use exchange::poloniex::Poloniex;
use exchange::PairSource;
use models::PairMapping;
use rest::RestApi;

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} [--exchange <name>]", bin);
    eprintln!();
    eprintln!("  No args      → list pairs from all exchanges");
    eprintln!("  --exchange   → restrict to one of: bitstamp, kraken, poloniex");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw_args: Vec<String> = std::env::args().collect();

    let mut selected: Option<String> = None;
    let mut i = 1;
    while i < raw_args.len() {
        if raw_args[i] == "--exchange" {
            i += 1;
            if i >= raw_args.len() {
                eprintln!("--exchange requires a value");
                std::process::exit(1);
            }
            selected = Some(raw_args[i].to_lowercase());
        } else {
            print_usage(&raw_args[0]);
            std::process::exit(1);
        }
        i += 1;
    }

    let mut sources: Vec<Box<dyn PairSource>> = Vec::new();
    match selected.as_deref() {
        None => {
            sources.push(Box::new(Bitstamp::new()));
            sources.push(Box::new(Kraken::new(RestApi::new())));
            sources.push(Box::new(Poloniex::new(RestApi::new())));
        }
        Some("bitstamp") => sources.push(Box::new(Bitstamp::new())),
        Some("kraken") => sources.push(Box::new(Kraken::new(RestApi::new()))),
        Some("poloniex") => sources.push(Box::new(Poloniex::new(RestApi::new()))),
        Some(other) => {
            eprintln!("Unknown exchange: '{}'", other);
            print_usage(&raw_args[0]);
            std::process::exit(1);
        }
    }

    // Strictly sequential: each source is fetched and normalized in turn, and
    // any failure aborts the run with no partial output.
    let mut listings: Vec<(String, Vec<PairMapping>)> = Vec::new();
    for source in &sources {
        let mappings = source.pair_mappings().await?;
        listings.push((source.identifier().to_string(), mappings));
    }

    let slices: Vec<&[PairMapping]> = listings.iter().map(|(_, m)| m.as_slice()).collect();
    let supported = report::merge_supported(&slices);

    println!("{}", report::supported_section(&supported));
    for (name, mappings) in &listings {
        println!("\n\n\n");
        println!("{}", report::exchange_section(name, mappings));
    }

    Ok(())
}
