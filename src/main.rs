use std::env;
use std::io::{self, Read};

use log::error;

use finbuzz::utils::read_ticker_symbols_from_file;
use finbuzz::{extract_ticker_frequencies, SentimentAnalyzer, TickerLexicon};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let symbol_file = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: finbuzz-cli <symbols.csv[.gz]> < text");
            std::process::exit(1);
        }
    };

    let symbols = match read_ticker_symbols_from_file(&symbol_file) {
        Ok(symbols) => symbols,
        Err(e) => {
            error!("Failed to read symbol list {}: {}", symbol_file, e);
            std::process::exit(1);
        }
    };

    let lexicon = match TickerLexicon::new(symbols) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            error!("Failed to build ticker lexicon: {}", e);
            std::process::exit(1);
        }
    };

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let frequencies = extract_ticker_frequencies(&input, &lexicon);

    // Convert the frequency map into a Vec and sort it by frequency
    // (descending), then by ticker symbol (ascending) for deterministic order.
    let mut sorted_frequencies: Vec<_> = frequencies.iter().collect();
    sorted_frequencies.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (ticker_symbol, frequency) in sorted_frequencies {
        println!("{}: {}", ticker_symbol, frequency);
    }

    let analyzer = SentimentAnalyzer::new();
    println!("polarity: {:.4}", analyzer.sentiment(&input).polarity);
}
