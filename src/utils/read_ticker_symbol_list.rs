use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use csv::ReaderBuilder;
use flate2::read::GzDecoder;

use crate::models::Error;
use crate::types::TickerSymbol;

/// Reads a `Symbol`-headed CSV export into a list of ticker symbols. Other
/// columns are ignored, so screener exports can be fed in unmodified.
pub fn read_ticker_symbols_from_string(csv: &str) -> Result<Vec<TickerSymbol>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(csv));

    let headers = reader.headers()?.clone();
    let symbol_column = headers
        .iter()
        .position(|header| header == "Symbol")
        .ok_or_else(|| Error::InvalidLexicon("missing 'Symbol' column".to_string()))?;

    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(symbol) = record.get(symbol_column) {
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                symbols.push(symbol.to_uppercase());
            }
        }
    }

    Ok(symbols)
}

/// Reads a symbol list from a CSV file, transparently decompressing `.gz`
/// exports.
pub fn read_ticker_symbols_from_file(path: impl AsRef<Path>) -> Result<Vec<TickerSymbol>, Error> {
    let path = path.as_ref();
    let mut contents = String::new();

    let mut file = File::open(path)?;
    if path.extension().is_some_and(|extension| extension == "gz") {
        GzDecoder::new(file).read_to_string(&mut contents)?;
    } else {
        file.read_to_string(&mut contents)?;
    }

    read_ticker_symbols_from_string(&contents)
}
