use crate::types::{TickerSymbol, TickerSymbolFrequencyMap};

/// Counts how often each ticker symbol occurs in the given list.
pub fn count_ticker_symbol_frequencies(
    ticker_symbols: &[TickerSymbol],
) -> TickerSymbolFrequencyMap {
    let mut frequencies = TickerSymbolFrequencyMap::new();

    for ticker_symbol in ticker_symbols {
        *frequencies.entry(ticker_symbol.clone()).or_default() += 1;
    }

    frequencies
}
