mod constants;
pub mod models;
pub use constants::{
    DEFAULT_AMBIGUITY_WORDS, DEFAULT_CONTRACT_TOKEN_WINDOW, DEFAULT_SENTIMENT_CONFIG,
    MAX_SYMBOL_LEN,
};
pub use models::{
    ContractMention, ContractParser, ContractSide, Error, Expiration, RawToken, SentimentAnalyzer,
    SentimentConfig, SentimentScore, TickerLexicon, TickerMention, TickerParser, Tokenizer,
    WindowAggregation,
};
pub mod types;
pub mod utils;
pub use types::{
    Polarity, TickerSymbol, TickerSymbolFrequency, TickerSymbolFrequencyMap, Token,
};
pub use utils::{read_ticker_symbols_from_file, read_ticker_symbols_from_string};

/// Parses ticker mentions from text with the default parser configuration.
pub fn extract_ticker_mentions(text: &str, lexicon: &TickerLexicon) -> Vec<TickerMention> {
    TickerParser::new(lexicon).tickers(text)
}

/// Parses option contract mentions from text with the default parser
/// configuration.
pub fn extract_contract_mentions(text: &str, lexicon: &TickerLexicon) -> Vec<ContractMention> {
    ContractParser::new(lexicon).contracts(text)
}

/// Counts ticker occurrences in text with the default parser configuration.
pub fn extract_ticker_frequencies(text: &str, lexicon: &TickerLexicon) -> TickerSymbolFrequencyMap {
    TickerParser::new(lexicon).ticker_counts(text)
}
