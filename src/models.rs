pub mod contract_parser;
pub use contract_parser::{ContractMention, ContractParser, ContractSide, Expiration};

pub mod error;
pub use error::Error;

pub mod lexicon;
pub use lexicon::TickerLexicon;

pub mod sentiment_analyzer;
pub use sentiment_analyzer::{SentimentAnalyzer, SentimentConfig, SentimentScore, WindowAggregation};

pub mod ticker_parser;
pub use ticker_parser::{TickerMention, TickerParser};

pub mod tokenizer;
pub use tokenizer::{RawToken, Tokenizer};
