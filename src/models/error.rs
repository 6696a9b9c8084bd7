/// Errors surfaced by this crate. All of them are configuration-time misuse;
/// peculiarities in the analyzed text itself never abort a call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid ticker lexicon: {0}")]
    InvalidLexicon(String),
    #[error("invalid ticker symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("symbol list I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("symbol list parse error: {0}")]
    Csv(#[from] csv::Error),
}
