use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text.
pub type Token = String;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the total number of occurrences of a ticker symbol within a text document.
pub type TickerSymbolFrequency = usize;

/// Represents a map of ticker symbols to their frequency counts within a text document.
/// The key is the `TickerSymbol`, and the value is the `TickerSymbolFrequency`.
pub type TickerSymbolFrequencyMap = HashMap<TickerSymbol, TickerSymbolFrequency>;

/// Scalar sentiment polarity. Negative values read bearish, positive values
/// bullish, zero neutral.
pub type Polarity = f64;
