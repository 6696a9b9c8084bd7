use std::collections::HashSet;

use crate::constants::MAX_SYMBOL_LEN;
use crate::models::Error;
use crate::types::TickerSymbol;

/// Closed set of valid ticker symbols. All candidate matching is validated
/// against this set; no open-ended symbol grammar is trusted on its own.
///
/// The set is immutable once constructed, so a single lexicon can back any
/// number of concurrent parser instances.
#[derive(Debug, Clone)]
pub struct TickerLexicon {
    symbols: HashSet<TickerSymbol>,
}

impl TickerLexicon {
    /// Builds a lexicon from caller-supplied symbols, normalizing each entry
    /// to uppercase. Rejects an empty set and malformed entries.
    pub fn new<I, S>(symbols: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated = HashSet::new();
        for symbol in symbols {
            validated.insert(normalize_symbol(symbol.as_ref())?);
        }

        if validated.is_empty() {
            return Err(Error::InvalidLexicon(
                "at least one ticker symbol is required".to_string(),
            ));
        }

        Ok(Self { symbols: validated })
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.symbols.iter()
    }
}

/// Normalizes a ticker symbol to its canonical uppercase form.
///
/// A valid symbol is 1 to `MAX_SYMBOL_LEN` ASCII alphanumeric characters with
/// at least one letter.
pub(crate) fn normalize_symbol(input: &str) -> Result<TickerSymbol, Error> {
    let normalized = input.trim().to_ascii_uppercase();

    if normalized.is_empty() || normalized.len() > MAX_SYMBOL_LEN {
        return Err(Error::InvalidSymbol(input.to_string()));
    }

    if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidSymbol(input.to_string()));
    }

    if !normalized.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidSymbol(input.to_string()));
    }

    Ok(normalized)
}
