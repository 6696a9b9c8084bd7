use std::collections::HashSet;

use log::debug;

use crate::constants::{DEFAULT_AMBIGUITY_WORDS, MAX_SYMBOL_LEN};
use crate::models::{RawToken, TickerLexicon, Tokenizer};
use crate::types::{TickerSymbol, TickerSymbolFrequencyMap};
use crate::utils::{count_ticker_symbol_frequencies, dedup_by_key};

/// A single confirmed ticker reference within a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerMention {
    /// Lexicon member the token resolved to.
    pub symbol: TickerSymbol,
    /// Byte offset of the mention in the source text, cashtag included.
    pub position: usize,
    /// The token exactly as it appeared.
    pub raw_token: String,
}

/// Parses stock ticker mentions out of noisy free text.
///
/// Candidates are validated against the caller's [`TickerLexicon`]. A
/// candidate that collides with a common capitalized English word is
/// suppressed unless the author cashtagged it.
pub struct TickerParser<'a> {
    lexicon: &'a TickerLexicon,
    ignore_duplicates: bool,
    ambiguity_words: HashSet<String>,
    tokenizer: Tokenizer,
}

impl<'a> TickerParser<'a> {
    pub fn new(lexicon: &'a TickerLexicon) -> Self {
        Self::with_config(lexicon, false)
    }

    pub fn with_config(lexicon: &'a TickerLexicon, ignore_duplicates: bool) -> Self {
        Self {
            lexicon,
            ignore_duplicates,
            ambiguity_words: DEFAULT_AMBIGUITY_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            tokenizer: Tokenizer::ticker_candidate_parser(),
        }
    }

    /// Replaces the common-word suppression table. The table is data, not
    /// parser logic, so callers can version it independently.
    pub fn with_ambiguity_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ambiguity_words = words
            .into_iter()
            .map(|word| word.as_ref().to_ascii_uppercase())
            .collect();
        self
    }

    /// Parses ticker mentions from text, in order of appearance.
    ///
    /// With `ignore_duplicates` set, only the first mention of each symbol is
    /// returned. Text with no mentions yields an empty vector.
    pub fn tickers(&self, text: &str) -> Vec<TickerMention> {
        let mentions = self.scan(text);

        if self.ignore_duplicates {
            dedup_by_key(mentions, |mention| mention.symbol.clone())
        } else {
            mentions
        }
    }

    /// Counts every textual occurrence per symbol, regardless of the
    /// duplicate policy.
    pub fn ticker_counts(&self, text: &str) -> TickerSymbolFrequencyMap {
        let symbols: Vec<TickerSymbol> = self
            .scan(text)
            .into_iter()
            .map(|mention| mention.symbol)
            .collect();

        count_ticker_symbol_frequencies(&symbols)
    }

    fn scan(&self, text: &str) -> Vec<TickerMention> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter_map(|token| self.confirm(token))
            .collect()
    }

    fn confirm(&self, token: RawToken) -> Option<TickerMention> {
        if token.text.len() > MAX_SYMBOL_LEN {
            return None;
        }

        let symbol = token.text.to_ascii_uppercase();
        if !self.lexicon.contains(&symbol) {
            return None;
        }

        if !token.cashtag && self.ambiguity_words.contains(&symbol) {
            debug!(
                "suppressed ambiguous candidate {:?} at byte {}",
                symbol, token.offset
            );
            return None;
        }

        Some(TickerMention {
            symbol,
            position: token.offset,
            raw_token: token.raw(),
        })
    }
}
