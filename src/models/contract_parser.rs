use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::constants::{DEFAULT_CONTRACT_TOKEN_WINDOW, MAX_SYMBOL_LEN};
use crate::models::{RawToken, TickerLexicon, Tokenizer};
use crate::types::TickerSymbol;
use crate::utils::dedup_by_key;

static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)(CALLS?|PUTS?|C|P)$").expect("valid regex"));
static BARE_STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("valid regex"));
static SIDE_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:CALLS?|PUTS?)$").expect("valid regex"));
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})(?:/(\d{2}|\d{4}))?$").expect("valid regex"));

/// Which side of an option contract a mention refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractSide {
    Call,
    Put,
}

impl fmt::Display for ContractSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractSide::Call => write!(f, "call"),
            ContractSide::Put => write!(f, "put"),
        }
    }
}

/// Contract expiration as written: month and day, year optional. Two-digit
/// years are normalized by assuming the current century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Expiration {
    pub month: u8,
    pub day: u8,
    pub year: Option<u16>,
}

impl Expiration {
    /// Validates against standard calendar rules. February allows 29 since
    /// the year may be absent.
    pub fn new(month: u8, day: u8, year: Option<u16>) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(month) {
            return None;
        }

        let year = year.map(|y| if y < 100 { 2000 + y } else { y });
        Some(Self { month, day, year })
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{}/{}/{}", self.month, self.day, year),
            None => write!(f, "{}/{}", self.month, self.day),
        }
    }
}

fn days_in_month(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

/// A single option contract reference within a text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractMention {
    /// Lexicon member the contract is written against.
    pub underlying_symbol: TickerSymbol,
    pub side: ContractSide,
    pub strike_price: f64,
    pub expiration: Expiration,
    /// Byte offset of the first contract element in the source text.
    pub position: usize,
    /// Source text spanning the contract elements, as it appeared.
    pub raw_token: String,
}

impl ContractMention {
    // f64 is not Hash; the bit pattern stands in for the strike. Strikes come
    // from a finite decimal grammar, so equal strikes share a representation.
    fn dedup_key(&self) -> (TickerSymbol, ContractSide, u64, Expiration) {
        (
            self.underlying_symbol.clone(),
            self.side,
            self.strike_price.to_bits(),
            self.expiration,
        )
    }
}

enum Element {
    Ticker(TickerSymbol),
    Strike { price: f64, side: ContractSide },
    Date(Expiration),
}

struct Slot<T> {
    value: T,
    token_index: usize,
    span: (usize, usize),
}

/// Parses option contract mentions (`<ticker> <strike><C|P> <expiration>`)
/// out of noisy free text.
///
/// The grammar is matched best-effort over a bounded token window: elements
/// may arrive in any order with other tokens between them, and a candidate
/// that fails ticker, strike, or date validation is dropped silently.
pub struct ContractParser<'a> {
    lexicon: &'a TickerLexicon,
    ignore_duplicates: bool,
    tokenizer: Tokenizer,
    token_window: usize,
}

impl<'a> ContractParser<'a> {
    pub fn new(lexicon: &'a TickerLexicon) -> Self {
        Self::with_config(lexicon, false)
    }

    pub fn with_config(lexicon: &'a TickerLexicon, ignore_duplicates: bool) -> Self {
        Self {
            lexicon,
            ignore_duplicates,
            tokenizer: Tokenizer::contract_element_parser(),
            token_window: DEFAULT_CONTRACT_TOKEN_WINDOW,
        }
    }

    /// Overrides how many tokens apart the elements of one contract may sit.
    pub fn with_token_window(mut self, token_window: usize) -> Self {
        self.token_window = token_window;
        self
    }

    /// Parses contract mentions from text, in order of appearance.
    ///
    /// With `ignore_duplicates` set, only the first mention of each
    /// (symbol, side, strike, expiration) tuple is returned.
    pub fn contracts(&self, text: &str) -> Vec<ContractMention> {
        let mentions = self.scan(text);

        if self.ignore_duplicates {
            dedup_by_key(mentions, |mention| mention.dedup_key())
        } else {
            mentions
        }
    }

    /// Counts every textual occurrence per contract tuple, regardless of the
    /// duplicate policy. The first mention of each tuple stands for the group.
    pub fn contract_counts(&self, text: &str) -> Vec<(ContractMention, usize)> {
        let mut counts: Vec<(ContractMention, usize)> = Vec::new();

        for mention in self.scan(text) {
            match counts
                .iter_mut()
                .find(|(seen, _)| seen.dedup_key() == mention.dedup_key())
            {
                Some((_, count)) => *count += 1,
                None => counts.push((mention, 1)),
            }
        }

        counts
    }

    fn scan(&self, text: &str) -> Vec<ContractMention> {
        let tokens = self.tokenizer.tokenize(text);
        let elements = self.classify(&tokens);
        self.assemble(text, &elements)
    }

    /// Classifies tokens into contract elements, preserving their order.
    fn classify(&self, tokens: &[RawToken]) -> Vec<(Element, usize, (usize, usize))> {
        let mut elements = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            let span = (token.offset, token.end());

            if let Some(captures) = DATE_RE.captures(&token.text) {
                let month = captures[1].parse::<u8>().ok();
                let day = captures[2].parse::<u8>().ok();
                let year = captures.get(3).and_then(|m| m.as_str().parse::<u16>().ok());

                match month.zip(day).and_then(|(m, d)| Expiration::new(m, d, year)) {
                    Some(expiration) => elements.push((Element::Date(expiration), i, span)),
                    None => debug!("discarding malformed expiration {:?}", token.text),
                }
                i += 1;
                continue;
            }

            if let Some(captures) = STRIKE_RE.captures(&token.text) {
                match captures[1].parse::<f64>() {
                    Ok(price) if price > 0.0 => {
                        let side = side_from(&captures[2]);
                        elements.push((Element::Strike { price, side }, i, span));
                    }
                    _ => debug!("discarding malformed strike {:?}", token.text),
                }
                i += 1;
                continue;
            }

            // A bare number directly followed by a verbose side word reads as
            // a strike, e.g. "250 calls".
            if BARE_STRIKE_RE.is_match(&token.text) {
                if let Some(next) = tokens.get(i + 1) {
                    if SIDE_WORD_RE.is_match(&next.text) {
                        if let Ok(price) = token.text.parse::<f64>() {
                            if price > 0.0 {
                                let side = side_from(&next.text);
                                elements.push((
                                    Element::Strike { price, side },
                                    i,
                                    (token.offset, next.end()),
                                ));
                            }
                        }
                        i += 2;
                        continue;
                    }
                }
                i += 1;
                continue;
            }

            let symbol = token.text.to_ascii_uppercase();
            if symbol.len() <= MAX_SYMBOL_LEN && self.lexicon.contains(&symbol) {
                elements.push((Element::Ticker(symbol), i, span));
            }
            i += 1;
        }

        elements
    }

    /// Assembles classified elements into contract mentions. Slots for the
    /// three element kinds fill in any order; a slot left stale beyond the
    /// token window is evicted before it can pair with newer elements.
    fn assemble(
        &self,
        text: &str,
        elements: &[(Element, usize, (usize, usize))],
    ) -> Vec<ContractMention> {
        let mut mentions = Vec::new();
        let mut ticker: Option<Slot<TickerSymbol>> = None;
        let mut strike: Option<Slot<(f64, ContractSide)>> = None;
        let mut date: Option<Slot<Expiration>> = None;

        for (element, token_index, span) in elements {
            let stale =
                |slot_index: usize| token_index.saturating_sub(slot_index) > self.token_window;
            if ticker.as_ref().is_some_and(|slot| stale(slot.token_index)) {
                ticker = None;
            }
            if strike.as_ref().is_some_and(|slot| stale(slot.token_index)) {
                strike = None;
            }
            if date.as_ref().is_some_and(|slot| stale(slot.token_index)) {
                date = None;
            }

            match element {
                Element::Ticker(symbol) => {
                    ticker = Some(Slot {
                        value: symbol.clone(),
                        token_index: *token_index,
                        span: *span,
                    });
                }
                Element::Strike { price, side } => {
                    strike = Some(Slot {
                        value: (*price, *side),
                        token_index: *token_index,
                        span: *span,
                    });
                }
                Element::Date(expiration) => {
                    date = Some(Slot {
                        value: *expiration,
                        token_index: *token_index,
                        span: *span,
                    });
                }
            }

            if let (Some(t), Some(s), Some(d)) = (&ticker, &strike, &date) {
                let start = t.span.0.min(s.span.0).min(d.span.0);
                let end = t.span.1.max(s.span.1).max(d.span.1);

                mentions.push(ContractMention {
                    underlying_symbol: t.value.clone(),
                    side: s.value.1,
                    strike_price: s.value.0,
                    expiration: d.value,
                    position: start,
                    raw_token: text[start..end].to_string(),
                });

                ticker = None;
                strike = None;
                date = None;
            }
        }

        mentions
    }
}

fn side_from(side: &str) -> ContractSide {
    if side.chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'c')) {
        ContractSide::Call
    } else {
        ContractSide::Put
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_expirations() {
        let expiration = Expiration::new(9, 12, None).expect("valid date");
        assert_eq!(expiration.month, 9);
        assert_eq!(expiration.day, 12);
        assert_eq!(expiration.year, None);
    }

    #[test]
    fn normalizes_two_digit_years() {
        let expiration = Expiration::new(1, 21, Some(22)).expect("valid date");
        assert_eq!(expiration.year, Some(2022));
    }

    #[test]
    fn keeps_four_digit_years() {
        let expiration = Expiration::new(1, 21, Some(2027)).expect("valid date");
        assert_eq!(expiration.year, Some(2027));
    }

    #[test]
    fn rejects_out_of_range_dates() {
        assert!(Expiration::new(13, 1, None).is_none());
        assert!(Expiration::new(0, 1, None).is_none());
        assert!(Expiration::new(2, 30, None).is_none());
        assert!(Expiration::new(4, 31, None).is_none());
        assert!(Expiration::new(6, 0, None).is_none());
    }

    #[test]
    fn accepts_february_twenty_ninth() {
        assert!(Expiration::new(2, 29, None).is_some());
    }

    #[test]
    fn displays_with_and_without_year() {
        assert_eq!(Expiration::new(9, 12, None).map(|e| e.to_string()), Some("9/12".to_string()));
        assert_eq!(
            Expiration::new(9, 12, Some(21)).map(|e| e.to_string()),
            Some("9/12/2021".to_string())
        );
    }
}
