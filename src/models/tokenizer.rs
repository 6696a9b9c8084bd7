use crate::constants::CASHTAG_MARKER;
use crate::types::Token;

/// A candidate token located in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Token characters, cashtag marker excluded.
    pub text: Token,
    /// Byte offset of the token in the source text, cashtag marker included.
    pub offset: usize,
    /// Whether the author prefixed the token with a cashtag marker.
    pub cashtag: bool,
}

impl RawToken {
    /// The token exactly as it appeared, marker included.
    pub fn raw(&self) -> String {
        if self.cashtag {
            format!("{}{}", CASHTAG_MARKER, self.text)
        } else {
            self.text.clone()
        }
    }

    /// Byte offset one past the end of the token. Token characters are all
    /// ASCII, so byte and character lengths agree.
    pub fn end(&self) -> usize {
        self.offset + usize::from(self.cashtag) + self.text.len()
    }
}

#[derive(Copy, Clone)]
pub struct Tokenizer {
    /// Require tokens to be runs of uppercase letters and digits containing
    /// at least one letter. Cashtagged tokens are exempt, since the marker is
    /// already an explicit signal from the author.
    pub require_uppercase_runs: bool,
    /// Retain `/` and `.` between digits so dates and decimal strikes survive
    /// as single tokens.
    pub keep_date_separators: bool,
    /// Skip everything from `http://` or `https://` to the next whitespace.
    pub skip_urls: bool,
}

impl Tokenizer {
    /// Configuration for ticker symbol candidate scanning
    pub fn ticker_candidate_parser() -> Self {
        Self {
            require_uppercase_runs: true,
            keep_date_separators: false,
            skip_urls: true,
        }
    }

    /// Configuration for option contract element scanning
    pub fn contract_element_parser() -> Self {
        Self {
            require_uppercase_runs: false,
            keep_date_separators: true,
            skip_urls: true,
        }
    }

    /// Scans the text left to right for candidate tokens, preserving their
    /// byte offsets. Tokens are maximal runs of ASCII alphanumerics bounded
    /// by non-alphanumeric separators; everything else, emoji and malformed
    /// markup included, acts as a separator.
    pub fn tokenize(&self, text: &str) -> Vec<RawToken> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if self.skip_urls && is_url_start(&text[pos..]) {
                while i < chars.len() && !chars[i].1.is_whitespace() {
                    i += 1;
                }
                continue;
            }

            if !c.is_ascii_alphanumeric() {
                i += 1;
                continue;
            }

            let cashtag = i > 0 && chars[i - 1].1 == CASHTAG_MARKER;
            let mut token = String::new();

            while i < chars.len() {
                let ch = chars[i].1;
                if ch.is_ascii_alphanumeric() {
                    token.push(ch);
                } else if self.keep_date_separators
                    && (ch == '/' || ch == '.')
                    && chars.get(i + 1).is_some_and(|(_, next)| next.is_ascii_digit())
                {
                    token.push(ch);
                } else {
                    break;
                }
                i += 1;
            }

            if self.require_uppercase_runs && !cashtag && !is_uppercase_run(&token) {
                continue;
            }

            // The marker is a single ASCII byte when present.
            let offset = if cashtag { pos - 1 } else { pos };
            tokens.push(RawToken {
                text: token,
                offset,
                cashtag,
            });
        }

        tokens
    }
}

fn is_uppercase_run(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        && token.chars().any(|c| c.is_ascii_uppercase())
}

fn is_url_start(rest: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|prefix| rest.len() >= prefix.len() && rest.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()))
}
