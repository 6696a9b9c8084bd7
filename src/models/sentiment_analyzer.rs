use vader_sentiment::SentimentIntensityAnalyzer;

use crate::constants::DEFAULT_SENTIMENT_CONFIG;
use crate::models::lexicon::normalize_symbol;
use crate::models::Error;
use crate::types::Polarity;

/// Financial slang and its polarity weight, used to bias the general-purpose
/// scorer toward retail-trading discussion semantics. Generic sentiment
/// lexicons misread most of these.
const BULLISH_KEYWORDS: &[(&str, f64)] = &[
    ("to the moon", 0.5),
    ("mooning", 0.5),
    ("moon", 0.4),
    ("tendies", 0.4),
    ("diamond hands", 0.4),
    ("stonks", 0.3),
    ("rocket", 0.3),
    ("bullish", 0.5),
    ("bull run", 0.5),
    ("calls", 0.2),
    ("buy the dip", 0.3),
    ("breakout", 0.3),
    ("rally", 0.4),
    ("rallies", 0.4),
    ("surge", 0.4),
    ("surges", 0.4),
    ("soar", 0.5),
    ("soars", 0.5),
    ("all-time high", 0.5),
    ("record high", 0.4),
    ("short squeeze", 0.4),
    ("squeeze", 0.3),
    ("undervalued", 0.3),
    ("money printer", 0.3),
    ("yolo", 0.2),
];

const BEARISH_KEYWORDS: &[(&str, f64)] = &[
    ("bagholder", -0.5),
    ("bag holder", -0.5),
    ("paper hands", -0.3),
    ("puts", -0.2),
    ("bearish", -0.5),
    ("crash", -0.5),
    ("crashes", -0.5),
    ("plunge", -0.5),
    ("plunges", -0.5),
    ("dump", -0.4),
    ("dumps", -0.4),
    ("collapse", -0.5),
    ("collapses", -0.5),
    ("tanking", -0.4),
    ("tanked", -0.4),
    ("rug pull", -0.5),
    ("worthless", -0.4),
    ("bankrupt", -0.5),
    ("bankruptcy", -0.5),
    ("overvalued", -0.3),
    ("sell-off", -0.4),
    ("selloff", -0.4),
    ("lawsuit", -0.4),
    ("fraud", -0.5),
    ("scam", -0.6),
];

/// Polarity score in [-1.0, +1.0]. Pure value, no identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub polarity: Polarity,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self { polarity: 0.0 }
    }

    pub fn is_bullish(&self) -> bool {
        self.polarity > 0.0
    }

    pub fn is_bearish(&self) -> bool {
        self.polarity < 0.0
    }
}

/// How ticker-scoped scoring combines the scores of multiple context windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAggregation {
    /// Average of all window scores.
    Mean,
    /// The window score with the largest magnitude.
    Peak,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentConfig {
    /// Words kept on each side of a ticker occurrence when scoping score
    /// computation to that ticker.
    pub context_window_words: usize,
    pub aggregation: WindowAggregation,
}

/// Scores text polarity with a fixed rule-based scorer biased toward
/// retail-trading vocabulary. Deterministic: identical input always yields
/// an identical score.
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
    config: SentimentConfig,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_SENTIMENT_CONFIG)
    }

    pub fn with_config(config: SentimentConfig) -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
            config,
        }
    }

    /// Scores the polarity of an entire text. Empty or whitespace-only text
    /// is neutral, not an error.
    pub fn sentiment(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores["compound"];
        let polarity = (compound + financial_boost(text) * 0.5).clamp(-1.0, 1.0);

        SentimentScore { polarity }
    }

    /// Scores the polarity of a text with respect to one ticker symbol:
    /// every occurrence of the symbol (cashtagged or bare, any case)
    /// contributes a context window of surrounding words, each window is
    /// scored independently, and the window scores are combined per the
    /// configured aggregation rule.
    ///
    /// A symbol that never occurs in the text yields a neutral score. The
    /// symbol itself must be ticker-shaped; lexicon membership is the
    /// caller's concern.
    pub fn ticker_sentiment(&self, text: &str, symbol: &str) -> Result<SentimentScore, Error> {
        let symbol = normalize_symbol(symbol)?;

        let words: Vec<&str> = text.split_whitespace().collect();
        let half_width = self.config.context_window_words;
        let mut window_scores: Vec<Polarity> = Vec::new();

        for (index, word) in words.iter().enumerate() {
            if !word_mentions_symbol(word, &symbol) {
                continue;
            }

            let start = index.saturating_sub(half_width);
            let end = (index + half_width + 1).min(words.len());
            let context = words[start..end].join(" ");
            window_scores.push(self.sentiment(&context).polarity);
        }

        if window_scores.is_empty() {
            return Ok(SentimentScore::neutral());
        }

        let polarity = match self.config.aggregation {
            WindowAggregation::Mean => {
                window_scores.iter().sum::<Polarity>() / window_scores.len() as Polarity
            }
            WindowAggregation::Peak => window_scores
                .iter()
                .copied()
                .max_by(|a, b| {
                    a.abs()
                        .partial_cmp(&b.abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .unwrap_or(0.0),
        };

        Ok(SentimentScore { polarity })
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn financial_boost(text: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let mut boost = 0.0;

    for (keyword, score) in BULLISH_KEYWORDS {
        if text_lower.contains(keyword) {
            boost += score;
        }
    }

    for (keyword, score) in BEARISH_KEYWORDS {
        if text_lower.contains(keyword) {
            boost += score;
        }
    }

    boost
}

fn word_mentions_symbol(word: &str, symbol: &str) -> bool {
    let core: String = word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    core.eq_ignore_ascii_case(symbol)
}
