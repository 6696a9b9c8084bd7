use crate::models::{SentimentConfig, WindowAggregation};

/// Longest candidate token considered a possible ticker symbol.
pub const MAX_SYMBOL_LEN: usize = 6;

/// Marker character authors use to explicitly tag a ticker reference.
pub const CASHTAG_MARKER: char = '$';

/// Maximum distance, in tokens, between the elements of a single option
/// contract expression.
pub const DEFAULT_CONTRACT_TOKEN_WINDOW: usize = 8;

pub const DEFAULT_SENTIMENT_CONFIG: SentimentConfig = SentimentConfig {
    context_window_words: 10,
    aggregation: WindowAggregation::Mean,
};

/// Capitalized English words that collide with ticker-shaped tokens. A
/// candidate matching one of these is suppressed unless the author marked it
/// with a cashtag.
pub const DEFAULT_AMBIGUITY_WORDS: &[&str] = &[
    "A", "ALL", "ALSO", "AN", "AND", "ANY", "ARE", "AROUND", "AS", "AT", "BACK", "BE", "BEEN",
    "BEFORE", "BEING", "BETTER", "BIG", "BOT", "BUT", "BUY", "CAN", "CANT", "COME", "COULD", "DAY",
    "DAYS", "DID", "DIDNT", "DO", "DOES", "DOING", "EVEN", "EVERY", "FEEL", "FEW", "FIND", "FIRST",
    "FOR", "FROM", "GET", "GO", "GONNA", "GOT", "HAD", "HAS", "HAVE", "HERE", "HIS", "HOLD", "HOW",
    "I", "IF", "ILL", "IM", "IN", "INTO", "IS", "ISNT", "IT", "ITS", "KEEP", "KNOW", "LAST", "LOL",
    "LOOK", "LOT", "MADE", "MAKE", "MANY", "MARKET", "MAYBE", "ME", "MEAN", "MIGHT", "MOST",
    "MUCH", "MY", "NEED", "NEW", "NEWS", "NOW", "OF", "ON", "ONE", "ONLY", "OR", "OTHER", "OUT",
    "PEOPLE", "POINT", "PRETTY", "REALLY", "SAID", "SAME", "SAY", "SELL", "SHOULD", "SINCE", "SO",
    "SOME", "STILL", "SURE", "TAKE", "THAN", "THANKS", "THAT", "THATS", "THE", "THEIR", "THEM",
    "THEN", "THERE", "THESE", "THEY", "THING", "THINK", "THIS", "THOSE", "THOUGH", "TIME", "TO",
    "TODAY", "TOO", "UNTIL", "UP", "US", "USE", "WAS", "WAY", "WE", "WEEK", "WERE", "WHAT", "WHEN",
    "WHERE", "WHICH", "WHILE", "WHO", "WHY", "WILL", "WITH", "WOULD", "YEAH", "YEAR", "YEARS",
    "YES", "YOU", "YOUR", "YOURE",
];
