use finbuzz::Tokenizer;

#[cfg(test)]
mod ticker_candidate_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_with_uppercase_symbols() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "AAPL MSFT TSLA";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_tokenize_ignores_lowercase_words() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "aapl msft tsla";
        let tokens = tokenizer.tokenize(text);
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_with_mixed_case() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "AAPL msft TSLA Goog";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn test_tokenize_preserves_byte_offsets() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "MSFT then AAPL";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].offset, 10);
    }

    #[test]
    fn test_tokenize_flags_cashtags() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "grab $GME now";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].cashtag);
        assert_eq!(tokens[0].text, "GME");
        assert_eq!(tokens[0].offset, 5);
        assert_eq!(tokens[0].raw(), "$GME");
    }

    #[test]
    fn test_tokenize_accepts_lowercase_cashtags() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "$gme to the moon";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "gme");
        assert!(tokens[0].cashtag);
    }

    #[test]
    fn test_tokenize_with_punctuation() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "AAPL, MSFT; TSLA. GME!";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["AAPL", "MSFT", "TSLA", "GME"]);
    }

    #[test]
    fn test_tokenize_with_emoji_separators() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "🚀🚀 GME 🚀🚀";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "GME");
        assert_eq!(tokens[0].offset, 9);
    }

    #[test]
    fn test_tokenize_skips_urls() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let text = "see https://example.com/AAPL for details, also MSFT";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["MSFT"]);
    }

    #[test]
    fn test_tokenize_empty_string() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        let tokens = tokenizer.tokenize("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_word_boundaries() {
        let tokenizer = Tokenizer::ticker_candidate_parser();

        // "GME2" is one maximal run, not a GME mention
        let text = "GME2 and AMC";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["GME2", "AMC"]);
    }
}

#[cfg(test)]
mod contract_element_tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_dates_whole() {
        let tokenizer = Tokenizer::contract_element_parser();

        let text = "AAPL 500C 9/12/21";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["AAPL", "500C", "9/12/21"]);
    }

    #[test]
    fn test_tokenize_keeps_decimal_strikes_whole() {
        let tokenizer = Tokenizer::contract_element_parser();

        let text = "TSLA 420.69C 4/20";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["TSLA", "420.69C", "4/20"]);
    }

    #[test]
    fn test_tokenize_drops_trailing_punctuation() {
        let tokenizer = Tokenizer::contract_element_parser();

        let text = "expiring 9/12.";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["expiring", "9/12"]);
    }

    #[test]
    fn test_tokenize_accepts_lowercase_runs() {
        let tokenizer = Tokenizer::contract_element_parser();

        let text = "aapl 500c";
        let tokens = tokenizer.tokenize(text);
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["aapl", "500c"]);
    }

    #[test]
    fn test_tokenize_flags_currency_markers() {
        let tokenizer = Tokenizer::contract_element_parser();

        let text = "AAPL $500C 9/12";
        let tokens = tokenizer.tokenize(text);
        assert_eq!(tokens[1].text, "500C");
        assert!(tokens[1].cashtag);
    }
}
