use finbuzz::{ContractParser, SentimentAnalyzer, TickerLexicon, TickerParser};

fn main() {
    env_logger::init();

    let lexicon = TickerLexicon::new(["AAPL", "GME"]).unwrap();
    let text = "GME to the moon! Grabbed some AAPL $150C for 9/17 too.";

    println!("Extracted entities for the given text {:?}", text);

    let ticker_parser = TickerParser::new(&lexicon);
    for mention in ticker_parser.tickers(text) {
        println!("ticker: {} at byte {}", mention.symbol, mention.position);
    }

    let contract_parser = ContractParser::new(&lexicon);
    for contract in contract_parser.contracts(text) {
        println!(
            "contract: {} {} {} expiring {}",
            contract.underlying_symbol, contract.strike_price, contract.side, contract.expiration
        );
    }

    let analyzer = SentimentAnalyzer::new();
    println!("polarity: {:.2}", analyzer.sentiment(text).polarity);
}
