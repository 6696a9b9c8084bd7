pub mod count_ticker_symbol_frequencies;
pub mod dedup_by_key;
pub mod read_ticker_symbol_list;

pub use count_ticker_symbol_frequencies::count_ticker_symbol_frequencies;
pub use dedup_by_key::dedup_by_key;
pub use read_ticker_symbol_list::{read_ticker_symbols_from_file, read_ticker_symbols_from_string};
