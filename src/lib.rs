// Value layers: exact numbers, then tokens and pools, then routes and trades
pub mod number;
pub mod entities;

// Shared plumbing: errors, configuration, constants, pair address cache
pub mod config;
pub mod errors;
pub mod utils;

pub use config::RouterConfig;
pub use entities::{
    BestTradeOptions, Currency, CurrencyAmount, Fraction, Pair, Percent, Price, Route, Token, TokenAmount, TokenAmounts, Tokens, Trade,
    best_trade_exact_in, best_trade_exact_out, input_output_comparator, sorted_insert, trade_comparator,
};
pub use errors::{AmmError, Result};
pub use number::{Decimal, FormatOptions, Rounding, decimal_format, decimal_round};
pub use utils::{CacheStats, ChainId, PairAddressCache, SolidityType, TradeType};
