mod amount;
mod best_trade;
mod currency;
mod fraction;
mod pair;
mod percent;
mod price;
mod route;
mod token;
mod trade;

pub use amount::{CurrencyAmount, TokenAmount};
pub use best_trade::{BestTradeOptions, best_trade_exact_in, best_trade_exact_out, sorted_insert};
pub use currency::Currency;
pub use fraction::Fraction;
pub use pair::{Pair, TokenAmounts, Tokens};
pub use percent::Percent;
pub use price::Price;
pub use route::Route;
pub use token::Token;
pub use trade::{Trade, input_output_comparator, trade_comparator, wrapped_amount};
