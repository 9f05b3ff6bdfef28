use crate::entities::{Pair, Route, Token, TokenAmount, Trade, trade_comparator};
use crate::errors::{AmmError, Result};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradeOptions {
    /// How many trades to keep
    pub max_num_results: usize,
    /// Longest route considered, one hop per pair
    pub max_hops: usize,
}

impl Default for BestTradeOptions {
    fn default() -> Self {
        Self { max_num_results: 3, max_hops: 3 }
    }
}

impl BestTradeOptions {
    pub fn new(max_num_results: usize, max_hops: usize) -> Self {
        Self { max_num_results, max_hops }
    }

    fn validate(&self) -> Result<()> {
        if self.max_hops == 0 || self.max_num_results == 0 {
            return Err(AmmError::InvalidOption);
        }
        Ok(())
    }

    fn one_hop_less(&self) -> Self {
        Self { max_hops: self.max_hops - 1, ..*self }
    }
}

/// Inserts `add` into the sorted `items`, keeping at most `max_size` of them.
///
/// Returns the new list and the element that fell off the end, if any. Equal elements keep
/// insertion order. Panics if `max_size` is zero or `items` is already longer than `max_size`.
pub fn sorted_insert<T, F>(mut items: Vec<T>, add: T, max_size: usize, comparator: F) -> (Vec<T>, Option<T>)
where
    F: Fn(&T, &T) -> Ordering,
{
    assert!(max_size > 0, "max_size must be positive");
    assert!(items.len() <= max_size, "items exceed max_size");

    let is_full = items.len() == max_size;
    if is_full && items.last().is_some_and(|last| comparator(last, &add) != Ordering::Greater) {
        return (items, Some(add));
    }

    let index = items.partition_point(|item| comparator(item, &add) != Ordering::Greater);
    items.insert(index, add);
    let popped = if is_full { items.pop() } else { None };
    (items, popped)
}

/// Best trades spending exactly `amount_in` to reach `token_out`, best first.
///
/// Routes are simple: each pair is used at most once. A pair too shallow for the amount only
/// drops that candidate. `None` options mean three results of at most three hops.
pub fn best_trade_exact_in(pairs: &[Pair], amount_in: &TokenAmount, token_out: &Token, options: Option<BestTradeOptions>) -> Result<Vec<Trade>> {
    let options = options.unwrap_or_default();
    let trades = search_exact_in(pairs, amount_in, token_out, options, &[], amount_in, Vec::new())?;
    debug!(pairs = pairs.len(), trades = trades.len(), input = %amount_in.token(), output = %token_out, "best exact input trades");
    Ok(trades)
}

/// Best trades receiving exactly `amount_out` when paying in `token_in`, best first
pub fn best_trade_exact_out(pairs: &[Pair], token_in: &Token, amount_out: &TokenAmount, options: Option<BestTradeOptions>) -> Result<Vec<Trade>> {
    let options = options.unwrap_or_default();
    let trades = search_exact_out(pairs, token_in, amount_out, options, &[], amount_out, Vec::new())?;
    debug!(pairs = pairs.len(), trades = trades.len(), input = %token_in, output = %amount_out.token(), "best exact output trades");
    Ok(trades)
}

fn check_search_state(pairs: &[Pair], options: &BestTradeOptions, current_pairs: &[Pair], amount: &TokenAmount, original: &TokenAmount) -> Result<()> {
    if pairs.is_empty() {
        return Err(AmmError::InvalidPairs);
    }
    options.validate()?;
    if current_pairs.is_empty() && amount != original {
        return Err(AmmError::InvalidRecursion);
    }
    Ok(())
}

fn is_usable(pair: &Pair, token: &Token) -> bool {
    pair.involves_token(token) && !pair.reserve0().raw().is_zero() && !pair.reserve1().raw().is_zero()
}

fn without(pairs: &[Pair], index: usize) -> Vec<Pair> {
    pairs[..index].iter().chain(&pairs[index + 1..]).cloned().collect()
}

fn search_exact_in(
    pairs: &[Pair],
    amount_in: &TokenAmount,
    token_out: &Token,
    options: BestTradeOptions,
    current_pairs: &[Pair],
    original_amount_in: &TokenAmount,
    mut best_trades: Vec<Trade>,
) -> Result<Vec<Trade>> {
    check_search_state(pairs, &options, current_pairs, amount_in, original_amount_in)?;

    for (i, pair) in pairs.iter().enumerate() {
        if !is_usable(pair, amount_in.token()) {
            continue;
        }

        let amount_out = match pair.get_output_amount(amount_in) {
            Ok((amount_out, _)) => amount_out,
            Err(e) if e.is_insufficient_liquidity() => {
                trace!(pair = %pair.address(), error = %e, "skipping pair");
                continue;
            }
            Err(e) => return Err(e),
        };

        let mut next_pairs = current_pairs.to_vec();
        next_pairs.push(pair.clone());

        if amount_out.token() == token_out {
            let route = Route::new(next_pairs, original_amount_in.token().clone(), Some(token_out.clone()))?;
            let trade = Trade::exact_in(route, original_amount_in.clone())?;
            (best_trades, _) = sorted_insert(best_trades, trade, options.max_num_results, trade_comparator);
        } else if options.max_hops > 1 && pairs.len() > 1 {
            best_trades = search_exact_in(
                &without(pairs, i),
                &amount_out,
                token_out,
                options.one_hop_less(),
                &next_pairs,
                original_amount_in,
                best_trades,
            )?;
        }
    }

    Ok(best_trades)
}

fn search_exact_out(
    pairs: &[Pair],
    token_in: &Token,
    amount_out: &TokenAmount,
    options: BestTradeOptions,
    current_pairs: &[Pair],
    original_amount_out: &TokenAmount,
    mut best_trades: Vec<Trade>,
) -> Result<Vec<Trade>> {
    check_search_state(pairs, &options, current_pairs, amount_out, original_amount_out)?;

    for (i, pair) in pairs.iter().enumerate() {
        if !is_usable(pair, amount_out.token()) {
            continue;
        }

        let amount_in = match pair.get_input_amount(amount_out) {
            Ok((amount_in, _)) => amount_in,
            Err(e) if e.is_insufficient_liquidity() => {
                trace!(pair = %pair.address(), error = %e, "skipping pair");
                continue;
            }
            Err(e) => return Err(e),
        };

        // walking backwards, so pairs are prepended
        let mut next_pairs = Vec::with_capacity(current_pairs.len() + 1);
        next_pairs.push(pair.clone());
        next_pairs.extend_from_slice(current_pairs);

        if amount_in.token() == token_in {
            let route = Route::new(next_pairs, token_in.clone(), Some(original_amount_out.token().clone()))?;
            let trade = Trade::exact_out(route, original_amount_out.clone())?;
            (best_trades, _) = sorted_insert(best_trades, trade, options.max_num_results, trade_comparator);
        } else if options.max_hops > 1 && pairs.len() > 1 {
            best_trades = search_exact_out(
                &without(pairs, i),
                token_in,
                &amount_in,
                options.one_hop_less(),
                &next_pairs,
                original_amount_out,
                best_trades,
            )?;
        }
    }

    Ok(best_trades)
}
