use crate::entities::{CurrencyAmount, Fraction, Percent, Price, Route, Token, TokenAmount};
use crate::errors::{AmmError, Result};
use crate::utils::{ChainId, TradeType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A swap of a fixed input or output amount along a route.
///
/// Assumes no other trade moves the reserves first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: TokenAmount,
    output_amount: TokenAmount,
    execution_price: Price,
    next_mid_price: Price,
    price_impact: Percent,
}

impl Trade {
    pub fn exact_in(route: Route, amount_in: TokenAmount) -> Result<Trade> {
        Trade::new(route, amount_in, TradeType::ExactInput)
    }

    pub fn exact_out(route: Route, amount_out: TokenAmount) -> Result<Trade> {
        Trade::new(route, amount_out, TradeType::ExactOutput)
    }

    /// Simulates `amount` through every pair of `route`.
    ///
    /// Exact input walks forward from the route input, exact output walks backward from the route
    /// output. Native currency endpoints are reported as the chain's WETH amount.
    pub fn new(route: Route, amount: TokenAmount, trade_type: TradeType) -> Result<Trade> {
        let hops = route.pairs().len();
        let mut next_pairs = Vec::with_capacity(hops);

        let (input_amount, output_amount) = match trade_type {
            TradeType::ExactInput => {
                check_endpoint(route.input(), &amount)?;
                let mut current = amount.clone();
                for pair in route.pairs() {
                    let (output, next_pair) = pair.get_output_amount(&current)?;
                    next_pairs.push(next_pair);
                    current = output;
                }
                let output_amount = if route.output().is_native() { wrapped_amount(current.currency_amount(), route.chain_id())? } else { current };
                (amount, output_amount)
            }
            TradeType::ExactOutput => {
                check_endpoint(route.output(), &amount)?;
                let mut current = amount.clone();
                for pair in route.pairs().iter().rev() {
                    let (input, next_pair) = pair.get_input_amount(&current)?;
                    next_pairs.push(next_pair);
                    current = input;
                }
                next_pairs.reverse();
                let input_amount = if route.input().is_native() { wrapped_amount(current.currency_amount(), route.chain_id())? } else { current };
                (input_amount, amount)
            }
        };

        let next_route = Route::new(next_pairs, route.input().clone(), None)?;
        let next_mid_price = next_route.mid_price().clone();
        let execution_price =
            Price::new(input_amount.currency().clone(), output_amount.currency().clone(), input_amount.raw().clone(), output_amount.raw().clone())?;
        let price_impact = compute_price_impact(route.mid_price(), &input_amount, &output_amount)?;

        Ok(Trade { route, trade_type, input_amount, output_amount, execution_price, next_mid_price, price_impact })
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &TokenAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &TokenAmount {
        &self.output_amount
    }

    /// Output per input actually realised by the trade
    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// Route mid price once the trade has moved the reserves
    pub fn next_mid_price(&self) -> &Price {
        &self.next_mid_price
    }

    /// Relative gap between the pre-trade mid price and the execution price
    pub fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// Least output acceptable under `slippage_tolerance`, the exact output for exact output trades
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<TokenAmount> {
        check_slippage_tolerance(slippage_tolerance)?;
        if self.trade_type == TradeType::ExactOutput {
            return Ok(self.output_amount.clone());
        }

        let adjusted = Fraction::from_integer(1)
            .add(slippage_tolerance.fraction())
            .invert()?
            .multiply(&Fraction::from_integer(self.output_amount.raw().clone()))
            .quotient();
        TokenAmount::new(self.output_amount.token().clone(), adjusted)
    }

    /// Most input payable under `slippage_tolerance`, the exact input for exact input trades
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<TokenAmount> {
        check_slippage_tolerance(slippage_tolerance)?;
        if self.trade_type == TradeType::ExactInput {
            return Ok(self.input_amount.clone());
        }

        let adjusted =
            Fraction::from_integer(1).add(slippage_tolerance.fraction()).multiply(&Fraction::from_integer(self.input_amount.raw().clone())).quotient();
        TokenAmount::new(self.input_amount.token().clone(), adjusted)
    }
}

fn check_endpoint(expected: &Token, amount: &TokenAmount) -> Result<()> {
    if expected.get_currency() != amount.currency() {
        return Err(AmmError::InvalidCurrency);
    }
    if expected != amount.token() {
        return Err(AmmError::DifferentToken);
    }
    Ok(())
}

fn check_slippage_tolerance(slippage_tolerance: &Percent) -> Result<()> {
    if slippage_tolerance.fraction().less_than(&Fraction::from_integer(0)) {
        return Err(AmmError::InvalidSlippageTolerance);
    }
    Ok(())
}

/// Re-expresses a native currency amount as the chain's WETH
pub fn wrapped_amount(amount: &CurrencyAmount, chain_id: ChainId) -> Result<TokenAmount> {
    if !amount.currency().is_ether() {
        return Err(AmmError::InvalidCurrency);
    }
    let weth = Token::weth(chain_id).ok_or(AmmError::InvalidCurrency)?;
    TokenAmount::new(weth, amount.raw().clone())
}

/// `(mid_price * input - output) / (mid_price * input)` on raw amounts
fn compute_price_impact(mid_price: &Price, input_amount: &TokenAmount, output_amount: &TokenAmount) -> Result<Percent> {
    let exact_quote = mid_price.raw().multiply(&Fraction::from_integer(input_amount.raw().clone()));
    let slippage = exact_quote.subtract(&Fraction::from_integer(output_amount.raw().clone())).divide(&exact_quote)?;
    Ok(Percent::from(slippage))
}

/// Orders trades with the same endpoints: more output first, then less input.
///
/// Panics when the trades do not share input and output currencies.
pub fn input_output_comparator(a: &Trade, b: &Trade) -> Ordering {
    assert!(
        a.input_amount.currency() == b.input_amount.currency() && a.output_amount.currency() == b.output_amount.currency(),
        "{}",
        AmmError::InvalidCurrency
    );

    let (a_out, b_out) = (a.output_amount.fraction(), b.output_amount.fraction());
    if a_out.equal_to(b_out) {
        return a.input_amount.fraction().compare(b.input_amount.fraction());
    }
    // larger output sorts first
    b_out.compare(a_out)
}

/// [`input_output_comparator`], then lower price impact, then fewer hops
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    input_output_comparator(a, b)
        .then_with(|| a.price_impact.fraction().compare(b.price_impact.fraction()))
        .then_with(|| a.route.path().len().cmp(&b.route.path().len()))
}
