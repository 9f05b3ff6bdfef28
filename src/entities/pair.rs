use crate::entities::{Price, Token, TokenAmount};
use crate::errors::{AmmError, Result};
use crate::utils::{ChainId, DECIMALS_18, FEE_DENOMINATOR, FEE_NUMERATOR, MINIMUM_LIQUIDITY, PairAddressCache, UNIV2_NAME, UNIV2_SYMBOL};
use alloy_primitives::Address;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

/// Two token amounts, `first` sorting before `second`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub first: TokenAmount,
    pub second: TokenAmount,
}

impl TokenAmounts {
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Self> {
        if amount_a.token().sorts_before(amount_b.token())? {
            Ok(Self { first: amount_a, second: amount_b })
        } else {
            Ok(Self { first: amount_b, second: amount_a })
        }
    }
}

/// Two tokens, `first` sorting before `second`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tokens {
    pub first: Token,
    pub second: Token,
}

impl Tokens {
    pub fn new(token_a: Token, token_b: Token) -> Result<Self> {
        if token_a.sorts_before(&token_b)? { Ok(Self { first: token_a, second: token_b }) } else { Ok(Self { first: token_b, second: token_a }) }
    }
}

/// Snapshot of a constant product pool.
///
/// Swaps never mutate a pair, they return the post-trade pair next to the amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    liquidity_token: Token,
    reserves: TokenAmounts,
}

impl Pair {
    /// Orders the reserves and derives the pool address through `cache`
    pub fn new(amount_a: TokenAmount, amount_b: TokenAmount, cache: &PairAddressCache) -> Result<Pair> {
        let reserves = TokenAmounts::new(amount_a, amount_b)?;
        let address = cache.get_address(reserves.first.token().get_address(), reserves.second.token().get_address());
        let liquidity_token = Token::new(reserves.first.token().get_chain_id(), address, DECIMALS_18, UNIV2_SYMBOL, UNIV2_NAME)?;
        Ok(Pair { liquidity_token, reserves })
    }

    // same pool, other reserves
    fn with_reserves(&self, amount_a: TokenAmount, amount_b: TokenAmount) -> Result<Pair> {
        Ok(Pair { liquidity_token: self.liquidity_token.clone(), reserves: TokenAmounts::new(amount_a, amount_b)? })
    }

    pub fn address(&self) -> Address {
        self.liquidity_token.get_address()
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn chain_id(&self) -> ChainId {
        self.token0().get_chain_id()
    }

    pub fn token0(&self) -> &Token {
        self.reserves.first.token()
    }

    pub fn token1(&self) -> &Token {
        self.reserves.second.token()
    }

    pub fn tokens(&self) -> Tokens {
        Tokens { first: self.token0().clone(), second: self.token1().clone() }
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.reserves.first
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.reserves.second
    }

    pub fn reserves(&self) -> &TokenAmounts {
        &self.reserves
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token == self.token0() || token == self.token1()
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount> {
        if token == self.token0() {
            Ok(self.reserve0())
        } else if token == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(AmmError::DifferentToken)
        }
    }

    /// The token on the other side of `token`
    pub fn other_token(&self, token: &Token) -> Result<&Token> {
        if token == self.token0() {
            Ok(self.token1())
        } else if token == self.token1() {
            Ok(self.token0())
        } else {
            Err(AmmError::DifferentToken)
        }
    }

    /// Current price of token0 in token1, `ZeroDenominator` while reserve0 is empty
    pub fn token0_price(&self) -> Result<Price> {
        Price::new(self.token0().get_currency().clone(), self.token1().get_currency().clone(), self.reserve0().raw().clone(), self.reserve1().raw().clone())
    }

    /// Current price of token1 in token0, `ZeroDenominator` while reserve1 is empty
    pub fn token1_price(&self) -> Result<Price> {
        Price::new(self.token1().get_currency().clone(), self.token0().get_currency().clone(), self.reserve1().raw().clone(), self.reserve0().raw().clone())
    }

    pub fn price_of(&self, token: &Token) -> Result<Price> {
        if token == self.token0() {
            self.token0_price()
        } else if token == self.token1() {
            self.token1_price()
        } else {
            Err(AmmError::DifferentToken)
        }
    }

    fn has_empty_reserve(&self) -> bool {
        self.reserve0().raw().is_zero() || self.reserve1().raw().is_zero()
    }

    /// Output of swapping `input_amount` in, after the 0.3% fee, and the pair after the swap
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(input_amount.token()) {
            return Err(AmmError::DifferentToken);
        }
        if self.has_empty_reserve() {
            return Err(AmmError::InsufficientReserves);
        }

        let input_reserve = self.reserve_of(input_amount.token())?;
        let output_token = self.other_token(input_amount.token())?;
        let output_reserve = self.reserve_of(output_token)?;

        let input_with_fee = input_amount.raw() * FEE_NUMERATOR;
        let numerator = &input_with_fee * output_reserve.raw();
        let denominator = input_reserve.raw() * FEE_DENOMINATOR + &input_with_fee;
        let output_amount = TokenAmount::new(output_token.clone(), numerator / denominator)?;
        if output_amount.raw().is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }

        let pair = self.with_reserves(input_reserve.add(input_amount)?, output_reserve.subtract(&output_amount)?)?;
        Ok((output_amount, pair))
    }

    /// Input needed to receive `output_amount`, and the pair after the swap.
    ///
    /// The floor quotient is bumped by one even when the division is exact.
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<(TokenAmount, Pair)> {
        if !self.involves_token(output_amount.token()) {
            return Err(AmmError::DifferentToken);
        }

        let output_reserve = self.reserve_of(output_amount.token())?;
        if self.has_empty_reserve() || output_amount.raw() >= output_reserve.raw() {
            return Err(AmmError::InsufficientReserves);
        }

        let input_token = self.other_token(output_amount.token())?;
        let input_reserve = self.reserve_of(input_token)?;

        let numerator = input_reserve.raw() * output_amount.raw() * FEE_DENOMINATOR;
        let denominator = (output_reserve.raw() - output_amount.raw()) * FEE_NUMERATOR;
        let input_amount = TokenAmount::new(input_token.clone(), numerator / denominator + 1u8)?;

        let pair = self.with_reserves(input_reserve.add(&input_amount)?, output_reserve.subtract(output_amount)?)?;
        Ok((input_amount, pair))
    }

    /// Liquidity tokens minted for depositing `amount_a` and `amount_b`
    pub fn get_liquidity_minted(&self, total_supply: &TokenAmount, amount_a: &TokenAmount, amount_b: &TokenAmount) -> Result<TokenAmount> {
        if *total_supply.token() != self.liquidity_token {
            return Err(AmmError::DifferentToken);
        }

        let amounts = TokenAmounts::new(amount_a.clone(), amount_b.clone())?;
        if amounts.first.token() != self.token0() || amounts.second.token() != self.token1() {
            return Err(AmmError::DifferentToken);
        }

        let liquidity = if total_supply.raw().is_zero() {
            (amounts.first.raw() * amounts.second.raw()).sqrt() - MINIMUM_LIQUIDITY
        } else {
            let amount0 = amounts.first.raw() * total_supply.raw() / self.reserve0().raw();
            let amount1 = amounts.second.raw() * total_supply.raw() / self.reserve1().raw();
            amount0.min(amount1)
        };

        if !liquidity.is_positive() {
            return Err(AmmError::InsufficientInputAmount);
        }
        TokenAmount::new(self.liquidity_token.clone(), liquidity)
    }

    /// Amount of `token` redeemable for `liquidity`.
    ///
    /// With `fee_on`, the supply first grows by the protocol fee accrued since `k_last`.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<&BigInt>,
    ) -> Result<TokenAmount> {
        if !self.involves_token(token) || *total_supply.token() != self.liquidity_token || *liquidity.token() != self.liquidity_token {
            return Err(AmmError::DifferentToken);
        }
        if liquidity.raw() > total_supply.raw() {
            return Err(AmmError::InvalidLiquidity);
        }

        let total_supply_adjusted = self.adjust_total_supply(total_supply, fee_on, k_last)?;
        let reserve = self.reserve_of(token)?;
        TokenAmount::new(token.clone(), liquidity.raw() * reserve.raw() / total_supply_adjusted.raw())
    }

    fn adjust_total_supply(&self, total_supply: &TokenAmount, fee_on: bool, k_last: Option<&BigInt>) -> Result<TokenAmount> {
        if !fee_on {
            return Ok(total_supply.clone());
        }
        let k_last = match k_last {
            Some(k_last) if !k_last.is_negative() => k_last,
            _ => return Err(AmmError::InvalidKLast),
        };
        if k_last.is_zero() {
            return Ok(total_supply.clone());
        }

        let root_k = (self.reserve0().raw() * self.reserve1().raw()).sqrt();
        let root_k_last = k_last.sqrt();
        if root_k <= root_k_last {
            return Ok(total_supply.clone());
        }

        let numerator = total_supply.raw() * (&root_k - &root_k_last);
        let denominator = root_k * 5u8 + root_k_last;
        let fee_liquidity = TokenAmount::new(self.liquidity_token.clone(), numerator / denominator)?;
        total_supply.add(&fee_liquidity)
    }
}
