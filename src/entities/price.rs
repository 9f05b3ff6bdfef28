use crate::entities::{Currency, CurrencyAmount, Fraction, Pair, Route, Token};
use crate::errors::{AmmError, Result};
use crate::number::{FormatOptions, ten_pow};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Amount of `quote_currency` per unit of `base_currency`.
///
/// `raw()` is in raw units (quote raw over base raw), `adjusted()` multiplies by
/// `10^base.decimals / 10^quote.decimals` to give the human readable price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    fraction: Fraction,
    base_currency: Currency,
    quote_currency: Currency,
    scalar: Fraction,
}

impl Price {
    /// `denominator` base units trade for `numerator` quote units.
    ///
    /// Fails with `ZeroDenominator` when `denominator` is zero.
    pub fn new(base_currency: Currency, quote_currency: Currency, denominator: impl Into<BigInt>, numerator: impl Into<BigInt>) -> Result<Self> {
        let fraction = Fraction::new(numerator, denominator)?;
        let scalar = Fraction::new(ten_pow(base_currency.decimals() as usize), ten_pow(quote_currency.decimals() as usize))?;
        Ok(Self { fraction, base_currency, quote_currency, scalar })
    }

    pub fn from_route(route: &Route) -> Result<Price> {
        Price::from_path(route.pairs(), route.path())
    }

    /// Product of the per-hop prices along `path`, where `path[i]` enters `pairs[i]`
    pub fn from_path(pairs: &[Pair], path: &[Token]) -> Result<Price> {
        let mut prices = pairs.iter().zip(path).map(|(pair, token_in)| {
            if *token_in == *pair.token0() {
                Price::new(pair.reserve0().currency().clone(), pair.reserve1().currency().clone(), pair.reserve0().raw().clone(), pair.reserve1().raw().clone())
            } else {
                Price::new(pair.reserve1().currency().clone(), pair.reserve0().currency().clone(), pair.reserve1().raw().clone(), pair.reserve0().raw().clone())
            }
        });

        let first = prices.next().ok_or(AmmError::InvalidPairs)??;
        prices.try_fold(first, |price, next| price.multiply(&next?))
    }

    pub fn base_currency(&self) -> &Currency {
        &self.base_currency
    }

    pub fn quote_currency(&self) -> &Currency {
        &self.quote_currency
    }

    pub fn scalar(&self) -> &Fraction {
        &self.scalar
    }

    pub fn raw(&self) -> Fraction {
        self.fraction.clone()
    }

    pub fn adjusted(&self) -> Fraction {
        self.fraction.multiply(&self.scalar)
    }

    /// Fails with `ZeroDenominator` for a zero price
    pub fn invert(&self) -> Result<Price> {
        Price::new(self.quote_currency.clone(), self.base_currency.clone(), self.fraction.numerator().clone(), self.fraction.denominator().clone())
    }

    /// Chains `self` (A -> B) with `other` (B -> C) into A -> C
    pub fn multiply(&self, other: &Price) -> Result<Price> {
        if self.quote_currency != other.base_currency {
            return Err(AmmError::InvalidCurrency);
        }
        let fraction = self.fraction.multiply(&other.fraction);
        Price::new(self.base_currency.clone(), other.quote_currency.clone(), fraction.denominator().clone(), fraction.numerator().clone())
    }

    /// Converts an amount of the base currency into the quote currency, rounding down
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount> {
        if self.base_currency != *amount.currency() {
            return Err(AmmError::InvalidCurrency);
        }
        let quoted = self.fraction.multiply(&Fraction::from_integer(amount.raw().clone())).quotient();
        CurrencyAmount::new(self.quote_currency.clone(), quoted)
    }

    pub fn to_significant(&self, significant_digits: usize, options: &FormatOptions) -> String {
        self.adjusted().to_significant(significant_digits, options)
    }

    pub fn to_fixed(&self, decimal_places: usize, options: &FormatOptions) -> String {
        self.adjusted().to_fixed(decimal_places, options)
    }
}
