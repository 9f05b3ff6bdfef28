use crate::entities::{Currency, Fraction, Token};
use crate::errors::{AmmError, Result};
use crate::number::{FormatOptions, ten_pow};
use crate::utils::{SolidityType, validate_solidity_type_instance};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A raw integer amount of a currency, held as `raw / 10^decimals`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    currency: Currency,
    amount: Fraction,
}

impl CurrencyAmount {
    /// Fails with `InvalidSolidityType` unless `0 <= raw <= 2^256 - 1`
    pub fn new(currency: Currency, raw: impl Into<BigInt>) -> Result<Self> {
        let raw = raw.into();
        validate_solidity_type_instance(&raw, SolidityType::Uint256)?;
        let amount = Fraction::new(raw, ten_pow(currency.decimals() as usize))?;
        Ok(Self { currency, amount })
    }

    pub fn ether(raw: impl Into<BigInt>) -> Result<Self> {
        Self::new(Currency::ether(), raw)
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn raw(&self) -> &BigInt {
        self.amount.numerator()
    }

    /// `raw / 10^decimals`
    pub fn fraction(&self) -> &Fraction {
        &self.amount
    }

    pub fn to_significant(&self, significant_digits: usize, options: &FormatOptions) -> String {
        self.amount.to_significant(significant_digits, options)
    }

    pub fn to_fixed(&self, decimal_places: usize, options: &FormatOptions) -> String {
        self.amount.to_fixed(decimal_places, options)
    }

    /// Every decimal of the currency, e.g. `1.500000` for 1500000 raw units of a 6 decimal token
    pub fn to_exact(&self, options: &FormatOptions) -> String {
        self.amount.to_fixed(self.currency.decimals() as usize, options)
    }
}

impl Display for CurrencyAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(&FormatOptions::default()), self.currency)
    }
}

/// A currency amount bound to a specific token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    token: Token,
    amount: CurrencyAmount,
}

impl TokenAmount {
    pub fn new(token: Token, raw: impl Into<BigInt>) -> Result<Self> {
        let amount = CurrencyAmount::new(token.get_currency().clone(), raw)?;
        Ok(Self { token, amount })
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn currency(&self) -> &Currency {
        self.amount.currency()
    }

    pub fn raw(&self) -> &BigInt {
        self.amount.raw()
    }

    pub fn fraction(&self) -> &Fraction {
        self.amount.fraction()
    }

    pub fn currency_amount(&self) -> &CurrencyAmount {
        &self.amount
    }

    pub fn add(&self, other: &TokenAmount) -> Result<TokenAmount> {
        if self.token != other.token {
            return Err(AmmError::DifferentToken);
        }
        TokenAmount::new(self.token.clone(), self.raw() + other.raw())
    }

    /// Fails with `InvalidSolidityType` when the result would be negative
    pub fn subtract(&self, other: &TokenAmount) -> Result<TokenAmount> {
        if self.token != other.token {
            return Err(AmmError::DifferentToken);
        }
        TokenAmount::new(self.token.clone(), self.raw() - other.raw())
    }

    /// Same token and same value
    pub fn equals(&self, other: &TokenAmount) -> bool {
        self.token == other.token && self.fraction().equal_to(other.fraction())
    }

    pub fn to_significant(&self, significant_digits: usize, options: &FormatOptions) -> String {
        self.amount.to_significant(significant_digits, options)
    }

    pub fn to_fixed(&self, decimal_places: usize, options: &FormatOptions) -> String {
        self.amount.to_fixed(decimal_places, options)
    }

    pub fn to_exact(&self, options: &FormatOptions) -> String {
        self.amount.to_exact(options)
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(&FormatOptions::default()), self.token.get_symbol())
    }
}
