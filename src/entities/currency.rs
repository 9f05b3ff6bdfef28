use crate::errors::Result;
use crate::utils::{DECIMALS_18, SolidityType, validate_solidity_type_instance};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A fungible asset described by its decimals, symbol and name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    decimals: u8,
    symbol: String,
    name: String,
}

impl Currency {
    /// Fails with `InvalidSolidityType` when `decimals` does not fit a `uint8`
    pub fn new(decimals: u32, symbol: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        validate_solidity_type_instance(&BigInt::from(decimals), SolidityType::Uint8)?;
        Ok(Self { decimals: decimals as u8, symbol: symbol.into(), name: name.into() })
    }

    /// The chain's native currency
    pub fn ether() -> Self {
        Self { decimals: DECIMALS_18 as u8, symbol: "ETH".to_string(), name: "Ether".to_string() }
    }

    pub fn wrapped_ether() -> Self {
        Self { decimals: DECIMALS_18 as u8, symbol: "WETH".to_string(), name: "Wrapped Ether".to_string() }
    }

    pub fn is_ether(&self) -> bool {
        *self == Self::ether()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AmmError;

    #[test]
    fn test_decimals_must_fit_uint8() {
        assert!(Currency::new(255, "MAX", "Max decimals").is_ok());
        assert_eq!(
            Currency::new(256, "BAD", "Too many decimals"),
            Err(AmmError::InvalidSolidityType { value: BigInt::from(256), ty: SolidityType::Uint8 })
        );
    }

    #[test]
    fn test_equality_uses_every_field() -> eyre::Result<()> {
        assert_eq!(Currency::new(18, "ETH", "Ether")?, Currency::ether());
        assert_ne!(Currency::new(18, "ETH", "Ethereum")?, Currency::ether());
        assert_ne!(Currency::new(6, "ETH", "Ether")?, Currency::ether());
        assert!(Currency::ether().is_ether());
        Ok(())
    }
}
