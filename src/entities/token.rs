use crate::entities::Currency;
use crate::errors::{AmmError, Result};
use crate::utils::ChainId;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// An ERC20 token, identified by chain and address
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    currency: Currency,
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state)
    }
}

// metadata is ignored: same chain and address means same token
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Token {
    pub fn new(chain_id: ChainId, address: Address, decimals: u32, symbol: impl Into<String>, name: impl Into<String>) -> Result<Token> {
        Ok(Token { chain_id, address, currency: Currency::new(decimals, symbol, name)? })
    }

    /// Token at `address` carrying the native currency
    pub fn native(chain_id: ChainId, address: Address) -> Token {
        Token { chain_id, address, currency: Currency::ether() }
    }

    /// Wrapped ether of a known network
    pub fn weth(chain_id: ChainId) -> Option<Token> {
        let address = chain_id.weth_address()?;
        Some(Token { chain_id, address, currency: Currency::wrapped_ether() })
    }

    pub fn get_chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn get_currency(&self) -> &Currency {
        &self.currency
    }

    pub fn get_decimals(&self) -> u8 {
        self.currency.decimals()
    }

    pub fn get_symbol(&self) -> &str {
        self.currency.symbol()
    }

    pub fn get_name(&self) -> &str {
        self.currency.name()
    }

    pub fn is_native(&self) -> bool {
        self.currency.is_ether()
    }

    /// Address ordering used to pick `token0` of a pair
    pub fn sorts_before(&self, other: &Token) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(AmmError::DifferentChain);
        }
        if self.address == other.address {
            return Err(AmmError::SameAddress);
        }
        // big-endian bytes order like their lowercase hex strings
        Ok(self.address < other.address)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.currency.symbol(), self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ADDRESS_ONE: Address = address!("0x0000000000000000000000000000000000000001");
    const ADDRESS_TWO: Address = address!("0x0000000000000000000000000000000000000002");

    #[test]
    fn test_equality() -> eyre::Result<()> {
        let token = Token::new(ChainId::Mainnet, ADDRESS_ONE, 18, "ABC", "Abc")?;

        assert_ne!(token, Token::new(ChainId::Mainnet, ADDRESS_TWO, 18, "ABC", "Abc")?);
        assert_ne!(token, Token::new(ChainId::Ropsten, ADDRESS_ONE, 18, "ABC", "Abc")?);
        assert_eq!(token, Token::new(ChainId::Mainnet, ADDRESS_ONE, 9, "ABC", "Abc")?);
        assert_eq!(token, Token::new(ChainId::Mainnet, ADDRESS_ONE, 18, "DEF", "Def")?);
        assert_eq!(token, token.clone());
        Ok(())
    }

    #[test]
    fn test_sorts_before() -> eyre::Result<()> {
        let one = Token::new(ChainId::Mainnet, ADDRESS_ONE, 18, "ONE", "One")?;
        let two = Token::new(ChainId::Mainnet, ADDRESS_TWO, 18, "TWO", "Two")?;
        let other_chain = Token::new(ChainId::Kovan, ADDRESS_TWO, 18, "TWO", "Two")?;

        assert_eq!(one.sorts_before(&two), Ok(true));
        assert_eq!(two.sorts_before(&one), Ok(false));
        assert_eq!(one.sorts_before(&one.clone()), Err(AmmError::SameAddress));
        assert_eq!(one.sorts_before(&other_chain), Err(AmmError::DifferentChain));
        Ok(())
    }

    #[test]
    fn test_sorts_before_matches_hex_order() -> eyre::Result<()> {
        let dai = Token::new(ChainId::Mainnet, address!("0x6B175474E89094C44Da98b954EedeAC495271d0F"), 18, "DAI", "Dai")?;
        let usdc = Token::new(ChainId::Mainnet, address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"), 6, "USDC", "USD Coin")?;
        assert!(dai.sorts_before(&usdc)?);
        assert!(!usdc.sorts_before(&dai)?);
        Ok(())
    }

    #[test]
    fn test_weth_registry() {
        let weth = Token::weth(ChainId::Mainnet).unwrap();
        assert_eq!(weth.get_address(), address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"));
        assert_eq!(weth.get_symbol(), "WETH");
        assert_eq!(weth.get_decimals(), 18);
        assert!(!weth.is_native());
        assert_eq!(Token::weth(ChainId::Ropsten).unwrap().get_address(), Token::weth(ChainId::Rinkeby).unwrap().get_address());
        assert!(Token::weth(ChainId::Other(56)).is_none());
    }

    #[test]
    fn test_native() {
        let native = Token::native(ChainId::Mainnet, Address::ZERO);
        assert!(native.is_native());
        assert_eq!(native.get_currency(), &Currency::ether());
    }
}
