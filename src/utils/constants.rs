use alloy_primitives::{Address, B256, address, b256};
use num_bigint::BigInt;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum_macros::{Display, EnumString};

/// Uniswap V2 factory deployed at the same address on every supported network
pub const FACTORY_ADDRESS: Address = address!("0x5c69bee701ef814a2b6a3edd4b1652cb9cc5aa6f");

/// keccak256 of the pair contract creation code
pub const INIT_CODE_HASH: B256 = b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

pub const MINIMUM_LIQUIDITY: u64 = 1000;

// 0.3% swap fee expressed as 997/1000
pub const FEE_NUMERATOR: u64 = 997;
pub const FEE_DENOMINATOR: u64 = 1000;

pub const DECIMALS_18: u32 = 18;
pub const UNIV2_SYMBOL: &str = "UNI-V2";
pub const UNIV2_NAME: &str = "Uniswap V2";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum ChainId {
    Mainnet,
    Ropsten,
    Rinkeby,
    Goerli,
    Kovan,
    Other(u64),
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        match id {
            1 => ChainId::Mainnet,
            3 => ChainId::Ropsten,
            4 => ChainId::Rinkeby,
            5 => ChainId::Goerli,
            42 => ChainId::Kovan,
            other => ChainId::Other(other),
        }
    }
}

impl From<ChainId> for u64 {
    fn from(chain_id: ChainId) -> Self {
        match chain_id {
            ChainId::Mainnet => 1,
            ChainId::Ropsten => 3,
            ChainId::Rinkeby => 4,
            ChainId::Goerli => 5,
            ChainId::Kovan => 42,
            ChainId::Other(id) => id,
        }
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainId::Mainnet => write!(f, "Mainnet"),
            ChainId::Ropsten => write!(f, "Ropsten"),
            ChainId::Rinkeby => write!(f, "Rinkeby"),
            ChainId::Goerli => write!(f, "Goerli"),
            ChainId::Kovan => write!(f, "Kovan"),
            ChainId::Other(id) => write!(f, "ChainID({id})"),
        }
    }
}

impl ChainId {
    /// Address of the wrapped native token, if the network is known
    pub fn weth_address(&self) -> Option<Address> {
        match self {
            ChainId::Mainnet => Some(address!("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2")),
            ChainId::Ropsten | ChainId::Rinkeby => Some(address!("0xc778417e063141139fce010982780140aa0cd5ab")),
            ChainId::Goerli => Some(address!("0xb4fbf271143f4fbf7b91a5ded31805e42b2208d6")),
            ChainId::Kovan => Some(address!("0xd0a1e359811322d97991e03f863a0c30c2cf029c")),
            ChainId::Other(_) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SolidityType {
    Uint8,
    Uint256,
}

impl SolidityType {
    /// Largest value representable by the type
    pub fn maximum(&self) -> BigInt {
        match self {
            SolidityType::Uint8 => BigInt::from(u8::MAX),
            SolidityType::Uint256 => (BigInt::one() << 256u32) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_chain_id_display() {
        assert_eq!(ChainId::Mainnet.to_string(), "Mainnet");
        assert_eq!(ChainId::Ropsten.to_string(), "Ropsten");
        assert_eq!(ChainId::Rinkeby.to_string(), "Rinkeby");
        assert_eq!(ChainId::Goerli.to_string(), "Goerli");
        assert_eq!(ChainId::Kovan.to_string(), "Kovan");
        assert_eq!(ChainId::from(2).to_string(), "ChainID(2)");
    }

    #[test]
    fn test_chain_id_round_trips_through_u64() {
        for id in [1u64, 3, 4, 5, 42, 137] {
            assert_eq!(u64::from(ChainId::from(id)), id);
        }
        assert_eq!(serde_json::to_string(&ChainId::Kovan).unwrap(), "42");
    }

    #[test]
    fn test_solidity_type_maxima() {
        assert_eq!(SolidityType::Uint8.maximum(), BigInt::from(255));
        assert_eq!(
            SolidityType::Uint256.maximum().to_string(),
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
        );
        assert_eq!(SolidityType::from_str("uint256").unwrap(), SolidityType::Uint256);
    }

    #[test]
    fn test_trade_type_display() {
        assert_eq!(TradeType::ExactInput.to_string(), "EXACT_INPUT");
        assert_eq!(TradeType::from_str("EXACT_OUTPUT").unwrap(), TradeType::ExactOutput);
    }
}
