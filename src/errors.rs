use crate::utils::SolidityType;
use num_bigint::BigInt;

pub type Result<T, E = AmmError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    // validation
    #[error("tokens are on different chains")]
    DifferentChain,
    #[error("token does not belong to the pair")]
    DifferentToken,
    #[error("tokens have the same address")]
    SameAddress,
    #[error("currencies do not match")]
    InvalidCurrency,
    #[error("invalid pairs")]
    InvalidPairs,
    #[error("pairs span different chains")]
    InvalidPairsChainIds,
    #[error("input token is not in the first pair")]
    InvalidInput,
    #[error("output token is not in the last pair")]
    InvalidOutput,
    #[error("pairs do not form a path")]
    InvalidPath,
    #[error("{value} is not a {ty}")]
    InvalidSolidityType { value: BigInt, ty: SolidityType },
    #[error("invalid slippage tolerance")]
    InvalidSlippageTolerance,
    #[error("invalid best trade options")]
    InvalidOption,
    #[error("invalid recursion state")]
    InvalidRecursion,
    #[error("fraction with a zero denominator")]
    ZeroDenominator,

    // liquidity
    #[error("insufficient reserves")]
    InsufficientReserves,
    #[error("insufficient input amount")]
    InsufficientInputAmount,
    #[error("invalid liquidity")]
    InvalidLiquidity,
    #[error("invalid kLast")]
    InvalidKLast,

    // formatting
    #[error("invalid rounding mode: {0}")]
    InvalidRoundingMode(String),
}

impl AmmError {
    /// Errors that only disqualify a single pair during route search
    pub fn is_insufficient_liquidity(&self) -> bool {
        matches!(self, AmmError::InsufficientInputAmount | AmmError::InsufficientReserves)
    }
}
