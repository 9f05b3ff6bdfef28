use crate::entities::{Pair, Price, Token};
use crate::errors::{AmmError, Result};
use crate::utils::ChainId;
use serde::{Deserialize, Serialize};

/// An ordered path of pairs from `input` to `output`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pairs: Vec<Pair>,
    path: Vec<Token>,
    input: Token,
    output: Token,
    mid_price: Price,
}

impl Route {
    /// Walks `pairs` from `input`, each hop leaving through the pair's other token.
    ///
    /// When `output` is `None` it becomes the last token on the path.
    pub fn new(pairs: Vec<Pair>, input: Token, output: Option<Token>) -> Result<Route> {
        let (first, last) = match (pairs.first(), pairs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AmmError::InvalidPairs),
        };

        let chain_id = first.chain_id();
        if pairs.iter().any(|pair| pair.chain_id() != chain_id) {
            return Err(AmmError::InvalidPairsChainIds);
        }
        if !first.involves_token(&input) {
            return Err(AmmError::InvalidInput);
        }
        if let Some(output) = &output {
            if !last.involves_token(output) {
                return Err(AmmError::InvalidOutput);
            }
        }

        let mut path = Vec::with_capacity(pairs.len() + 1);
        path.push(input.clone());
        for pair in &pairs {
            let current = path.last().ok_or(AmmError::InvalidPath)?;
            let next = pair.other_token(current).map_err(|_| AmmError::InvalidPath)?.clone();
            path.push(next);
        }

        let output = match output {
            Some(output) => output,
            None => path.last().cloned().ok_or(AmmError::InvalidPath)?,
        };
        let mid_price = Price::from_path(&pairs, &path)?;

        Ok(Route { pairs, path, input, output, mid_price })
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn path(&self) -> &[Token] {
        &self.path
    }

    pub fn input(&self) -> &Token {
        &self.input
    }

    pub fn output(&self) -> &Token {
        &self.output
    }

    /// Price of `output` in `input` across every hop, before any trade
    pub fn mid_price(&self) -> &Price {
        &self.mid_price
    }

    pub fn chain_id(&self) -> ChainId {
        self.pairs[0].chain_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Fraction, TokenAmount};
    use crate::utils::PairAddressCache;
    use alloy_primitives::address;

    struct Fixture {
        token0: Token,
        token1: Token,
        weth: Token,
        pair_0_1: Pair,
        pair_0_weth: Pair,
        pair_1_weth: Pair,
    }

    fn fixture() -> eyre::Result<Fixture> {
        let cache = PairAddressCache::default();
        let token0 = Token::new(ChainId::Mainnet, address!("0x0000000000000000000000000000000000000001"), 18, "t0", "t0")?;
        let token1 = Token::new(ChainId::Mainnet, address!("0x0000000000000000000000000000000000000002"), 18, "t1", "t1")?;
        let weth = Token::weth(ChainId::Mainnet).ok_or_else(|| eyre::eyre!("missing weth"))?;

        let pair_0_1 = Pair::new(TokenAmount::new(token0.clone(), 100)?, TokenAmount::new(token1.clone(), 200)?, &cache)?;
        let pair_0_weth = Pair::new(TokenAmount::new(token0.clone(), 100)?, TokenAmount::new(weth.clone(), 100)?, &cache)?;
        let pair_1_weth = Pair::new(TokenAmount::new(token1.clone(), 175)?, TokenAmount::new(weth.clone(), 100)?, &cache)?;

        Ok(Fixture { token0, token1, weth, pair_0_1, pair_0_weth, pair_1_weth })
    }

    #[test]
    fn test_single_pair() -> eyre::Result<()> {
        let f = fixture()?;
        let route = Route::new(vec![f.pair_0_1.clone()], f.token0.clone(), None)?;

        assert_eq!(route.pairs(), &[f.pair_0_1.clone()]);
        assert_eq!(route.path(), &[f.token0.clone(), f.token1.clone()]);
        assert_eq!(route.input(), &f.token0);
        assert_eq!(route.output(), &f.token1);
        assert_eq!(route.chain_id(), ChainId::Mainnet);
        assert!(route.mid_price().raw().equal_to(&Fraction::new(200, 100)?));
        Ok(())
    }

    #[test]
    fn test_multi_hop() -> eyre::Result<()> {
        let f = fixture()?;
        let route = Route::new(vec![f.pair_0_1.clone(), f.pair_1_weth.clone()], f.token0.clone(), Some(f.weth.clone()))?;

        assert_eq!(route.path(), &[f.token0.clone(), f.token1.clone(), f.weth.clone()]);
        assert_eq!(route.output(), &f.weth);
        // 200/100 * 100/175
        assert!(route.mid_price().raw().equal_to(&Fraction::new(8, 7)?));
        assert_eq!(route.mid_price().base_currency(), f.token0.get_currency());
        assert_eq!(route.mid_price().quote_currency(), f.weth.get_currency());
        assert_eq!(Price::from_route(&route)?, route.mid_price().clone());
        Ok(())
    }

    #[test]
    fn test_round_trip_path() -> eyre::Result<()> {
        let f = fixture()?;
        let route = Route::new(vec![f.pair_0_weth.clone(), f.pair_0_1.clone(), f.pair_1_weth.clone()], f.weth.clone(), Some(f.weth.clone()))?;
        assert_eq!(route.path(), &[f.weth.clone(), f.token0.clone(), f.token1.clone(), f.weth.clone()]);
        Ok(())
    }

    #[test]
    fn test_errors() -> eyre::Result<()> {
        let f = fixture()?;

        assert_eq!(Route::new(vec![], f.token0.clone(), None), Err(AmmError::InvalidPairs));
        assert_eq!(Route::new(vec![f.pair_1_weth.clone()], f.token0.clone(), None), Err(AmmError::InvalidInput));
        assert_eq!(
            Route::new(vec![f.pair_0_1.clone()], f.token0.clone(), Some(f.weth.clone())),
            Err(AmmError::InvalidOutput)
        );
        assert_eq!(
            Route::new(vec![f.pair_0_1.clone(), f.pair_0_weth.clone()], f.token0.clone(), None),
            Err(AmmError::InvalidPath)
        );

        let cache = PairAddressCache::default();
        let kovan0 = Token::new(ChainId::Kovan, f.token0.get_address(), 18, "t0", "t0")?;
        let kovan1 = Token::new(ChainId::Kovan, f.token1.get_address(), 18, "t1", "t1")?;
        let kovan_pair = Pair::new(TokenAmount::new(kovan0, 100)?, TokenAmount::new(kovan1, 100)?, &cache)?;
        assert_eq!(Route::new(vec![f.pair_0_1.clone(), kovan_pair], f.token0.clone(), None), Err(AmmError::InvalidPairsChainIds));
        Ok(())
    }
}
