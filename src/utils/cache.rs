use crate::utils::constants::{FACTORY_ADDRESS, INIT_CODE_HASH};
use ahash::{HashMap, HashMapExt};
use alloy_primitives::{Address, B256, keccak256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, trace};

/// Lookup statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 { 0.0 } else { hits as f64 / total as f64 }
    }
}

/// Memoised CREATE2 pair addresses for one factory.
///
/// Keys are `(token0, token1)` in canonical order. A miss computes the address under the write
/// lock; two threads missing on the same key both store the same value.
#[derive(Debug)]
pub struct PairAddressCache {
    factory_address: Address,
    init_code_hash: B256,
    // token0 address -> token1 address -> pair address
    addresses: RwLock<HashMap<Address, HashMap<Address, Address>>>,
    pub stats: CacheStats,
}

impl PairAddressCache {
    pub fn new(factory_address: Address, init_code_hash: B256, capacity: usize) -> Self {
        debug!(%factory_address, %init_code_hash, capacity, "pair address cache created");
        Self { factory_address, init_code_hash, addresses: RwLock::new(HashMap::with_capacity(capacity)), stats: CacheStats::default() }
    }

    pub fn factory_address(&self) -> Address {
        self.factory_address
    }

    pub fn init_code_hash(&self) -> B256 {
        self.init_code_hash
    }

    /// Pair address for `token0 < token1`
    pub fn get_address(&self, token0: Address, token1: Address) -> Address {
        {
            let addresses = self.addresses.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(pair_address) = addresses.get(&token0).and_then(|inner| inner.get(&token1)) {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                trace!(%token0, %token1, %pair_address, "pair address cache hit");
                return *pair_address;
            }
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        let mut addresses = self.addresses.write().unwrap_or_else(PoisonError::into_inner);
        let pair_address = *addresses
            .entry(token0)
            .or_default()
            .entry(token1)
            .or_insert_with(|| compute_pair_address(self.factory_address, self.init_code_hash, token0, token1));
        trace!(%token0, %token1, %pair_address, "pair address cached");
        pair_address
    }

    /// Number of cached pair addresses
    pub fn len(&self) -> usize {
        self.addresses.read().unwrap_or_else(PoisonError::into_inner).values().map(|inner| inner.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PairAddressCache {
    fn default() -> Self {
        Self::new(FACTORY_ADDRESS, INIT_CODE_HASH, 16)
    }
}

/// `create2(factory, keccak256(token0 ++ token1), init_code_hash)`
pub fn compute_pair_address(factory_address: Address, init_code_hash: B256, token0: Address, token1: Address) -> Address {
    let salt = keccak256([token0.as_slice(), token1.as_slice()].concat());
    factory_address.create2(salt, init_code_hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_known_pair_addresses() {
        let cache = PairAddressCache::default();

        // CRO / USDC
        let cro = address!("0xa0b73e1ff0b80914ab6fe0444e65848c4c34450b");
        let usdc = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        assert_eq!(cache.get_address(cro, usdc), address!("0xeafac2e662ec23860836da89d3711bff0260cd8d"));
        // second lookup served from the cache
        assert_eq!(cache.get_address(cro, usdc), address!("0xeafac2e662ec23860836da89d3711bff0260cd8d"));

        // WBTC / DAI and WBTC / AAVE share the first level key
        let wbtc = address!("0x2260fac5e5542a773aa44fbcfedf7c193bc2c599");
        let dai = address!("0x6b175474e89094c44da98b954eedeac495271d0f");
        let aave = address!("0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9");
        assert_eq!(cache.get_address(wbtc, dai), address!("0x231b7589426ffe1b75405526fc32ac09d44364c4"));
        assert_eq!(cache.get_address(wbtc, aave), address!("0x48978ef5beb2d69e27def9c046cebe18ab5708ad"));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats.hits.load(Ordering::Relaxed), 1);
        assert_eq!(cache.stats.misses.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_cached_matches_computed() {
        let cache = PairAddressCache::default();
        let dai = address!("0x6b175474e89094c44da98b954eedeac495271d0f");
        let usdc = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

        let computed = compute_pair_address(FACTORY_ADDRESS, INIT_CODE_HASH, dai, usdc);
        assert_eq!(computed, address!("0xae461ca67b15dc8dc81ce7615e0320da1a9ab8d5"));
        assert_eq!(cache.get_address(dai, usdc), computed);
        assert_eq!(cache.get_address(dai, usdc), computed);
    }

    #[test]
    fn test_matches_raw_create2_preimage() {
        let dai = address!("0x6b175474e89094c44da98b954eedeac495271d0f");
        let usdc = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

        let mut preimage = vec![0xffu8];
        preimage.extend_from_slice(FACTORY_ADDRESS.as_slice());
        preimage.extend_from_slice(keccak256([dai.as_slice(), usdc.as_slice()].concat()).as_slice());
        preimage.extend_from_slice(INIT_CODE_HASH.as_slice());
        let expected = Address::from_slice(&keccak256(preimage)[12..]);

        assert_eq!(compute_pair_address(FACTORY_ADDRESS, INIT_CODE_HASH, dai, usdc), expected);
        assert_eq!(expected, address!("0xae461ca67b15dc8dc81ce7615e0320da1a9ab8d5"));
    }

    #[test]
    fn test_concurrent_misses_are_idempotent() {
        let cache = Arc::new(PairAddressCache::default());
        let dai = address!("0x6b175474e89094c44da98b954eedeac495271d0f");
        let usdc = address!("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.get_address(dai, usdc))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), address!("0xae461ca67b15dc8dc81ce7615e0320da1a9ab8d5"));
        }
        assert_eq!(cache.len(), 1);
    }
}
