use crate::entities::BestTradeOptions;
use crate::number::{FormatOptions, Rounding};
use crate::utils::{ConfigLoaderSync, FACTORY_ADDRESS, INIT_CODE_HASH, LoadConfigError, PairAddressCache, load_from_file_sync};
use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use strum::VariantNames;

/// Settings needed to build pairs and search trades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Pair factory used for CREATE2 address derivation
    pub factory_address: Address,
    /// keccak256 of the pair creation code
    pub init_code_hash: B256,
    /// Initial capacity of the pair address cache
    pub cache_capacity: usize,
    pub max_hops: usize,
    pub max_num_results: usize,
    /// `ROUND_DOWN`, `ROUND_HALF_UP` or `ROUND_UP`
    pub rounding: String,
    pub group_separator: char,
    pub group_size: usize,
    pub decimal_separator: char,
}

impl Default for RouterConfig {
    fn default() -> Self {
        let trade_options = BestTradeOptions::default();
        let format_options = FormatOptions::default();
        Self {
            factory_address: FACTORY_ADDRESS,
            init_code_hash: INIT_CODE_HASH,
            cache_capacity: 16,
            max_hops: trade_options.max_hops,
            max_num_results: trade_options.max_num_results,
            rounding: format_options.rounding.to_string(),
            group_separator: format_options.group_separator,
            group_size: format_options.group_size,
            decimal_separator: format_options.decimal_separator,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouterConfigFile {
    router: RouterConfig,
}

impl ConfigLoaderSync for RouterConfig {
    type SectionType = RouterConfig;

    /// Reads the `[router]` table of a TOML file
    fn load_section_from_file_sync(file_name: impl AsRef<Path>) -> Result<Self::SectionType, LoadConfigError> {
        let file: RouterConfigFile = load_from_file_sync(file_name)?;
        file.router.validated()
    }
}

impl RouterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(factory_address) = lookup("FACTORY_ADDRESS") {
            config.factory_address = Address::from_str(&factory_address).map_err(|e| eyre::eyre!("Invalid FACTORY_ADDRESS: {}", e))?;
        }

        if let Some(init_code_hash) = lookup("INIT_CODE_HASH") {
            config.init_code_hash = B256::from_str(&init_code_hash).map_err(|e| eyre::eyre!("Invalid INIT_CODE_HASH: {}", e))?;
        }

        if let Some(capacity_str) = lookup("PAIR_CACHE_CAPACITY") {
            config.cache_capacity = capacity_str.parse().map_err(|e| eyre::eyre!("Invalid PAIR_CACHE_CAPACITY: {}", e))?;
        }

        if let Some(max_hops_str) = lookup("MAX_HOPS") {
            config.max_hops = max_hops_str.parse().map_err(|e| eyre::eyre!("Invalid MAX_HOPS: {}", e))?;
        }

        if let Some(max_results_str) = lookup("MAX_NUM_RESULTS") {
            config.max_num_results = max_results_str.parse().map_err(|e| eyre::eyre!("Invalid MAX_NUM_RESULTS: {}", e))?;
        }

        if let Some(rounding) = lookup("ROUNDING_MODE") {
            Rounding::from_name(&rounding).map_err(|e| eyre::eyre!("Invalid ROUNDING_MODE: {}, expected one of {:?}", e, Rounding::VARIANTS))?;
            config.rounding = rounding;
        }

        Ok(config.validated()?)
    }

    fn validated(self) -> Result<Self, LoadConfigError> {
        if self.max_hops == 0 || self.max_num_results == 0 {
            return Err(LoadConfigError::ConfigError("max_hops and max_num_results must be positive".to_string()));
        }
        Rounding::from_name(&self.rounding).map_err(|e| LoadConfigError::ConfigError(e.to_string()))?;
        Ok(self)
    }

    pub fn best_trade_options(&self) -> BestTradeOptions {
        BestTradeOptions::new(self.max_num_results, self.max_hops)
    }

    pub fn rounding(&self) -> eyre::Result<Rounding> {
        Ok(Rounding::from_name(&self.rounding)?)
    }

    pub fn format_options(&self) -> eyre::Result<FormatOptions> {
        Ok(FormatOptions::new()
            .with_rounding(self.rounding()?)
            .with_group_separator(self.group_separator)
            .with_group_size(self.group_size)
            .with_decimal_separator(self.decimal_separator))
    }

    pub fn pair_address_cache(&self) -> PairAddressCache {
        PairAddressCache::new(self.factory_address, self.init_code_hash, self.cache_capacity)
    }
}
