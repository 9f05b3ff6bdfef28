pub mod cache;
pub mod config_loader;
pub mod constants;
pub mod validation;

pub use cache::{CacheStats, PairAddressCache};
pub use config_loader::*;
pub use constants::*;
pub use validation::{parse_address, validate_solidity_type_instance};
