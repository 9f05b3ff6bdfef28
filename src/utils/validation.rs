use crate::errors::{AmmError, Result};
use crate::utils::SolidityType;
use alloy_primitives::Address;
use num_bigint::BigInt;
use num_traits::Zero;
use std::str::FromStr;

/// Checks that `value` fits the unsigned solidity type `ty`
pub fn validate_solidity_type_instance(value: &BigInt, ty: SolidityType) -> Result<()> {
    if value < &BigInt::zero() || value > &ty.maximum() {
        return Err(AmmError::InvalidSolidityType { value: value.clone(), ty });
    }
    Ok(())
}

/// Parses a hex address, with or without checksum
pub fn parse_address(address: &str) -> eyre::Result<Address> {
    Address::from_str(address).map_err(|e| eyre::eyre!("invalid address {}: {}", address, e))
}
