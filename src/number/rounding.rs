use crate::errors::AmmError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString, VariantNames};

#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, EnumString, VariantNames, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rounding {
    /// Truncate toward zero
    RoundDown,
    /// Half away from zero
    #[default]
    RoundHalfUp,
    /// Away from zero whenever digits are dropped
    RoundUp,
}

impl Rounding {
    /// Parses `ROUND_DOWN`, `ROUND_HALF_UP` or `ROUND_UP`
    pub fn from_name(name: &str) -> Result<Self, AmmError> {
        Rounding::from_str(name).map_err(|_| AmmError::InvalidRoundingMode(name.to_string()))
    }
}

impl TryFrom<i32> for Rounding {
    type Error = AmmError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Rounding::RoundDown),
            1 => Ok(Rounding::RoundHalfUp),
            2 => Ok(Rounding::RoundUp),
            other => Err(AmmError::InvalidRoundingMode(other.to_string())),
        }
    }
}
