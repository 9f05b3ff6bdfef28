use crate::entities::Fraction;
use crate::errors::Result;
use crate::number::FormatOptions;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// A ratio shown as a percentage: `1/4` prints as `25`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    pub fn fraction(&self) -> &Fraction {
        &self.0
    }

    fn scaled(&self) -> Fraction {
        self.0.multiply(&Fraction::from_integer(100))
    }

    pub fn to_significant(&self, significant_digits: usize, options: &FormatOptions) -> String {
        self.scaled().to_significant(significant_digits, options)
    }

    pub fn to_fixed(&self, decimal_places: usize, options: &FormatOptions) -> String {
        self.scaled().to_fixed(decimal_places, options)
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Self(fraction)
    }
}
