use crate::errors::{AmmError, Result};
use crate::number::{FormatOptions, format_fixed, format_significant};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Exact rational number.
///
/// The denominator is always positive, the sign lives on the numerator. Never reduced: `2/4` keeps
/// numerator 2 and denominator 4. Derived equality is structural, use [`Fraction::equal_to`] to
/// compare values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FractionParts")]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

#[derive(Deserialize)]
struct FractionParts {
    numerator: BigInt,
    denominator: BigInt,
}

impl TryFrom<FractionParts> for Fraction {
    type Error = AmmError;

    fn try_from(parts: FractionParts) -> Result<Self> {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

impl Fraction {
    /// Fails with `ZeroDenominator` when `denominator` is zero
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AmmError::ZeroDenominator);
        }
        Ok(Self::signed(numerator.into(), denominator))
    }

    pub fn from_integer(numerator: impl Into<BigInt>) -> Self {
        Self { numerator: numerator.into(), denominator: BigInt::one() }
    }

    // denominator must be non-zero
    fn signed(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_negative() { Self { numerator: -numerator, denominator: -denominator } } else { Self { numerator, denominator } }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Floor of `numerator / denominator`
    pub fn quotient(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// Truncated remainder over the same denominator, carrying the numerator's sign
    pub fn remainder(&self) -> Fraction {
        Fraction { numerator: &self.numerator % &self.denominator, denominator: self.denominator.clone() }
    }

    /// Fails with `ZeroDenominator` for a zero value
    pub fn invert(&self) -> Result<Fraction> {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction { numerator: &self.numerator + &other.numerator, denominator: self.denominator.clone() };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Fraction { numerator: &self.numerator - &other.numerator, denominator: self.denominator.clone() };
        }
        Fraction {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Fraction { numerator: &self.numerator * &other.numerator, denominator: &self.denominator * &other.denominator }
    }

    /// Fails with `ZeroDenominator` when `other` is zero
    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        Fraction::new(&self.numerator * &other.denominator, &self.denominator * &other.numerator)
    }

    /// Compares values by cross-multiplication
    pub fn compare(&self, other: &Fraction) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }

    pub fn less_than(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn equal_to(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn greater_than(&self, other: &Fraction) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Decimal string with `significant_digits` digits after any leading zeros of the fraction part
    pub fn to_significant(&self, significant_digits: usize, options: &FormatOptions) -> String {
        format_significant(&self.numerator, &self.denominator, significant_digits, options)
    }

    /// Decimal string with exactly `decimal_places` fraction digits
    pub fn to_fixed(&self, decimal_places: usize, options: &FormatOptions) -> String {
        format_fixed(&self.numerator, &self.denominator, decimal_places, options)
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<BigInt> for Fraction {
    fn from(numerator: BigInt) -> Self {
        Fraction::from_integer(numerator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        assert_eq!(Fraction::new(1, 0), Err(AmmError::ZeroDenominator));
        assert_eq!(frac(0, 1).invert(), Err(AmmError::ZeroDenominator));
        assert_eq!(frac(3, 4).divide(&frac(0, 7)), Err(AmmError::ZeroDenominator));
        let json = serde_json::json!({ "numerator": BigInt::from(1), "denominator": BigInt::zero() });
        assert!(serde_json::from_value::<Fraction>(json).is_err());
    }

    #[test]
    fn test_sign_moves_to_numerator() -> eyre::Result<()> {
        let half = Fraction::new(1, -2)?;
        assert_eq!(half.numerator(), &BigInt::from(-1));
        assert_eq!(half.denominator(), &BigInt::from(2));
        assert!(half.less_than(&Fraction::from_integer(0)));
        assert_eq!(Fraction::new(-3, -4)?, frac(3, 4));

        let inverted = frac(-1, 2).invert()?;
        assert_eq!(inverted, frac(-2, 1));
        assert!(inverted.less_than(&Fraction::from_integer(0)));

        let divided = frac(1, 2).divide(&frac(-1, 3))?;
        assert_eq!(divided.denominator(), &BigInt::from(2));
        assert!(divided.equal_to(&frac(-3, 2)));
        assert_eq!(divided.quotient(), BigInt::from(-2));
        Ok(())
    }

    #[test]
    fn test_quotient() {
        assert_eq!(frac(8, 3).quotient(), BigInt::from(2));
        assert_eq!(frac(12, 4).quotient(), BigInt::from(3));
        assert_eq!(frac(16, 5).quotient(), BigInt::from(3));
        assert_eq!(frac(-7, 2).quotient(), BigInt::from(-4));
    }

    #[test]
    fn test_remainder() {
        assert_eq!(frac(8, 3).remainder(), frac(2, 3));
        assert_eq!(frac(12, 4).remainder(), frac(0, 4));
        assert_eq!(frac(16, 5).remainder(), frac(1, 5));
        assert_eq!(frac(-7, 2).remainder(), frac(-1, 2));
    }

    #[test]
    fn test_invert() -> eyre::Result<()> {
        assert_eq!(frac(5, 10).invert()?, frac(10, 5));
        Ok(())
    }

    #[test]
    fn test_add_subtract() {
        assert_eq!(frac(1, 10).add(&frac(4, 12)), frac(52, 120));
        assert_eq!(frac(1, 5).add(&frac(2, 5)), frac(3, 5));
        assert_eq!(frac(1, 10).subtract(&frac(4, 12)), frac(-28, 120));
        assert_eq!(frac(3, 5).subtract(&frac(2, 5)), frac(1, 5));
    }

    #[test]
    fn test_multiply_divide() -> eyre::Result<()> {
        assert_eq!(frac(1, 10).multiply(&frac(4, 12)), frac(4, 120));
        assert_eq!(frac(1, 3).multiply(&frac(2, 3)), frac(2, 9));
        assert_eq!(frac(1, 10).divide(&frac(4, 12))?, frac(12, 40));
        assert_eq!(frac(1, 2).divide(&frac(5, 6))?, frac(6, 10));
        Ok(())
    }

    fn samples() -> Vec<Fraction> {
        let mut samples = Vec::new();
        for (numerator, denominator) in [(0, 1), (1, 3), (-7, 2), (5, -9), (123_456_789, 1000), (-1, -11), (4, 12), (-250, 7)] {
            samples.push(frac(numerator, denominator));
        }
        samples
    }

    #[test]
    fn test_add_then_subtract_is_identity() {
        for a in samples() {
            for b in samples() {
                let back = a.add(&b).subtract(&b);
                assert!(back.equal_to(&a), "({a} + {b}) - {b} = {back}");
            }
        }
    }

    #[test]
    fn test_multiply_then_divide_is_identity() -> eyre::Result<()> {
        for a in samples() {
            for b in samples().into_iter().filter(|b| !b.numerator().is_zero()) {
                let back = a.multiply(&b).divide(&b)?;
                assert!(back.equal_to(&a), "({a} * {b}) / {b} = {back}");
                assert!(back.denominator().is_positive());
            }
        }
        Ok(())
    }

    #[test]
    fn test_comparisons() {
        assert!(frac(1, 10).less_than(&frac(4, 12)));
        assert!(!frac(1, 3).less_than(&frac(4, 12)));
        assert!(!frac(5, 12).less_than(&frac(4, 12)));

        assert!(frac(1, 3).equal_to(&frac(4, 12)));
        assert!(!frac(1, 10).equal_to(&frac(4, 12)));
        assert_ne!(frac(1, 3), frac(4, 12));

        assert!(frac(5, 12).greater_than(&frac(4, 12)));
        assert!(!frac(1, 3).greater_than(&frac(4, 12)));
    }

    #[test]
    fn test_to_significant() {
        let options = FormatOptions::new();
        assert_eq!(frac(30, 10).to_significant(0, &options), "3");
        assert_eq!(frac(4, 10).to_significant(1, &options), "0.4");
        assert_eq!(frac(126, 100).to_significant(1, &options), "1.3");
        assert_eq!(frac(126, 100).to_significant(2, &options), "1.26");
        assert_eq!(frac(124, 100).to_significant(1, &options), "1.2");
        assert_eq!(frac(124, 100).to_significant(2, &options), "1.24");
        assert_eq!(frac(-1, 3).to_significant(2, &options), "-0.33");
    }

    #[test]
    fn test_to_fixed() {
        let options = FormatOptions::new();
        assert_eq!(frac(1, 8).to_fixed(2, &options), "0.13");
        assert_eq!(frac(1, 8).to_fixed(2, &options.clone().with_rounding(crate::number::Rounding::RoundDown)), "0.12");
        assert_eq!(frac(2_000_000, 1).to_fixed(1, &options), "2,000,000.0");
    }

    #[test]
    fn test_serde() -> eyre::Result<()> {
        let fraction = frac(52, 120);
        let decoded: Fraction = serde_json::from_str(&serde_json::to_string(&fraction)?)?;
        assert_eq!(decoded, fraction);
        Ok(())
    }
}
