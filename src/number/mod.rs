mod options;
mod rounding;

pub use options::FormatOptions;
pub use rounding::Rounding;

use eyre::eyre;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;
use std::str::FromStr;

pub(crate) fn ten_pow(exp: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exp)
}

/// Exact base-10 number `mantissa * 10^-scale`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decimal {
    mantissa: BigInt,
    scale: usize,
}

impl Decimal {
    pub fn new(mantissa: impl Into<BigInt>, scale: usize) -> Self {
        Self { mantissa: mantissa.into(), scale }
    }

    /// `numerator / denominator` rounded to `places` decimal places.
    ///
    /// Panics if `denominator` is zero.
    pub fn from_ratio(numerator: &BigInt, denominator: &BigInt, places: usize, rounding: Rounding) -> Self {
        let negative = numerator.sign() * denominator.sign() == Sign::Minus;
        let divisor = denominator.abs();
        let (quotient, remainder) = (numerator.abs() * ten_pow(places)).div_rem(&divisor);

        let bump = match rounding {
            Rounding::RoundDown => false,
            Rounding::RoundUp => !remainder.is_zero(),
            Rounding::RoundHalfUp => remainder * 2u8 >= divisor,
        };
        let magnitude = if bump { quotient + 1u8 } else { quotient };

        Self { mantissa: if negative { -magnitude } else { magnitude }, scale: places }
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    pub fn round(&self, places: usize, rounding: Rounding) -> Self {
        Self::from_ratio(&self.mantissa, &ten_pow(self.scale), places, rounding)
    }

    /// Same value without trailing fractional zeros
    pub fn normalized(&self) -> Self {
        let ten = BigInt::from(10u8);
        let mut mantissa = self.mantissa.clone();
        let mut scale = self.scale;
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        if mantissa.is_zero() {
            scale = 0;
        }
        Self { mantissa, scale }
    }

    /// Unsigned integer and fraction digits, e.g. `("12", "034")` for `-12.034`
    fn digit_parts(&self) -> (String, String) {
        let digits = self.mantissa.magnitude().to_string();
        let digits = if digits.len() <= self.scale { format!("{}{}", "0".repeat(self.scale + 1 - digits.len()), digits) } else { digits };
        let (int_part, frac_part) = digits.split_at(digits.len() - self.scale);
        (int_part.to_string(), frac_part.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.normalized();
        let (int_part, frac_part) = value.digit_parts();
        if value.is_negative() {
            write!(f, "-")?;
        }
        if frac_part.is_empty() { write!(f, "{int_part}") } else { write!(f, "{int_part}.{frac_part}") }
    }
}

impl FromStr for Decimal {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        if frac_part.starts_with(['+', '-']) || frac_part.contains('_') {
            return Err(eyre!("invalid decimal: {s}"));
        }
        let mantissa = BigInt::from_str(&format!("{int_part}{frac_part}")).map_err(|e| eyre!("invalid decimal {s}: {e}"))?;
        Ok(Self { mantissa, scale: frac_part.len() })
    }
}

/// Rounds `d` to `options.precision` decimal places using `options.rounding`.
/// Without a precision the value is returned unchanged.
pub fn decimal_round(d: &Decimal, options: &FormatOptions) -> Decimal {
    match options.precision {
        Some(places) => d.round(places, options.rounding),
        None => d.clone(),
    }
}

/// Renders `d` with grouped integer digits and optionally grouped, fixed-width fraction digits.
///
/// A value with more fraction digits than `decimal_places` is rounded with `options.rounding` first;
/// a shorter one is padded with zeros.
pub fn decimal_format(d: &Decimal, options: &FormatOptions) -> String {
    let mut value = d.normalized();
    if let Some(places) = options.decimal_places {
        if places < value.scale {
            value = value.round(places, options.rounding);
        }
    }
    let (int_part, mut frac_part) = value.digit_parts();

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    out.push_str(&group_integer(&int_part, options));

    if let Some(places) = options.decimal_places {
        if frac_part.len() < places {
            frac_part.push_str(&"0".repeat(places - frac_part.len()));
        }
        frac_part.truncate(places);
    }
    if frac_part.is_empty() {
        return out;
    }

    out.push(options.decimal_separator);
    out.push_str(&group_fraction(&frac_part, options));
    out
}

fn group_integer(digits: &str, options: &FormatOptions) -> String {
    if options.group_size == 0 || digits.len() <= options.group_size {
        return digits.to_string();
    }
    let secondary = if options.secondary_group_size > 0 { options.secondary_group_size } else { options.group_size };

    // groups are collected right to left
    let (head, first) = digits.split_at(digits.len() - options.group_size);
    let mut groups = vec![first];
    let mut rest = head;
    while rest.len() > secondary {
        let (head, group) = rest.split_at(rest.len() - secondary);
        groups.push(group);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(&options.group_separator.to_string())
}

fn group_fraction(digits: &str, options: &FormatOptions) -> String {
    if options.fraction_group_size == 0 {
        return digits.to_string();
    }
    digits
        .as_bytes()
        .chunks(options.fraction_group_size)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(&options.fraction_group_separator.to_string())
}

/// Zeros directly after the decimal point of `|numerator / denominator| < 1`
fn leading_fraction_zeros(numerator: &BigInt, denominator: &BigInt) -> usize {
    let target = denominator.abs();
    let mut scaled = numerator.abs() * 10u8;
    let mut zeros = 0;
    while scaled < target {
        zeros += 1;
        scaled *= 10u8;
    }
    zeros
}

/// `numerator / denominator` with `significant_digits` digits after any leading fraction zeros,
/// trailing zeros trimmed.
///
/// Rounds once, to `decimal_places` when that is the shorter width.
pub(crate) fn format_significant(numerator: &BigInt, denominator: &BigInt, significant_digits: usize, options: &FormatOptions) -> String {
    let mut places = significant_digits;
    if !numerator.is_zero() && numerator.abs() < denominator.abs() {
        places += leading_fraction_zeros(numerator, denominator);
    }
    if let Some(decimal_places) = options.decimal_places {
        places = places.min(decimal_places);
    }
    let value = Decimal::from_ratio(numerator, denominator, places, options.rounding);
    decimal_format(&value, options)
}

/// `numerator / denominator` with exactly `places` fraction digits
pub(crate) fn format_fixed(numerator: &BigInt, denominator: &BigInt, places: usize, options: &FormatOptions) -> String {
    let value = Decimal::from_ratio(numerator, denominator, places, options.rounding);
    decimal_format(&value, &options.clone().with_decimal_places(places))
}
