use super::Rounding;

/// Formatting and rounding settings for decimal output.
///
/// Defaults: `.` decimal separator, `,` every 3 integer digits, no fraction grouping, no fixed
/// decimal places, half-up rounding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub decimal_separator: char,
    pub group_separator: char,
    pub group_size: usize,
    pub secondary_group_size: usize,
    pub fraction_group_separator: char,
    pub fraction_group_size: usize,
    pub decimal_places: Option<usize>,
    pub rounding: Rounding,
    /// Decimal places used by [`super::decimal_round`], `None` leaves the value untouched
    pub precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            group_size: 3,
            secondary_group_size: 0,
            fraction_group_separator: ' ',
            fraction_group_size: 0,
            decimal_places: None,
            rounding: Rounding::RoundHalfUp,
            precision: None,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_separator(self, decimal_separator: char) -> Self {
        Self { decimal_separator, ..self }
    }

    pub fn with_group_separator(self, group_separator: char) -> Self {
        Self { group_separator, ..self }
    }

    /// A group size of zero disables integer grouping
    pub fn with_group_size(self, group_size: usize) -> Self {
        Self { group_size, ..self }
    }

    /// Size of every integer group after the first, e.g. `2` for `12,34,56,789`
    pub fn with_secondary_group_size(self, secondary_group_size: usize) -> Self {
        Self { secondary_group_size, ..self }
    }

    pub fn with_fraction_group_separator(self, fraction_group_separator: char) -> Self {
        Self { fraction_group_separator, ..self }
    }

    pub fn with_fraction_group_size(self, fraction_group_size: usize) -> Self {
        Self { fraction_group_size, ..self }
    }

    pub fn with_decimal_places(self, decimal_places: usize) -> Self {
        Self { decimal_places: Some(decimal_places), ..self }
    }

    pub fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding, ..self }
    }

    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision: Some(precision), ..self }
    }
}
